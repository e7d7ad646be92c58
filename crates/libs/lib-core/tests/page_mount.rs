//! Whole-page scenarios driven on a virtual clock.

use lib_core::config::EffectsConfig;
use lib_core::model::{
    BurstArena, Container, CounterTick, MemoryContainer, NavigationState, ParticleSystem, Rect,
    Section, StarfieldGenerator, StatCounter, StopFlag, Typewriter, TypewriterTick, Viewport,
};

const VIEWPORT: Viewport = Viewport::new(1440.0, 900.0);

#[test]
fn remount_never_accumulates_background_nodes() {
    let config = EffectsConfig::default();
    let starfield = MemoryContainer::new();
    let particles = MemoryContainer::new();
    let mut rng = fastrand::Rng::with_seed(2024);

    for _ in 0..3 {
        let stop = StopFlag::new();
        StarfieldGenerator::new(&config.starfield)
            .populate(Some(&starfield), &mut rng)
            .unwrap();
        ParticleSystem::new(&config.particles)
            .populate(Some(&particles), VIEWPORT, &stop, &mut rng)
            .unwrap();
        stop.stop();

        assert_eq!(starfield.len(), 100);
        assert_eq!(particles.len(), 30);
    }
}

#[test]
fn teardown_stops_every_particle_loop() {
    let config = EffectsConfig::default();
    let container = MemoryContainer::new();
    let stop = StopFlag::new();
    let mut rng = fastrand::Rng::with_seed(7);

    let mut particles = ParticleSystem::new(&config.particles)
        .populate(Some(&container), VIEWPORT, &stop, &mut rng)
        .unwrap();

    // A few cycles while the view is alive.
    for _ in 0..3 {
        for (_, motion) in particles.iter_mut() {
            assert!(motion.next_flight(&config.particles, VIEWPORT, &mut rng).is_some());
            assert!(motion.complete(VIEWPORT, &mut rng).is_some());
        }
    }

    stop.stop();
    for (_, motion) in particles.iter_mut() {
        assert!(motion.complete(VIEWPORT, &mut rng).is_none());
        assert!(motion.next_flight(&config.particles, VIEWPORT, &mut rng).is_none());
        assert_eq!(motion.cycles(), 3);
    }
}

#[test]
fn counters_and_typewriter_on_a_virtual_clock() {
    let config = EffectsConfig::default();
    let mut counters: Vec<StatCounter> = [3, 50, 1337, 999]
        .into_iter()
        .map(|target| StatCounter::new(target, config.counters.steps))
        .collect();
    let mut typewriter = Typewriter::new(config.typewriter.text.clone());

    let mut counter_done_at = vec![None; counters.len()];
    let mut typewriter_done_at = None;

    // 1ms resolution, both timers share one clock.
    for now in 1..=10_000u32 {
        if now % config.counters.tick_ms == 0 {
            for (i, counter) in counters.iter_mut().enumerate() {
                if counter_done_at[i].is_none() {
                    if let CounterTick::Finished(_) = counter.tick() {
                        counter_done_at[i] = Some(now);
                    }
                }
            }
        }
        if now % config.typewriter.tick_ms == 0
            && typewriter_done_at.is_none()
            && typewriter.tick() == TypewriterTick::Finished
        {
            typewriter_done_at = Some(now);
        }
    }

    // target=50 lands exactly on tick 100.
    assert_eq!(counter_done_at[1], Some(100 * 20));
    for (counter, done) in counters.iter().zip(&counter_done_at) {
        assert_eq!(counter.displayed(), counter.target());
        assert!(done.expect("counter finished") <= 101 * 20);
    }

    let len = typewriter.len() as u32;
    assert_eq!(typewriter_done_at, Some((len + 1) * 100));
    assert_eq!(typewriter.visible(), config.typewriter.text);
}

#[test]
fn easter_egg_burst_is_transient() {
    let config = EffectsConfig::default();
    let body = MemoryContainer::new();
    let mut arena = BurstArena::new();
    let mut rng = fastrand::Rng::with_seed(99);
    let hero_title = Rect {
        left: 40.0,
        top: 200.0,
        width: 600.0,
        height: 96.0,
    };

    let spawned = arena
        .emit(&body, Some(hero_title), &config.burst, &mut rng)
        .unwrap();
    assert_eq!(body.len(), 20);

    // Every flight ends at its fixed duration; retire in completion order.
    let mut finished: Vec<_> = spawned
        .iter()
        .map(|(particle, _)| (particle.animation(&config.burst).duration_ms(), particle.id))
        .collect();
    finished.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (duration, id) in finished {
        assert!(duration <= 1_000.0);
        arena.retire(&body, id).unwrap();
    }

    assert_eq!(arena.alive(), 0);
    assert!(body.is_empty());
}

#[test]
fn navigation_does_not_depend_on_effects() {
    let state = NavigationState::new(Section::Home).toggle_menu();
    let state = state.navigate(Section::Projects);
    assert_eq!(state.current(), Section::Projects);
    assert!(!state.is_menu_open());

    let state = state.navigate(Section::Contact).navigate(Section::About);
    assert_eq!(state.current(), Section::About);
}
