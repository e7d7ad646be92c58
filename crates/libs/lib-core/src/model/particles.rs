//! Floating particle system.
//!
//! Each particle runs an endless cycle:
//!
//! ```text
//!   next_flight ──> (animation runs) ──> complete ──┐
//!        ^                                          │
//!        └──────────── teleported position <────────┘
//! ```
//!
//! The flight's target is only used to size the translation. When the
//! animation finishes the particle is teleported to a fresh random point rather
//! than left at the target, and the next flight starts from there. Both
//! `next_flight` and `complete` consult the [`StopFlag`] so a torn-down view
//! never schedules another cycle.

use log::debug;

use crate::config::ParticleConfig;
use crate::error::Result;

use super::motion::AnimationOptions;
use super::{AnimationSpec, Container, Keyframe, Point, RandomSource, StopFlag, Viewport};

pub const PARTICLE_CLASS: &str = "particle";

/// Position and liveness of one particle.
#[derive(Debug, Clone)]
pub struct ParticleMotion {
    position: Point,
    stop: StopFlag,
    cycles: u64,
}

impl ParticleMotion {
    pub fn new(position: Point, stop: StopFlag) -> Self {
        Self {
            position,
            stop,
            cycles: 0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Completed traversals so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Plan the next traversal from the current position, or `None` once stopped.
    pub fn next_flight<R: RandomSource + ?Sized>(
        &self,
        config: &ParticleConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Option<AnimationSpec> {
        if self.stop.is_stopped() {
            return None;
        }
        let duration = config.duration_ms.sample(rng);
        let target = viewport.random_point(rng);
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;

        Some(AnimationSpec {
            keyframes: vec![
                Keyframe {
                    transform: "translate(0px, 0px)".to_string(),
                    opacity: config.opacity,
                },
                Keyframe {
                    transform: format!("translate({}px, {}px)", dx, dy),
                    opacity: 0.0,
                },
            ],
            options: AnimationOptions {
                duration,
                easing: "ease-out",
            },
        })
    }

    /// Record a finished traversal and teleport.
    ///
    /// Returns the new position to apply to the node, or `None` if the loop
    /// has been stopped in the meantime.
    pub fn complete<R: RandomSource + ?Sized>(
        &mut self,
        viewport: Viewport,
        rng: &mut R,
    ) -> Option<Point> {
        if self.stop.is_stopped() {
            return None;
        }
        self.cycles += 1;
        self.position = viewport.random_point(rng);
        Some(self.position)
    }
}

pub struct ParticleSystem<'a> {
    config: &'a ParticleConfig,
}

impl<'a> ParticleSystem<'a> {
    pub fn new(config: &'a ParticleConfig) -> Self {
        Self { config }
    }

    /// Inline style placing a particle at `position`.
    pub fn style(&self, position: Point) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; background: {color}; \
             border-radius: 50%; pointer-events: none; opacity: {opacity}; \
             left: {x}px; top: {y}px;",
            size = self.config.size_px,
            color = self.config.color,
            opacity = self.config.opacity,
            x = position.x,
            y = position.y,
        )
    }

    /// Replace the container's children with a fresh batch of particles.
    ///
    /// Every returned motion shares `stop`. An absent container is a no-op.
    pub fn populate<C, R>(
        &self,
        container: Option<&C>,
        viewport: Viewport,
        stop: &StopFlag,
        rng: &mut R,
    ) -> Result<Vec<(C::Node, ParticleMotion)>>
    where
        C: Container,
        R: RandomSource + ?Sized,
    {
        let Some(container) = container else {
            debug!("particle container not mounted, skipping");
            return Ok(Vec::new());
        };

        container.clear()?;
        let mut particles = Vec::with_capacity(self.config.count);
        for _ in 0..self.config.count {
            let position = viewport.random_point(rng);
            let node = container.append(PARTICLE_CLASS, &self.style(position))?;
            particles.push((node, ParticleMotion::new(position, stop.clone())));
        }
        debug!("particle system populated with {} particles", particles.len());
        Ok(particles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryContainer;

    const VIEWPORT: Viewport = Viewport::new(1024.0, 768.0);

    #[test]
    fn test_populate_creates_thirty_inside_viewport() {
        let config = ParticleConfig::default();
        let container = MemoryContainer::new();
        let stop = StopFlag::new();
        let mut rng = fastrand::Rng::with_seed(5);

        let particles = ParticleSystem::new(&config)
            .populate(Some(&container), VIEWPORT, &stop, &mut rng)
            .unwrap();

        assert_eq!(particles.len(), 30);
        assert_eq!(container.len(), 30);
        assert!(particles.iter().all(|(_, motion)| VIEWPORT.contains(motion.position())));
    }

    #[test]
    fn test_flight_translates_towards_target_and_fades() {
        let config = ParticleConfig::default();
        let motion = ParticleMotion::new(Point::new(100.0, 100.0), StopFlag::new());
        let mut rng = fastrand::Rng::with_seed(8);

        let spec = motion.next_flight(&config, VIEWPORT, &mut rng).unwrap();
        assert!(config.duration_ms.contains(spec.duration_ms()));
        assert_eq!(spec.keyframes.len(), 2);
        assert_eq!(spec.keyframes[0].opacity, 0.7);
        assert_eq!(spec.keyframes[1].opacity, 0.0);
        assert!(spec.keyframes[1].transform.starts_with("translate("));
    }

    #[test]
    fn test_complete_teleports_and_loop_continues() {
        let config = ParticleConfig::default();
        let mut motion = ParticleMotion::new(Point::new(0.0, 0.0), StopFlag::new());
        let mut rng = fastrand::Rng::with_seed(13);

        for cycle in 1..=50 {
            assert!(motion.next_flight(&config, VIEWPORT, &mut rng).is_some());
            let position = motion.complete(VIEWPORT, &mut rng).expect("loop is live");
            assert!(VIEWPORT.contains(position));
            assert_eq!(motion.position(), position);
            assert_eq!(motion.cycles(), cycle);
        }
    }

    #[test]
    fn test_stop_flag_ends_loop() {
        let config = ParticleConfig::default();
        let stop = StopFlag::new();
        let mut motion = ParticleMotion::new(Point::new(10.0, 10.0), stop.clone());
        let mut rng = fastrand::Rng::with_seed(21);

        assert!(motion.next_flight(&config, VIEWPORT, &mut rng).is_some());
        stop.stop();
        assert_eq!(motion.complete(VIEWPORT, &mut rng), None);
        assert_eq!(motion.position(), Point::new(10.0, 10.0));
        assert!(motion.next_flight(&config, VIEWPORT, &mut rng).is_none());
        assert_eq!(motion.cycles(), 0);
    }

    #[test]
    fn test_viewport_resize_respected_on_relaunch() {
        let mut motion = ParticleMotion::new(Point::new(900.0, 700.0), StopFlag::new());
        let mut rng = fastrand::Rng::with_seed(34);
        let narrow = Viewport::new(320.0, 480.0);
        for _ in 0..100 {
            let position = motion.complete(narrow, &mut rng).unwrap();
            assert!(narrow.contains(position));
        }
    }

    #[test]
    fn test_missing_container_is_noop() {
        let config = ParticleConfig::default();
        let mut rng = fastrand::Rng::with_seed(55);
        let particles = ParticleSystem::new(&config)
            .populate::<MemoryContainer, _>(None, VIEWPORT, &StopFlag::new(), &mut rng)
            .unwrap();
        assert!(particles.is_empty());
    }

    #[test]
    fn test_repopulate_replaces_previous_batch() {
        let config = ParticleConfig::default();
        let container = MemoryContainer::new();
        let stop = StopFlag::new();
        let mut rng = fastrand::Rng::with_seed(89);
        let system = ParticleSystem::new(&config);

        let first = system.populate(Some(&container), VIEWPORT, &stop, &mut rng).unwrap();
        let first_ids: Vec<u64> = first.iter().map(|(id, _)| *id).collect();

        system.populate(Some(&container), VIEWPORT, &stop, &mut rng).unwrap();
        assert_eq!(container.len(), 30);
        assert!(first_ids.iter().all(|id| !container.contains(*id)));
    }
}
