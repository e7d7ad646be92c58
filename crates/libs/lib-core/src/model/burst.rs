//! Click burst: short-lived particles radiating from an anchor.
//!
//! Spawned particles live in a [`BurstArena`] until their animation finishes
//! and the caller retires them, so the number alive is always observable.

use std::f64::consts::TAU;

use log::debug;

use crate::config::BurstConfig;
use crate::error::Result;

use super::motion::AnimationOptions;
use super::{AnimationSpec, Container, Keyframe, Point, RandomSource};

pub const BURST_CLASS: &str = "click-particle";

pub type BurstId = u64;

/// Bounding box of the anchor element, viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClickParticle {
    pub id: BurstId,
    pub origin: Point,
    /// Radians in `[0, 2π)`.
    pub angle: f64,
    pub speed: f64,
}

impl ClickParticle {
    /// Final displacement from the origin.
    pub fn offset(&self) -> Point {
        Point::new(self.angle.cos() * self.speed, self.angle.sin() * self.speed)
    }

    pub fn style(&self, config: &BurstConfig) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; width: {size}px; height: {size}px; \
             background: {}; border-radius: 50%; pointer-events: none; z-index: 1000;",
            self.origin.x,
            self.origin.y,
            config.color,
            size = config.size_px,
        )
    }

    pub fn animation(&self, config: &BurstConfig) -> AnimationSpec {
        let offset = self.offset();
        AnimationSpec {
            keyframes: vec![
                Keyframe {
                    transform: "translate(0px, 0px) scale(1)".to_string(),
                    opacity: 1.0,
                },
                Keyframe {
                    transform: format!("translate({}px, {}px) scale(0)", offset.x, offset.y),
                    opacity: 0.0,
                },
            ],
            options: AnimationOptions {
                duration: config.duration_ms,
                easing: "ease-out",
            },
        }
    }
}

/// Live click particles and their nodes.
#[derive(Debug)]
pub struct BurstArena<N> {
    next_id: BurstId,
    live: Vec<(BurstId, N)>,
}

impl<N> Default for BurstArena<N> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
        }
    }
}

impl<N: Clone> BurstArena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of particles spawned and not yet retired.
    pub fn alive(&self) -> usize {
        self.live.len()
    }

    /// Spawn one burst centred on `anchor`.
    ///
    /// A missing anchor spawns nothing. Returned particles must each be
    /// passed to [`BurstArena::retire`] once their animation completes.
    pub fn emit<C, R>(
        &mut self,
        container: &C,
        anchor: Option<Rect>,
        config: &BurstConfig,
        rng: &mut R,
    ) -> Result<Vec<(ClickParticle, N)>>
    where
        C: Container<Node = N>,
        R: RandomSource + ?Sized,
    {
        let Some(anchor) = anchor else {
            debug!("burst anchor missing, skipping");
            return Ok(Vec::new());
        };

        let origin = anchor.center();
        let mut spawned = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let particle = ClickParticle {
                id: self.next_id,
                origin,
                angle: rng.next_f64() * TAU,
                speed: config.speed.sample(rng),
            };
            self.next_id += 1;
            let node = container.append(BURST_CLASS, &particle.style(config))?;
            self.live.push((particle.id, node.clone()));
            spawned.push((particle, node));
        }
        Ok(spawned)
    }

    /// Detach a finished particle. Returns `false` if it was already gone.
    pub fn retire<C>(&mut self, container: &C, id: BurstId) -> Result<bool>
    where
        C: Container<Node = N>,
    {
        let Some(index) = self.live.iter().position(|(live_id, _)| *live_id == id) else {
            return Ok(false);
        };
        let (_, node) = self.live.swap_remove(index);
        container.remove(&node)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryContainer;

    const ANCHOR: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 80.0,
    };

    #[test]
    fn test_emit_spawns_twenty_at_anchor_center() {
        let config = BurstConfig::default();
        let body = MemoryContainer::new();
        let mut arena = BurstArena::new();
        let mut rng = fastrand::Rng::with_seed(4);

        let spawned = arena.emit(&body, Some(ANCHOR), &config, &mut rng).unwrap();

        assert_eq!(spawned.len(), 20);
        assert_eq!(arena.alive(), 20);
        assert_eq!(body.len(), 20);
        for (particle, _) in &spawned {
            assert_eq!(particle.origin, Point::new(300.0, 90.0));
            assert!((0.0..TAU).contains(&particle.angle));
            assert!((100.0..200.0).contains(&particle.speed));
            let distance = particle.offset().x.hypot(particle.offset().y);
            assert!((distance - particle.speed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_retire_after_flight_leaves_nothing() {
        let config = BurstConfig::default();
        let body = MemoryContainer::new();
        let mut arena = BurstArena::new();
        let mut rng = fastrand::Rng::with_seed(9);

        let spawned = arena.emit(&body, Some(ANCHOR), &config, &mut rng).unwrap();
        for (particle, _) in &spawned {
            assert_eq!(particle.animation(&config).duration_ms(), 1_000.0);
            assert!(arena.retire(&body, particle.id).unwrap());
        }

        assert_eq!(arena.alive(), 0);
        assert!(body.is_empty());
        assert!(!arena.retire(&body, spawned[0].0.id).unwrap());
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let config = BurstConfig::default();
        let body = MemoryContainer::new();
        let mut arena = BurstArena::new();
        let mut rng = fastrand::Rng::with_seed(1);

        let spawned = arena.emit(&body, None, &config, &mut rng).unwrap();
        assert!(spawned.is_empty());
        assert_eq!(arena.alive(), 0);
        assert!(body.is_empty());
    }

    #[test]
    fn test_overlapping_bursts_get_distinct_ids() {
        let config = BurstConfig::default();
        let body = MemoryContainer::new();
        let mut arena = BurstArena::new();
        let mut rng = fastrand::Rng::with_seed(2);

        let first = arena.emit(&body, Some(ANCHOR), &config, &mut rng).unwrap();
        let second = arena.emit(&body, Some(ANCHOR), &config, &mut rng).unwrap();
        assert_eq!(arena.alive(), 40);

        for (particle, _) in &first {
            arena.retire(&body, particle.id).unwrap();
        }
        assert_eq!(arena.alive(), 20);
        assert!(second.iter().all(|(particle, node)| {
            particle.id >= 20 && body.contains(*node)
        }));
    }

    #[test]
    fn test_animation_shrinks_and_fades() {
        let particle = ClickParticle {
            id: 0,
            origin: Point::new(0.0, 0.0),
            angle: 0.0,
            speed: 150.0,
        };
        let spec = particle.animation(&BurstConfig::default());
        assert_eq!(spec.keyframes[1].transform, "translate(150px, 0px) scale(0)");
        assert_eq!(spec.keyframes[1].opacity, 0.0);
    }
}
