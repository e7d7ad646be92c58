//! Geometry, animation descriptions and cancellation shared by the
//! moving effects.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use super::RandomSource;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible area in CSS pixels, sampled fresh for every particle cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uniform point in `[0, width) x [0, height)`.
    pub fn random_point<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(rng.next_f64() * self.width, rng.next_f64() * self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0.0..self.width.max(f64::MIN_POSITIVE)).contains(&point.x)
            && (0.0..self.height.max(f64::MIN_POSITIVE)).contains(&point.y)
    }
}

/// One Web Animations keyframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub transform: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationOptions {
    pub duration: f64,
    pub easing: &'static str,
}

/// Everything `Element.animate()` needs: keyframes plus timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSpec {
    pub keyframes: Vec<Keyframe>,
    pub options: AnimationOptions,
}

impl AnimationSpec {
    pub fn duration_ms(&self) -> f64 {
        self.options.duration
    }
}

/// Liveness flag for a family of looping tasks.
///
/// Cloned into every task; the owning view raises it on teardown and each
/// task checks it before scheduling more work. `Send + Sync` so it can move
/// into Leptos `on_cleanup` hooks.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The animation a looping task is currently awaiting.
///
/// The task fills the slot when a flight starts and empties it when the
/// flight lands, so whoever owns the slots can cancel what is still running.
#[derive(Debug)]
pub struct FlightSlot<A>(Rc<RefCell<Option<A>>>);

impl<A> Default for FlightSlot<A> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<A> Clone for FlightSlot<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> FlightSlot<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, animation: A) {
        self.0.borrow_mut().replace(animation);
    }

    pub fn land(&self) -> Option<A> {
        self.0.borrow_mut().take()
    }

    pub fn is_flying(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Empty every slot, handing in-flight animations to `cancel`.
///
/// Returns how many were cancelled.
pub fn cancel_flights<A>(slots: &[FlightSlot<A>], mut cancel: impl FnMut(A)) -> usize {
    let mut cancelled = 0;
    for animation in slots.iter().filter_map(FlightSlot::land) {
        cancel(animation);
        cancelled += 1;
    }
    cancelled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_flag_shared_between_clones() {
        let flag = StopFlag::new();
        let task_copy = flag.clone();
        assert!(!task_copy.is_stopped());
        flag.stop();
        assert!(task_copy.is_stopped());
    }

    #[test]
    fn test_cancel_flights_only_touches_live_animations() {
        let slots: Vec<FlightSlot<u32>> = (0..3).map(|_| FlightSlot::new()).collect();
        let task_copy = slots[0].clone();
        task_copy.begin(1);
        slots[1].begin(2);
        assert_eq!(slots[1].land(), Some(2));
        slots[2].begin(3);

        let mut cancelled = Vec::new();
        assert_eq!(cancel_flights(&slots, |id| cancelled.push(id)), 2);
        assert_eq!(cancelled, vec![1, 3]);
        assert!(!task_copy.is_flying());
        assert!(slots.iter().all(|slot| !slot.is_flying()));

        // A second teardown finds nothing left to cancel.
        assert_eq!(cancel_flights(&slots, |_| unreachable!()), 0);
    }

    #[test]
    fn test_random_point_inside_viewport() {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..1_000 {
            assert!(viewport.contains(viewport.random_point(&mut rng)));
        }
        assert!(!viewport.contains(Point::new(1280.0, 10.0)));
        assert!(!viewport.contains(Point::new(-0.5, 10.0)));
    }

    #[test]
    fn test_keyframes_serialize_for_web_animations() {
        let spec = AnimationSpec {
            keyframes: vec![Keyframe {
                transform: "translate(0px, 0px)".to_string(),
                opacity: 1.0,
            }],
            options: AnimationOptions {
                duration: 1_000.0,
                easing: "ease-out",
            },
        };
        let json = serde_json::to_value(&spec).unwrap();
        // Element.animate takes the keyframes as a sequence.
        assert!(json["keyframes"].is_array());
        assert_eq!(json["keyframes"][0]["transform"], "translate(0px, 0px)");
        assert_eq!(json["options"]["easing"], "ease-out");
        assert_eq!(spec.duration_ms(), 1_000.0);
    }
}
