//! # Effect and Navigation Models
//!
//! Pure state machines behind every moving part of the page.

// region: --- Modules
pub mod burst;
pub mod container;
pub mod counter;
pub mod motion;
pub mod navigation;
pub mod particles;
pub mod random;
pub mod starfield;
pub mod typewriter;
// endregion: --- Modules

// region: --- Re-exports
pub use burst::{BurstArena, BurstId, ClickParticle, Rect};
pub use container::{Container, MemoryContainer, MemoryNode};
pub use counter::{CounterTick, StatCounter};
pub use motion::{cancel_flights, AnimationSpec, FlightSlot, Keyframe, Point, StopFlag, Viewport};
pub use navigation::{NavigationState, Section};
pub use particles::{ParticleMotion, ParticleSystem};
pub use random::{random_star_color, RandomSource};
pub use starfield::{Star, StarfieldGenerator};
pub use typewriter::{Typewriter, TypewriterTick};
// endregion: --- Re-exports
