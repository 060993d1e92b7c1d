//! act Curves
//!
//! Vector, curve and animation algebra for driving visual transitions.
//!
//! # Features
//!
//! - **Vectors**: one generic N-component implementation for 1D to 4D
//! - **Bezier Curves**: cubic position and velocity at any progress
//! - **Animations**: curves played back over absolute time spans
//! - **Frame Scheduler**: per-frame callbacks with RAII subscriptions
//! - **Keyed Transitions**: enter / update / exit lifecycle for item lists
//! - **Slide Transitions**: ready-made 1D hooks with momentum carry-over

pub mod animation;
pub mod curve;
pub mod error;
pub mod scheduler;
pub mod slide;
pub mod transition;
pub mod vectors;

pub use animation::{Animation, AnimationSample, TimeSpan};
pub use curve::{cubic_point, quadratic_point, Bezier4};
pub use error::CurveError;
pub use scheduler::{FrameScheduler, SchedulerHandle, Subscription, SubscriptionId};
pub use slide::{SlideTransition, SlideTransitionConfig, TransitionSlot, DEFAULT_DURATION};
pub use transition::{SlotId, Transition, TransitionHooks};
pub use vectors::{
    lerp, Components, Interpolate, Vector, Vector1D, Vector2D, Vector3D, Vector4D, VectorApi,
};
