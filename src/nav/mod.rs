//! Slide navigation: the controller state machine, inner-scroll arbitration
//! and the input vocabulary that drives them.

pub mod controller;
pub mod input;
pub mod scroll;

pub use controller::{Direction, NavState, NavigationController, WheelOutcome};
pub use input::{InputEvent, Key};
pub use scroll::ScrollRegion;
