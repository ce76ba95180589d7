//! Pointer input handling for placed stamps.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Handlers are further `impl StampEditor` blocks so
//! the editor stays the single owner of event dispatch.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `handles` - Corner and rotate handle geometry, hit resolution
//! - `coords` - Screen to page-container conversion
//! - `resize` - Pure corner resize math
//! - `pointer_down` - Gesture start (hit testing, selection)
//! - `drag` - Pointer move handling (drag, resize, rotate updates)
//! - `pointer_up` - Gesture end and cancellation

pub mod coords;
pub mod handles;
pub mod resize;

mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use drag::{dragged_position, rotated_rotation};
pub use state::{GestureKind, InputState};
