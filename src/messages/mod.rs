//! Message types for inter-layer communication in the actor-based architecture.
//!
//! UI events flow into the app actor, render requests flow from the provider's
//! scheduler back into the actor, and rendered frames flow out to the UI loop.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::{RenderReason, RenderRequest, RenderState};
