//! App layer - the state provider and the actor that hosts it
//!
//! The App actor receives UI events, applies them to the provider through its
//! child content, executes queued render requests and emits rendered frames.

pub mod state;
pub mod scheduler;
pub mod actor;

pub use state::{AppStateProvider, SubscriptionId};
pub use scheduler::{RenderQueue, RenderScheduler};
pub use actor::AppActor;
