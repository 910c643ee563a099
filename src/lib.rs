//! # AppState TUI
//!
//! A single state container component, [`AppStateProvider`], hosted in a
//! terminal UI.
//!
//! ## Features
//! - One integer counter owned by the provider, starting at 0
//! - The provider is cascaded to its whole child content through
//!   [`CascadingValue`], with no per-level parameter plumbing
//! - Every assignment requests exactly one re-render, even for an unchanged value
//! - Renders run in request order and read the latest assigned value
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (provider + render queue, Tokio task)

pub mod constants;
pub mod messages;
pub mod components;
pub mod app;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppStateProvider, RenderQueue, RenderScheduler, SubscriptionId};
pub use components::{CascadingValue, ChildContent, Component};
pub use messages::{RenderReason, RenderRequest, RenderState, UiEvent};
