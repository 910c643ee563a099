//! Component tree - the descendants an [`AppStateProvider`] cascades into
//!
//! Descendants never look the provider up by tree position. Instead the
//! provider hands a [`CascadingValue`] to each child during render, and the
//! app actor hands `&mut AppStateProvider` down during event dispatch. Containers
//! such as [`Section`] pass both through untouched, so any depth works.

pub mod display;
pub mod controls;
pub mod section;

use ratatui::text::Line;

use crate::app::AppStateProvider;
use crate::messages::UiEvent;

pub use controls::CounterControls;
pub use display::{CountDisplay, CountSummary};
pub use section::Section;

/// A unit of UI composition
pub trait Component: Send {
    /// Produce this component's output, reading shared state through `cx`
    fn render(&self, cx: &CascadingValue<'_>) -> Vec<Line<'static>>;

    /// Handle a UI event. Returns true if the event was consumed.
    fn handle_event(&mut self, _event: &UiEvent, _state: &mut AppStateProvider) -> bool {
        false
    }
}

/// Externally supplied subtree rendered by a provider or container
pub type ChildContent = Vec<Box<dyn Component>>;

/// Read handle to the provider, threaded through every render call
#[derive(Debug, Clone, Copy)]
pub struct CascadingValue<'a> {
    provider: &'a AppStateProvider,
}

impl<'a> CascadingValue<'a> {
    pub fn new(provider: &'a AppStateProvider) -> Self {
        CascadingValue { provider }
    }

    pub fn count(&self) -> i64 {
        self.provider.count()
    }
}

/// Offer an event to each child in order, stopping at the first that consumes it
pub fn dispatch_event(
    children: &mut ChildContent,
    event: &UiEvent,
    state: &mut AppStateProvider,
) -> bool {
    children
        .iter_mut()
        .any(|child| child.handle_event(event, state))
}

/// Flatten rendered lines to plain strings
#[cfg(test)]
pub(crate) fn plain_text(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
        .collect()
}
