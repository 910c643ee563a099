//! Counter controls - a descendant that writes back through the provider

use ratatui::prelude::*;

use super::{CascadingValue, Component};
use crate::app::AppStateProvider;
use crate::messages::UiEvent;

/// Maps counter events onto the provider's setter.
///
/// Increment and decrement saturate at the `i64` bounds.
#[derive(Debug, Default)]
pub struct CounterControls;

impl Component for CounterControls {
    fn render(&self, _cx: &CascadingValue<'_>) -> Vec<Line<'static>> {
        vec![Line::from(Span::styled(
            "[+] increment  [-] decrement  [0-9] set  [=] reassign",
            Style::default().fg(Color::Cyan),
        ))]
    }

    fn handle_event(&mut self, event: &UiEvent, state: &mut AppStateProvider) -> bool {
        match *event {
            UiEvent::Increment => state.set_count(state.count().saturating_add(1)),
            UiEvent::Decrement => state.set_count(state.count().saturating_sub(1)),
            UiEvent::SetCount(value) => state.set_count(value),
            UiEvent::Reassign => state.set_count(state.count()),
            _ => return false,
        }
        true
    }
}
