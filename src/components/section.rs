//! Titled container that passes the cascaded value through to nested children

use ratatui::prelude::*;

use super::{dispatch_event, CascadingValue, ChildContent, Component};
use crate::app::AppStateProvider;
use crate::messages::UiEvent;

/// Renders a heading followed by its indented child content
pub struct Section {
    title: String,
    children: ChildContent,
}

impl Section {
    pub fn new(title: impl Into<String>, children: ChildContent) -> Self {
        Section {
            title: title.into(),
            children,
        }
    }
}

impl Component for Section {
    fn render(&self, cx: &CascadingValue<'_>) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            self.title.clone(),
            Style::default().fg(Color::Yellow).bold(),
        ))];

        for child in &self.children {
            for mut line in child.render(cx) {
                line.spans.insert(0, Span::raw("  "));
                lines.push(line);
            }
        }
        lines
    }

    fn handle_event(&mut self, event: &UiEvent, state: &mut AppStateProvider) -> bool {
        dispatch_event(&mut self.children, event, state)
    }
}
