//! Read-only consumers of the cascaded count

use ratatui::prelude::*;

use super::{CascadingValue, Component};

/// Shows the current count
#[derive(Debug, Default)]
pub struct CountDisplay;

impl Component for CountDisplay {
    fn render(&self, cx: &CascadingValue<'_>) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::raw("Count: "),
            Span::styled(cx.count().to_string(), Style::default().fg(count_color(cx.count())).bold()),
        ])]
    }
}

/// Describes the sign and parity of the count
#[derive(Debug, Default)]
pub struct CountSummary;

impl Component for CountSummary {
    fn render(&self, cx: &CascadingValue<'_>) -> Vec<Line<'static>> {
        let count = cx.count();
        let sign = match count.signum() {
            1 => "positive",
            -1 => "negative",
            _ => "zero",
        };
        let parity = if count % 2 == 0 { "even" } else { "odd" };

        vec![Line::from(Span::styled(
            format!("{} and {}", sign, parity),
            Style::default().fg(Color::DarkGray),
        ))]
    }
}

/// Color for a count value
pub fn count_color(count: i64) -> Color {
    match count.signum() {
        1 => Color::Green,
        -1 => Color::Red,
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scheduler::RenderScheduler;
    use crate::app::AppStateProvider;
    use crate::components::plain_text;
    use crate::messages::UiEvent;

    fn render_at(component: &dyn Component, count: i64) -> Vec<String> {
        let (scheduler, _queue) = RenderScheduler::channel();
        let mut state = AppStateProvider::new(scheduler);
        state.set_count(count);
        plain_text(&component.render(&CascadingValue::new(&state)))
    }

    #[test]
    fn test_count_display() {
        assert_eq!(render_at(&CountDisplay, 0), vec!["Count: 0"]);
        assert_eq!(render_at(&CountDisplay, -12), vec!["Count: -12"]);
    }

    #[test]
    fn test_count_summary() {
        assert_eq!(render_at(&CountSummary, 0), vec!["zero and even"]);
        assert_eq!(render_at(&CountSummary, 7), vec!["positive and odd"]);
        assert_eq!(render_at(&CountSummary, -4), vec!["negative and even"]);
        assert_eq!(render_at(&CountSummary, i64::MIN), vec!["negative and even"]);
    }

    #[test]
    fn test_readouts_do_not_consume_events() {
        let (scheduler, mut queue) = RenderScheduler::channel();
        let mut state = AppStateProvider::new(scheduler);
        assert!(!CountDisplay.handle_event(&UiEvent::Increment, &mut state));
        assert!(!CountSummary.handle_event(&UiEvent::SetCount(3), &mut state));
        assert_eq!(state.count(), 0);
        assert!(queue.try_recv().is_err());
    }
}
