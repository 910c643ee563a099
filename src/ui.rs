//! Terminal drawing for rendered frames

use ratatui::{prelude::*, widgets::*};

use crate::components::display::count_color;
use crate::constants::{APP_NAME, APP_VERSION, HELP_LINES};
use crate::messages::RenderState;

/// Draw a complete frame
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Provider subtree
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    draw_body(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} v{} ", APP_NAME, APP_VERSION),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("count={}", state.count),
            Style::default().fg(count_color(state.count)),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_body(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" AppStateProvider ");

    let body = Paragraph::new(state.body.clone())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(body, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.seq == 0 {
        String::from(" waiting for first render | ?:help | q:quit ")
    } else {
        format!(
            " render #{} ({}) | ?:help | q:quit ",
            state.seq,
            state.reason.as_str()
        )
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
