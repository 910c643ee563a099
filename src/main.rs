//! AppState TUI - a cascading state provider hosted in the terminal
//!
//! Architecture:
//! - UI Layer (Ratatui) - draws published frames, turns keys into events
//! - App Layer - actor owning the provider, executing queued renders in order

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use appstate_tui::components::{ChildContent, CountDisplay, CountSummary, CounterControls, Section};
use appstate_tui::constants::{LOG_FILE, POLL_INTERVAL_MS};
use appstate_tui::messages::ui_events::key_to_ui_event;
use appstate_tui::ui::draw_ui;
use appstate_tui::{AppActor, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// The subtree the provider cascades into
fn child_content() -> ChildContent {
    let readout: ChildContent = vec![Box::new(CountDisplay), Box::new(CountSummary)];
    let controls: ChildContent = vec![Box::new(CounterControls)];
    vec![
        Box::new(Section::new("Value", readout)),
        Box::new(Section::new("Controls", controls)),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(child_content(), render_tx);
    let actor_handle = tokio::spawn(app_actor.run(ui_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    if let Err(e) = actor_handle.await {
        tracing::error!(error = %e, "app actor terminated abnormally");
    }
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    let _ = ui_tx.send(event);
                    if matches!(event, UiEvent::Quit) {
                        break;
                    }
                }
            }
        }

        // Frames arrive in render order; draw each one
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
            terminal.draw(|f| draw_ui(f, &current_state))?;
        }
    }

    Ok(())
}
