//! App actor - message loop processing UI events and render requests

use tokio::sync::mpsc;

use crate::app::scheduler::{RenderQueue, RenderScheduler};
use crate::app::state::AppStateProvider;
use crate::components::{dispatch_event, ChildContent};
use crate::messages::{RenderRequest, RenderState, UiEvent};

/// App actor that owns the provider and its child content
pub struct AppActor {
    state: AppStateProvider,
    scheduler: RenderScheduler,
    render_queue: RenderQueue,
    child_content: ChildContent,
    render_tx: mpsc::UnboundedSender<RenderState>,
    last_frame: RenderState,
}

impl AppActor {
    pub fn new(child_content: ChildContent, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        let (scheduler, render_queue) = RenderScheduler::channel();
        AppActor {
            state: AppStateProvider::new(scheduler.clone()),
            scheduler,
            render_queue,
            child_content,
            render_tx,
            last_frame: RenderState::default(),
        }
    }

    /// The hosted provider
    pub fn state(&self) -> &AppStateProvider {
        &self.state
    }

    /// Mutable access to the hosted provider, e.g. to register subscribers
    pub fn state_mut(&mut self) -> &mut AppStateProvider {
        &mut self.state
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        self.state.mount();
        tracing::info!("app actor started");

        loop {
            tokio::select! {
                // Pending renders go first so frames reach the UI in request order
                biased;
                Some(request) = self.render_queue.recv() => {
                    self.execute_render(request);
                }
                event = ui_rx.recv() => match event {
                    Some(event) => {
                        if self.handle_ui_event(event) {
                            break;
                        }
                    }
                    // UI layer is gone
                    None => break,
                },
            }
        }

        tracing::info!("app actor stopped");
    }

    /// Execute every render request already queued, in order
    pub fn flush_renders(&mut self) {
        while let Ok(request) = self.render_queue.try_recv() {
            self.execute_render(request);
        }
    }

    /// Render the provider's subtree for one request and publish the frame.
    /// The count is read now, so the frame carries the latest assigned value.
    pub fn execute_render(&mut self, request: RenderRequest) {
        let frame = RenderState {
            seq: request.seq,
            reason: request.reason,
            count: self.state.count(),
            body: self.state.render(&self.child_content),
            show_help: self.last_frame.show_help,
        };
        tracing::trace!(seq = frame.seq, count = frame.count, "rendered");
        self.publish(frame);
    }

    /// Handle a UI event, returns true if quit was requested
    pub fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Remount => self.remount(),
            UiEvent::ToggleHelp => self.set_help(!self.last_frame.show_help),
            UiEvent::CloseHelp => self.set_help(false),
            UiEvent::Quit => return true,
            other => {
                if !dispatch_event(&mut self.child_content, &other, &mut self.state) {
                    tracing::debug!(event = ?other, "event not handled by child content");
                }
            }
        }

        false
    }

    /// Drop the provider and insert a fresh instance in its place.
    /// Renders still queued for the old instance are discarded with it.
    fn remount(&mut self) {
        let mut discarded = 0usize;
        while self.render_queue.try_recv().is_ok() {
            discarded += 1;
        }
        tracing::info!(previous = self.state.count(), discarded, "remounting provider");
        self.state = AppStateProvider::new(self.scheduler.clone());
        self.state.mount();
    }

    /// Toggle the help popup. This is host chrome, not provider state, so the
    /// last frame is re-sent instead of re-rendering the subtree.
    fn set_help(&mut self, show_help: bool) {
        let mut frame = self.last_frame.clone();
        frame.show_help = show_help;
        self.publish(frame);
    }

    fn publish(&mut self, frame: RenderState) {
        self.last_frame = frame.clone();
        let _ = self.render_tx.send(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{plain_text, Component, CountDisplay, CounterControls};
    use crate::messages::RenderReason;

    fn actor() -> (AppActor, mpsc::UnboundedReceiver<RenderState>) {
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let children: ChildContent = vec![
            Box::new(CountDisplay) as Box<dyn Component>,
            Box::new(CounterControls),
        ];
        (AppActor::new(children, render_tx), render_rx)
    }

    fn frames(rx: &mut mpsc::UnboundedReceiver<RenderState>) -> Vec<RenderState> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn test_scenario_same_value_renders_twice() {
        let (mut actor, mut rx) = actor();
        assert_eq!(actor.state().count(), 0);

        actor.handle_ui_event(UiEvent::SetCount(5));
        actor.flush_renders();
        let first = frames(&mut rx);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].count, 5);
        assert_eq!(actor.state().count(), 5);

        actor.handle_ui_event(UiEvent::SetCount(5));
        actor.flush_renders();
        let second = frames(&mut rx);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].reason, RenderReason::CountAssigned);
        assert!(second[0].seq > first[0].seq);
        assert_eq!(actor.state().count(), 5);
    }

    #[test]
    fn test_render_observes_value_at_execution() {
        let (mut actor, mut rx) = actor();
        actor.handle_ui_event(UiEvent::SetCount(1));
        actor.handle_ui_event(UiEvent::SetCount(2));
        actor.flush_renders();

        let published = frames(&mut rx);
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].seq + 1, published[1].seq);
        for frame in &published {
            assert_eq!(frame.count, 2);
            assert_eq!(plain_text(&frame.body)[0], "Count: 2");
        }
    }

    #[test]
    fn test_remount_resets_count() {
        let (mut actor, mut rx) = actor();
        actor.handle_ui_event(UiEvent::SetCount(8));
        actor.handle_ui_event(UiEvent::Remount);
        assert_eq!(actor.state().count(), 0);

        actor.flush_renders();
        let published: Vec<_> = frames(&mut rx)
            .into_iter()
            .map(|f| (f.seq, f.reason, f.count))
            .collect();
        // The assignment's render belonged to the dropped instance
        assert_eq!(published, vec![(2, RenderReason::Mount, 0)]);
    }

    #[test]
    fn test_assignments_after_remount_render_normally() {
        let (mut actor, mut rx) = actor();
        actor.handle_ui_event(UiEvent::SetCount(8));
        actor.flush_renders();
        actor.handle_ui_event(UiEvent::Remount);
        actor.handle_ui_event(UiEvent::Increment);
        actor.flush_renders();

        let published: Vec<_> = frames(&mut rx)
            .into_iter()
            .map(|f| (f.seq, f.reason, f.count))
            .collect();
        assert_eq!(
            published,
            vec![
                (1, RenderReason::CountAssigned, 8),
                (2, RenderReason::Mount, 1),
                (3, RenderReason::CountAssigned, 1),
            ]
        );
    }

    #[test]
    fn test_help_toggle_does_not_render_subtree() {
        let (mut actor, mut rx) = actor();
        actor.handle_ui_event(UiEvent::ToggleHelp);
        actor.flush_renders();

        let published = frames(&mut rx);
        assert_eq!(published.len(), 1);
        assert!(published[0].show_help);
        assert_eq!(published[0].seq, 0);

        actor.handle_ui_event(UiEvent::CloseHelp);
        assert!(!frames(&mut rx)[0].show_help);
    }

    #[test]
    fn test_quit_requested() {
        let (mut actor, _rx) = actor();
        assert!(actor.handle_ui_event(UiEvent::Quit));
        assert!(!actor.handle_ui_event(UiEvent::Increment));
    }

    #[tokio::test]
    async fn test_run_publishes_mount_then_assignments_in_order() {
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let children: ChildContent = vec![Box::new(CounterControls) as Box<dyn Component>];
        let handle = tokio::spawn(AppActor::new(children, render_tx).run(ui_rx));

        let mount = render_rx.recv().await.expect("mount frame");
        assert_eq!(mount.reason, RenderReason::Mount);
        assert_eq!(mount.count, 0);

        ui_tx.send(UiEvent::Increment).unwrap();
        ui_tx.send(UiEvent::Reassign).unwrap();

        let a = render_rx.recv().await.expect("first frame");
        let b = render_rx.recv().await.expect("second frame");
        assert_eq!((a.count, b.count), (1, 1));
        assert!(a.seq < b.seq);

        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();
    }

    #[test]
    fn test_subscribers_via_actor() {
        use std::sync::{Arc, Mutex};

        let (mut actor, _rx) = actor();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        actor.state_mut().subscribe(move |v| sink.lock().unwrap().push(v));

        actor.handle_ui_event(UiEvent::Increment);
        actor.handle_ui_event(UiEvent::Reassign);
        assert_eq!(*seen.lock().unwrap(), vec![1, 1]);
    }
}
