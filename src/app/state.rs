//! App state provider - owns the counter and cascades it to its child content

use ratatui::text::Line;

use crate::app::scheduler::RenderScheduler;
use crate::components::{CascadingValue, ChildContent};
use crate::constants::INITIAL_COUNT;
use crate::messages::RenderReason;

/// Identifies a registered subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(i64) + Send + Sync>;

/// State container holding a single integer.
///
/// Every call to [`set_count`](Self::set_count) requests exactly one render,
/// including when the value is unchanged.
pub struct AppStateProvider {
    count: i64,
    scheduler: RenderScheduler,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl AppStateProvider {
    pub fn new(scheduler: RenderScheduler) -> Self {
        AppStateProvider {
            count: INITIAL_COUNT,
            scheduler,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Current value
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Replace the value and schedule a re-render
    pub fn set_count(&mut self, value: i64) {
        let previous = self.count;
        self.count = value;
        let seq = self.scheduler.request(RenderReason::CountAssigned);
        tracing::debug!(previous, count = value, seq, "count assigned");

        for (_, subscriber) in &self.subscribers {
            subscriber(value);
        }
    }

    /// Request the first render of a freshly inserted provider
    pub fn mount(&mut self) -> u64 {
        let seq = self.scheduler.request(RenderReason::Mount);
        tracing::debug!(seq, "provider mounted");
        seq
    }

    /// Register a callback invoked with the new value after every assignment.
    /// Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(i64) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber, returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Render the child content with this provider cascaded to every descendant
    pub fn render(&self, child_content: &ChildContent) -> Vec<Line<'static>> {
        let cx = CascadingValue::new(self);
        child_content
            .iter()
            .flat_map(|child| child.render(&cx))
            .collect()
    }
}

impl std::fmt::Debug for AppStateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStateProvider")
            .field("count", &self.count)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
