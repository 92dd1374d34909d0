//! Badge view: reads a handed-off record and prints it once.

use std::sync::Arc;
use std::time::Duration;

use regdesk_channel::BadgeChannel;
use regdesk_core::badge::BadgeRecord;
use regdesk_core::slug::badge_key;

use crate::error::ScreenResult;

/// Delay between the first successful render and the print trigger.
pub const PRINT_DELAY: Duration = Duration::from_millis(500);

/// Sink for the physical print side effect.
pub trait Printer: Send + Sync {
    fn print(&self, badge: &BadgeRecord);
}

/// What the badge view is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum BadgeState {
    /// No record under this slug. The view stays here indefinitely --
    /// there is no polling and no retry, and print is never triggered.
    Loading,
    /// A record was found and rendered.
    Ready(BadgeRecord),
}

/// The badge view, mounted for one route.
///
/// Reads `badge-{slug}` off the channel. On the first successful load it
/// schedules exactly one print, [`PRINT_DELAY`] later; re-mounting the same
/// view never schedules a second one.
pub struct BadgeScreen {
    channel: Arc<dyn BadgeChannel>,
    printer: Arc<dyn Printer>,
    state: BadgeState,
    has_printed: bool,
    print_task: Option<tokio::task::JoinHandle<()>>,
}

impl BadgeScreen {
    pub fn new(channel: Arc<dyn BadgeChannel>, printer: Arc<dyn Printer>) -> Self {
        Self {
            channel,
            printer,
            state: BadgeState::Loading,
            has_printed: false,
            print_task: None,
        }
    }

    pub fn state(&self) -> &BadgeState {
        &self.state
    }

    /// Load the record for `slug`.
    ///
    /// A missing entry is not an error: the view simply stays in
    /// [`BadgeState::Loading`]. A present entry that fails to deserialize
    /// is an error -- the channel held something that was never a badge.
    pub async fn mount(&mut self, slug: &str) -> ScreenResult<&BadgeState> {
        let key = badge_key(slug);
        let Some(payload) = self.channel.get(&key).await? else {
            tracing::warn!(slug = %slug, "No badge record under key; staying in loading state");
            return Ok(&self.state);
        };

        let record: BadgeRecord = serde_json::from_str(&payload)?;
        tracing::debug!(slug = %slug, name = %record.name, "Badge record loaded");

        if !self.has_printed {
            self.has_printed = true;
            let printer = Arc::clone(&self.printer);
            let snapshot = record.clone();
            self.print_task = Some(tokio::spawn(async move {
                tokio::time::sleep(PRINT_DELAY).await;
                printer.print(&snapshot);
            }));
        }

        self.state = BadgeState::Ready(record);
        Ok(&self.state)
    }

    /// Take the handle of the scheduled one-shot print, if `mount` created
    /// one. Hosts that need to block on the side effect (the CLI, tests)
    /// await it; dropping it leaves the task running detached.
    pub fn take_print_task(&mut self) -> Option<tokio::task::JoinHandle<()>> {
        self.print_task.take()
    }
}
