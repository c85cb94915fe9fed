use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use iced::{task, Task};
use tracing::trace;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

// Tickets are unique for the whole process, a tick emitted for a form that was
// unmounted can never match the pending ticket of a newer form.
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one arming of a [`Debounce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Single-shot timer, re-armed on every call to [`Debounce::arm`].
///
/// Arming aborts the previous timer. A tick already queued when it was
/// superseded carries a stale ticket and is rejected by [`Debounce::fire`].
pub struct Debounce {
    delay: Duration,
    pending: Option<(Ticket, task::Handle)>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Cancels any pending timer and starts a new one. The returned task
    /// produces `on_elapsed(ticket)` once the delay has passed.
    pub fn arm<T, F>(&mut self, on_elapsed: F) -> Task<T>
    where
        T: Send + 'static,
        F: Fn(Ticket) -> T + Send + 'static,
    {
        self.cancel();
        let ticket = Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        trace!("arming debounce {:?} for {:?}", ticket, self.delay);
        let (task, handle) = Task::perform(elapsed(self.delay, ticket), on_elapsed).abortable();
        self.pending = Some((ticket, handle));
        task
    }

    /// Aborts the pending timer. Returns false if there was none.
    pub fn cancel(&mut self) -> bool {
        if let Some((ticket, handle)) = self.pending.take() {
            trace!("cancelling debounce {:?}", ticket);
            handle.abort();
            true
        } else {
            false
        }
    }

    /// Consumes the pending ticket if `ticket` is the one currently armed.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending() == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Debug for Debounce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounce")
            .field("delay", &self.delay)
            .field("pending", &self.pending())
            .finish()
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub async fn elapsed(delay: Duration, ticket: Ticket) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn rearming_supersedes_the_pending_ticket() {
        let mut debounce = Debounce::new(DEFAULT_DELAY);
        let _ = debounce.arm(|t| t);
        let first = debounce.pending().unwrap();
        let _ = debounce.arm(|t| t);
        let second = debounce.pending().unwrap();
        assert_ne!(first, second);

        assert!(!debounce.fire(first));
        assert!(debounce.fire(second));
        // A ticket fires at most once.
        assert!(!debounce.fire(second));
        assert_eq!(debounce.pending(), None);
    }

    #[test]
    fn cancelled_ticket_never_fires() {
        let mut debounce = Debounce::new(DEFAULT_DELAY);
        let _ = debounce.arm(|t| t);
        let ticket = debounce.pending().unwrap();
        assert!(debounce.cancel());
        assert!(!debounce.cancel());
        assert!(!debounce.fire(ticket));
    }

    #[test]
    fn tickets_are_unique_across_instances() {
        let mut a = Debounce::new(DEFAULT_DELAY);
        let mut b = Debounce::new(DEFAULT_DELAY);
        let _ = a.arm(|t| t);
        let _ = b.arm(|t| t);
        let ticket = a.pending().unwrap();
        assert!(!b.fire(ticket));
        assert!(a.fire(ticket));
    }

    #[tokio::test]
    async fn elapsed_waits_for_the_delay() {
        let delay = Duration::from_millis(30);
        let mut debounce = Debounce::new(delay);
        let _ = debounce.arm(|t| t);
        let ticket = debounce.pending().unwrap();

        let start = Instant::now();
        let fired = elapsed(delay, ticket).await;
        assert!(start.elapsed() >= delay);
        assert_eq!(fired, ticket);
        assert!(debounce.fire(fired));
    }

    #[tokio::test(start_paused = true)]
    async fn default_delay_is_half_a_second() {
        let mut debounce = Debounce::new(DEFAULT_DELAY);
        let _ = debounce.arm(|t| t);
        let ticket = debounce.pending().unwrap();

        let mut tick = std::pin::pin!(elapsed(DEFAULT_DELAY, ticket));
        assert!(
            tokio::time::timeout(Duration::from_millis(499), &mut tick)
                .await
                .is_err()
        );
        let fired = tokio::time::timeout(Duration::from_millis(1), &mut tick)
            .await
            .unwrap();
        assert_eq!(fired, ticket);
        assert!(debounce.fire(fired));
    }
}
