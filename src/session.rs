use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinSet;

/// Mount/teardown scope for a view's in-flight fetches.
///
/// Work spawned on a session reports back as events. Events arrive in
/// completion order, so a view must not assume any ordering between
/// independent requests. A task that panics counts as finished and yields no
/// event. After [`ViewSession::teardown`] (or drop) the tasks are aborted and
/// any result that already landed is discarded.
pub struct ViewSession<E> {
    shutdown: watch::Sender<bool>,
    tasks: JoinSet<Option<E>>,
}

impl<E: Send + 'static> ViewSession<E> {
    pub fn new() -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            shutdown,
            tasks: JoinSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !*self.shutdown.borrow()
    }

    /// Runs `work` in the background; its output becomes one event.
    pub fn spawn<F>(&mut self, work: F)
    where
        F: Future<Output = E> + Send + 'static,
    {
        if !self.is_active() {
            tracing::debug!("ignoring work spawned on a torn-down view");
            return;
        }

        let mut shutdown = self.shutdown.subscribe();
        self.tasks.spawn(async move {
            tokio::select! {
                _ = shutdown.changed() => None,
                event = work => (!*shutdown.borrow()).then_some(event),
            }
        });
    }

    /// Waits for the next completed piece of work.
    ///
    /// Returns `None` once every spawned task has finished, or after teardown.
    pub async fn next_event(&mut self) -> Option<E> {
        while self.is_active() {
            match self.tasks.join_next().await? {
                Ok(Some(event)) => return Some(event),
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "view task did not complete"),
            }
        }
        None
    }

    pub fn teardown(&mut self) {
        if !self.is_active() {
            return;
        }
        self.shutdown.send_replace(true);
        let pending = self.tasks.len();
        self.tasks.abort_all();
        if pending > 0 {
            tracing::debug!(pending, "view torn down");
        }
    }
}

impl<E: Send + 'static> Default for ViewSession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for ViewSession<E> {
    fn drop(&mut self) {
        // Dropping the JoinSet aborts whatever is still running.
        self.shutdown.send_replace(true);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn delivers_in_completion_order() {
        let mut session = ViewSession::new();
        session.spawn(async {
            tokio::time::sleep(Duration::from_millis(60)).await;
            "slow"
        });
        session.spawn(async { "fast" });

        assert_eq!(session.next_event().await, Some("fast"));
        assert_eq!(session.next_event().await, Some("slow"));
        assert_eq!(session.next_event().await, None);
    }

    #[tokio::test]
    async fn teardown_stops_outstanding_work() {
        let finished = Arc::new(AtomicBool::new(false));
        let mut session = ViewSession::new();
        {
            let finished = finished.clone();
            session.spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                finished.store(true, Ordering::SeqCst);
                1u32
            });
        }

        session.teardown();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!session.is_active());
        assert_eq!(session.next_event().await, None);
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn late_result_is_discarded() {
        let mut session = ViewSession::new();
        session.spawn(async { 7u32 });
        // Let the task complete and queue its event.
        tokio::time::sleep(Duration::from_millis(20)).await;

        session.teardown();
        assert_eq!(session.next_event().await, None);
    }

    #[tokio::test]
    async fn panicking_work_counts_as_finished() {
        let mut session = ViewSession::new();
        session.spawn(async {
            let missing: Option<u32> = None;
            missing.expect("work item failed")
        });
        session.spawn(async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            2u32
        });

        let first = tokio::time::timeout(Duration::from_secs(2), session.next_event())
            .await
            .unwrap();
        assert_eq!(first, Some(2));
        let rest = tokio::time::timeout(Duration::from_secs(2), session.next_event())
            .await
            .unwrap();
        assert_eq!(rest, None);
    }

    #[tokio::test]
    async fn spawn_after_teardown_is_ignored() {
        let mut session = ViewSession::new();
        session.teardown();
        session.spawn(async { 1u32 });
        assert_eq!(session.next_event().await, None);
    }
}
