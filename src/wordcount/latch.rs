use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;
use tracing::warn;

/// Count-down latch: released once every expected party has arrived.
#[derive(Debug)]
pub struct CompletionLatch {
    remaining: AtomicUsize,
    released: Notify,
}

impl CompletionLatch {
    pub fn new(parties: usize) -> Self {
        CompletionLatch {
            remaining: AtomicUsize::new(parties),
            released: Notify::new(),
        }
    }

    /// Record one arrival. The last one releases every waiter.
    pub fn arrive(&self) {
        let previous = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        match previous {
            Ok(1) => self.released.notify_waiters(),
            Ok(_) => {}
            Err(_) => warn!("arrival on an already released latch"),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    pub fn is_released(&self) -> bool {
        self.remaining() == 0
    }

    /// Wait until the count reaches zero. No timeout.
    pub async fn wait(&self) {
        loop {
            let notified = self.released.notified();
            tokio::pin!(notified);
            // register before checking, so a release in between is not missed
            notified.as_mut().enable();

            if self.is_released() {
                return;
            }
            notified.await;
        }
    }

    /// A guard that arrives exactly once, when it is dropped. Dropping also
    /// happens while a panicking worker unwinds, so a failed party still
    /// counts down.
    pub fn arrival(self: &Arc<Self>) -> Arrival {
        Arrival {
            latch: Arc::clone(self),
        }
    }
}

#[derive(Debug)]
pub struct Arrival {
    latch: Arc<CompletionLatch>,
}

impl Drop for Arrival {
    fn drop(&mut self) {
        self.latch.arrive();
    }
}
