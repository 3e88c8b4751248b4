use crate::{Error, Result};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

/// Fixed pool of blocking threads, one per task it is meant to run.
///
/// Backed by a private runtime whose blocking pool is capped at `size`, so
/// `size` tasks handed to `execute` all run in parallel on their own threads
/// and nothing beyond that is ever queued by a caller that respects the size.
pub struct WorkerPool {
    runtime: Option<Runtime>,
    handle: Handle,
}

impl WorkerPool {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::Configuration(
                "worker pool needs at least one thread".into(),
            ));
        }

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(size)
            .thread_name("source-worker")
            .build()?;
        let handle = runtime.handle().clone();

        Ok(WorkerPool {
            runtime: Some(runtime),
            handle,
        })
    }

    /// Run a blocking task on one of the pool's threads.
    pub fn execute<F, R>(&self, task: F) -> JoinHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        self.handle.spawn_blocking(task)
    }

    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // plain drop would block, which panics inside an async context
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
