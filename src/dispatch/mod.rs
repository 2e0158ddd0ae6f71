//! Fans every (site, method) pair out as its own tokio task and waits for all of them.

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Semaphore;

use crate::http_probe::prelude::*;
use crate::report::{DisplayMode, Output};

/// Tally of a finished run. `succeeded + failed == dispatched` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub dispatched: usize,
    /// Probes that got a response, whatever its status.
    pub succeeded: usize,
    pub failed: usize,
    /// Successful probes that printed something under the active display mode.
    pub reported: usize,
}

enum TaskOutcome {
    Succeeded { reported: bool },
    Failed,
}

#[derive(Debug)]
pub struct Dispatcher {
    client: Client,
    mode: DisplayMode,
    output: Arc<Output>,
    limit: Option<Arc<Semaphore>>,
}

impl Dispatcher {
    pub fn new(client: Client, mode: DisplayMode, output: Arc<Output>) -> Self {
        Self {
            client,
            mode,
            output,
            limit: None,
        }
    }

    /// Cap the number of requests in flight at once. Zero leaves fan-out unbounded.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then(|| Arc::new(Semaphore::new(limit)));
        self
    }

    /// Probe every site with every method and report each outcome as it lands.
    /// Returns once every task has finished; nothing is abandoned.
    pub async fn run(&self, sites: &[String], methods: &[String]) -> DispatchSummary {
        if self.mode.wants_header_line() {
            self.output.write_header_line();
        }

        let tasks = ProbeTask::cross_product(sites, methods);
        let mut summary = DispatchSummary {
            dispatched: tasks.len(),
            ..Default::default()
        };
        log::debug!("Dispatching {} probe(s)", tasks.len());

        let mut handles = Vec::with_capacity(tasks.len());
        for task in tasks {
            let pending = task.clone();
            let client = self.client.clone();
            let output = Arc::clone(&self.output);
            let limit = self.limit.clone();
            let mode = self.mode;

            let handle = tokio::spawn(async move {
                let _permit = match limit {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                match probe_task(&client, task).await {
                    Ok(result) => TaskOutcome::Succeeded {
                        reported: output.write_result(&result, mode),
                    },
                    Err(failure) => {
                        output.write_failure(&failure);
                        TaskOutcome::Failed
                    }
                }
            });

            handles.push((pending, handle));
        }

        log::debug!("Awaiting {} probe(s)", handles.len());
        for (task, handle) in handles {
            match handle.await {
                Ok(TaskOutcome::Succeeded { reported }) => {
                    summary.succeeded += 1;
                    if reported {
                        summary.reported += 1;
                    }
                }
                Ok(TaskOutcome::Failed) => summary.failed += 1,
                Err(e) => {
                    log::error!("Probe task for {task} did not complete: {e}");
                    self.output.write_failure(&ProbeFailure {
                        task,
                        error: ProbeError::Aborted(e),
                    });
                    summary.failed += 1;
                }
            }
        }

        log::info!(
            "Dispatched {} probe(s): {} answered, {} failed, {} reported",
            summary.dispatched,
            summary.succeeded,
            summary.failed,
            summary.reported
        );
        summary
    }
}
