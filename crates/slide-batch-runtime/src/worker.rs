use crate::{
    BatchCommand, BatchJob, BatchResult, BatchUpdate, DocumentOutcome, ProcessingConfig,
    RuntimeError,
};
use std::collections::VecDeque;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Channels to a running batch worker
pub struct BatchHandle {
    command_tx: mpsc::UnboundedSender<BatchCommand>,
    update_rx: mpsc::UnboundedReceiver<BatchUpdate>,
    task: JoinHandle<()>,
}

impl BatchHandle {
    pub fn submit(&self, command: BatchCommand) -> Result<(), RuntimeError> {
        self.command_tx
            .send(command)
            .map_err(|_| RuntimeError::WorkerStopped)
    }

    /// Next update from the worker; `None` once the worker has exited
    pub async fn next_update(&mut self) -> Option<BatchUpdate> {
        self.update_rx.recv().await
    }

    /// Close the command channel and wait for the worker to finish
    pub async fn shutdown(self) {
        drop(self.command_tx);
        if let Err(e) = self.task.await {
            log::warn!("Batch worker ended abnormally: {}", e);
        }
    }
}

/// Start a worker on the current tokio runtime
pub fn spawn_worker() -> BatchHandle {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(worker_task(command_rx, update_tx));

    BatchHandle {
        command_tx,
        update_rx,
        task,
    }
}

/// Async worker task that processes batch commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<BatchCommand>,
    update_tx: mpsc::UnboundedSender<BatchUpdate>,
) {
    // Commands that arrived while a batch was running
    let mut pending = VecDeque::new();

    loop {
        let cmd = match pending.pop_front() {
            Some(cmd) => cmd,
            None => match command_rx.recv().await {
                Some(cmd) => cmd,
                None => break,
            },
        };

        match cmd {
            BatchCommand::Process { jobs, config } => {
                let result =
                    process_batch(jobs, &config, &mut command_rx, &mut pending, &update_tx).await;
                let _ = update_tx.send(BatchUpdate::BatchComplete { result });
            }
            BatchCommand::Cancel => {
                log::debug!("Ignoring cancel request, no batch is running");
            }
        }
    }
}

async fn process_batch(
    jobs: Vec<BatchJob>,
    config: &ProcessingConfig,
    command_rx: &mut mpsc::UnboundedReceiver<BatchCommand>,
    pending: &mut VecDeque<BatchCommand>,
    update_tx: &mpsc::UnboundedSender<BatchUpdate>,
) -> BatchResult {
    let mut result = BatchResult::default();

    if let Err(e) = config.validate() {
        let _ = update_tx.send(BatchUpdate::Error {
            message: e.to_string(),
        });
        return result;
    }

    let total = jobs.len();
    for (idx, job) in jobs.into_iter().enumerate() {
        // Cancel stops further submissions; other commands wait their turn
        while let Ok(next_cmd) = command_rx.try_recv() {
            match next_cmd {
                BatchCommand::Cancel => result.cancelled = true,
                other => pending.push_back(other),
            }
        }
        if result.cancelled {
            log::info!("Batch cancelled after {} of {} documents", idx, total);
            break;
        }

        let name = job.name();
        let _ = update_tx.send(BatchUpdate::DocumentStarted {
            index: idx + 1,
            total,
            name: name.clone(),
        });

        let progress_tx = update_tx.clone();
        let progress_name = name.clone();
        let on_progress = move |current, total| {
            let _ = progress_tx.send(BatchUpdate::PageProgress {
                name: progress_name.clone(),
                current,
                total,
            });
        };

        let outcome = match slide_impose::process(&job.input, &job.output, config, on_progress).await
        {
            Ok(sheets) => DocumentOutcome::Success { sheets },
            Err(e) => {
                log::warn!("Failed to process {}: {}", name, e);
                DocumentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let _ = update_tx.send(BatchUpdate::DocumentFinished {
            name: name.clone(),
            outcome: outcome.clone(),
        });
        result.outcomes.push((name, outcome));
    }

    result
}
