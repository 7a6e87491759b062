use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod worker;

pub use worker::{BatchHandle, spawn_worker, worker_task};

// Re-export types from library crates
pub use slide_impose::{ImposeError, ProcessingConfig};

#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
    #[error("Batch worker has stopped")]
    WorkerStopped,
}

/// One input document and where its imposed copy goes
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl BatchJob {
    /// Name used in progress updates and the final report
    pub fn name(&self) -> String {
        slide_impose::source::document_name(&self.input)
    }

    /// Whether writing the output would replace the input document
    pub fn overwrites_input(&self) -> bool {
        if self.input == self.output {
            return true;
        }
        match (
            std::fs::canonicalize(&self.input),
            std::fs::canonicalize(&self.output),
        ) {
            (Ok(input), Ok(output)) => input == output,
            _ => false,
        }
    }
}

/// Output paths keep each input's file name inside `output_dir`
pub fn jobs_for_output_dir(inputs: &[impl AsRef<Path>], output_dir: impl AsRef<Path>) -> Vec<BatchJob> {
    let output_dir = output_dir.as_ref();
    let jobs: Vec<BatchJob> = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref().to_owned();
            let output = match input.file_name() {
                Some(name) => output_dir.join(name),
                None => output_dir.join("output.pdf"),
            };
            BatchJob { input, output }
        })
        .collect();

    for job in &jobs {
        if job.overwrites_input() {
            log::warn!(
                "Output for {} replaces the input file {}",
                job.name(),
                job.input.display()
            );
        }
    }
    for output in shared_outputs(&jobs) {
        log::warn!(
            "Several inputs write to {}; only the last one is kept",
            output.display()
        );
    }

    jobs
}

/// Output paths that more than one job writes to, in first-seen order
pub fn shared_outputs(jobs: &[BatchJob]) -> Vec<&Path> {
    let mut seen = HashSet::new();
    let mut shared = Vec::new();
    for job in jobs {
        let output = job.output.as_path();
        if !seen.insert(output) && !shared.contains(&output) {
            shared.push(output);
        }
    }
    shared
}

/// Commands sent from the control surface to the worker
#[derive(Debug)]
pub enum BatchCommand {
    /// Process every job in order with the same configuration
    Process {
        jobs: Vec<BatchJob>,
        config: ProcessingConfig,
    },
    /// Stop before the next document of the running batch
    Cancel,
}

/// How one document ended
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    Success { sheets: usize },
    Failed { reason: String },
}

impl DocumentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DocumentOutcome::Success { .. })
    }
}

/// Per-document outcomes of one batch, in submission order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchResult {
    pub outcomes: Vec<(String, DocumentOutcome)>,
    /// Set when a cancel request stopped the batch early
    pub cancelled: bool,
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_success())
    }

    /// `(name, reason)` for every failed document
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                DocumentOutcome::Failed { reason } => Some((name.as_str(), reason.as_str())),
                DocumentOutcome::Success { .. } => None,
            })
            .collect()
    }
}

/// Updates sent from worker to the control surface
#[derive(Debug, Clone)]
pub enum BatchUpdate {
    DocumentStarted {
        /// 1-based position in the batch
        index: usize,
        total: usize,
        name: String,
    },
    PageProgress {
        name: String,
        current: usize,
        total: usize,
    },
    DocumentFinished {
        name: String,
        outcome: DocumentOutcome,
    },
    BatchComplete {
        result: BatchResult,
    },
    Error {
        message: String,
    },
}
