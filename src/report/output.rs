use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use super::{DisplayMode, HEADER_LINE, render};
use crate::http_probe::result::{ProbeFailure, ProbeResult};

type Sink = Box<dyn Write + Send>;

/// The report and error streams, each behind its own lock.
/// Every write is one whole chunk, so concurrent probes never interleave mid-line.
pub struct Output {
    report: Mutex<Sink>,
    errors: Mutex<Sink>,
}

impl Output {
    pub fn new(report: impl Write + Send + 'static, errors: impl Write + Send + 'static) -> Self {
        Self {
            report: Mutex::new(Box::new(report)),
            errors: Mutex::new(Box::new(errors)),
        }
    }

    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    pub fn write_header_line(&self) {
        write_chunk(&self.report, &format!("{HEADER_LINE}\n"));
    }

    /// Print whatever `mode` wants for `result`. Returns whether anything was written.
    pub fn write_result(&self, result: &ProbeResult, mode: DisplayMode) -> bool {
        match render(result, mode) {
            Some(chunk) => {
                write_chunk(&self.report, &chunk);
                true
            }
            None => false,
        }
    }

    pub fn write_failure(&self, failure: &ProbeFailure) {
        write_chunk(&self.errors, &format!("{failure}\n"));
    }
}

fn write_chunk(sink: &Mutex<Sink>, chunk: &str) {
    // The sink holds no invariants of its own; recover it from a poisoned lock.
    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = sink.write_all(chunk.as_bytes()).and_then(|_| sink.flush()) {
        log::warn!("Failed to write output: {e}");
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}
