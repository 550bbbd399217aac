use crate::ports::outbound::ProgressReporter;
use std::io::{self, Write};
use std::sync::Mutex;

/// StderrProgressReporter adapter for human-readable progress lines
///
/// Progress never goes to stdout: stdout may be carrying the SPDX document.
/// Write failures are swallowed since progress output is best-effort.
pub struct StderrProgressReporter {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Reporter writing to an arbitrary sink instead of stderr
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }

    fn emit(&self, leading_blank: bool, message: &str) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if leading_blank {
            let _ = writeln!(sink);
        }
        let _ = writeln!(sink, "{}", message);
        let _ = sink.flush();
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.emit(false, message);
    }

    fn report_error(&self, message: &str) {
        self.emit(false, message);
    }

    fn report_completion(&self, message: &str) {
        self.emit(true, message);
    }
}
