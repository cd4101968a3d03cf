//! Reporter writing to standard error.

use std::io::{self, Write};

use super::theme::SeverityStyles;
use super::{Reporter, Severity};

/// Writes `[TAG] message` lines to a writer, stderr by default.
pub struct StderrReporter {
    styles: SeverityStyles,
    out: Box<dyn Write>,
}

impl StderrReporter {
    /// Create a reporter on stderr with the given style table.
    pub fn new(styles: SeverityStyles) -> Self {
        Self {
            styles,
            out: Box::new(io::stderr()),
        }
    }

    /// Create a reporter on an arbitrary writer (for testing).
    pub fn with_writer(styles: SeverityStyles, out: Box<dyn Write>) -> Self {
        Self { styles, out }
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, severity: Severity, msg: &str) {
        // Diagnostics are best-effort; a closed stderr must not abort a run.
        let _ = writeln!(self.out, "{}", self.styles.format(severity, msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_tagged_lines() {
        let buf = SharedBuf::default();
        let mut reporter =
            StderrReporter::with_writer(SeverityStyles::plain(), Box::new(buf.clone()));

        reporter.warn("Missing config file for etcd");
        reporter.info("done");

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "[WARN] Missing config file for etcd\n[INFO] done\n");
    }
}
