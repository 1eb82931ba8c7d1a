use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

type SinkFn = Box<dyn Fn(&str) + Send + Sync>;

static SINK: OnceLock<SinkFn> = OnceLock::new();

/// The process already has a diagnostic sink installed.
#[derive(Debug)]
pub struct SinkInstalledError;

impl fmt::Display for SinkInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a diagnostic sink is already installed for this process")
    }
}

impl std::error::Error for SinkInstalledError {}

/// Route diagnostic output through `sink` instead of standard error.
///
/// The sink can be installed at most once per process, before or after the
/// first write. Embedders use this to direct dumps at their own channel;
/// tests use it to capture output.
///
/// # Errors
///
/// Returns [`SinkInstalledError`] if a sink was already installed.
pub fn set_diagnostic_sink(
    sink: impl Fn(&str) + Send + Sync + 'static,
) -> Result<(), SinkInstalledError> {
    SINK.set(Box::new(sink)).map_err(|_| SinkInstalledError)
}

/// Write pre-formatted diagnostic text to the process sink.
///
/// Defaults to standard error when no sink has been installed. Write
/// failures on the fallback stream are ignored, as losing a diagnostic line
/// must never take the compiler down.
pub fn write_diagnostic(text: &str) {
    match SINK.get() {
        Some(sink) => sink(text),
        None => {
            let mut err = io::stderr().lock();
            let _ = err.write_all(text.as_bytes());
        }
    }
}
