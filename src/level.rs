use std::env;
use std::fmt;
use std::sync::OnceLock;

use tracing::warn;

/// Environment variable controlling the process-wide tracing level.
pub const JIT_LOG_LEVEL_VAR: &str = "PYTORCH_JIT_LOG_LEVEL";

/// Verbosity of IR pass tracing.
///
/// Ordering is significant: a higher variant enables everything below it, so
/// `GraphDebug` also emits `GraphUpdate` and `GraphDump` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JitLoggingLevel {
    Off,
    GraphDump,
    GraphUpdate,
    GraphDebug,
}

impl JitLoggingLevel {
    /// Short label used in the bracketed line prefix.
    ///
    /// # Panics
    ///
    /// Panics for `Off`: emitting a log line at `Off` is a caller bug, never
    /// a runtime condition.
    #[must_use]
    pub fn severity_tag(self) -> &'static str {
        match self {
            Self::Off => panic!("severity tag requested for JitLoggingLevel::Off"),
            Self::GraphDump => "DUMP",
            Self::GraphUpdate => "UPDATE",
            Self::GraphDebug => "DEBUG",
        }
    }
}

impl fmt::Display for JitLoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.severity_tag())
    }
}

/// Resolve the process-wide tracing level.
///
/// The environment is read exactly once; every later call returns the cached
/// value. An unset variable means tracing is off.
#[must_use]
pub fn jit_log_level() -> JitLoggingLevel {
    static LEVEL: OnceLock<JitLoggingLevel> = OnceLock::new();
    *LEVEL.get_or_init(|| {
        let raw = env::var(JIT_LOG_LEVEL_VAR).ok();
        parse_level(raw.as_deref())
    })
}

/// Whether output at `level` is currently enabled.
#[must_use]
pub fn is_enabled(level: JitLoggingLevel) -> bool {
    jit_log_level() >= level
}

fn parse_level(raw: Option<&str>) -> JitLoggingLevel {
    let Some(raw) = raw else {
        return JitLoggingLevel::Off;
    };
    match leading_integer(raw) {
        0 => JitLoggingLevel::Off,
        1 => JitLoggingLevel::GraphDump,
        2 => JitLoggingLevel::GraphUpdate,
        3 => JitLoggingLevel::GraphDebug,
        value if value < 0 => {
            warn!(value, variable = JIT_LOG_LEVEL_VAR, "negative level, tracing stays off");
            JitLoggingLevel::Off
        }
        value => {
            warn!(value, variable = JIT_LOG_LEVEL_VAR, "level above range, clamping to GraphDebug");
            JitLoggingLevel::GraphDebug
        }
    }
}

/// `atoi`-equivalent parse: skip leading whitespace, take an optional sign
/// and the leading run of digits, anything else yields 0.
fn leading_integer(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let mut value: i64 = 0;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }
    if negative { -value } else { value }
}
