//! Call-site macros that attach file/line provenance to traced output.
//!
//! Each macro guards on the resolved level first, so a process with tracing
//! off pays one cached comparison and nothing else.

/// Emit `text` at `level`, prefixed with severity and call-site provenance.
#[macro_export]
macro_rules! jit_log {
    ($level:expr, $($arg:tt)+) => {
        if $crate::is_enabled($level) {
            $crate::write_diagnostic(&$crate::prefix_leveled_lines(
                $level,
                file!(),
                line!(),
                &format!($($arg)+),
            ));
        }
    };
}

/// Dump a whole graph at `GraphDump`, headed by a message.
///
/// The graph is rendered through `printer` only when dumps are enabled. A
/// printer failure is reported inline in the dump rather than aborting the
/// pass being traced.
#[macro_export]
macro_rules! graph_dump {
    ($header:expr, $printer:expr, $graph:expr $(,)?) => {
        if $crate::is_enabled($crate::JitLoggingLevel::GraphDump) {
            let rendered = match $crate::render_graph($printer, $graph) {
                Ok(text) => text,
                Err(err) => format!("<render failed: {err}>\n"),
            };
            $crate::jit_log!($crate::JitLoggingLevel::GraphDump, "{}{}", $header, rendered);
        }
    };
}

/// Trace a single graph transformation at `GraphUpdate`.
#[macro_export]
macro_rules! graph_update {
    ($($arg:tt)+) => {
        $crate::jit_log!($crate::JitLoggingLevel::GraphUpdate, $($arg)+)
    };
}

/// Trace fine-grained pass internals at `GraphDebug`.
#[macro_export]
macro_rules! graph_debug {
    ($($arg:tt)+) => {
        $crate::jit_log!($crate::JitLoggingLevel::GraphDebug, $($arg)+)
    };
}
