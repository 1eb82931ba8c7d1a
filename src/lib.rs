#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)] // Catch correctness + perf + suspicious patterns early.
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Leveled diagnostic tracing for a JIT compiler's IR pipeline.
//!
//! Tracing is opt-in through the `PYTORCH_JIT_LOG_LEVEL` environment
//! variable, resolved once per process. Enabled call sites emit text to the
//! diagnostic stream with a `[TAG file:line]` prefix on every line; graph
//! dumps go through an injected [`SourcePrinter`] that renders the IR as
//! source-like text.
//!
//! The IR graph itself, the execution engine and the print-as-source pass
//! all live elsewhere; this crate only borrows them.

pub mod level;
mod macros;
pub mod prefix;
pub mod render;
pub mod sink;

pub use level::{is_enabled, jit_log_level, JitLoggingLevel, JIT_LOG_LEVEL_VAR};
pub use prefix::{basename, leveled_prefix, prefix_leveled_lines, prefix_lines};
pub use render::{
    debug_value_or_default, render_graph, FunctionShell, GraphNode, PrintOptions, SourcePrinter,
    SOURCE_DUMP_NAME,
};
pub use sink::{set_diagnostic_sink, write_diagnostic, SinkInstalledError};
