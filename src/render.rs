//! Rendering of traced IR graphs as source-like text.
//!
//! The graph schema and the print-as-source pass both live outside this
//! crate; rendering goes through the [`SourcePrinter`] capability so the
//! tracing logic can be exercised with a fake printer.

use std::fmt;

/// Name given to the throwaway function shell wrapped around a dumped graph.
pub const SOURCE_DUMP_NAME: &str = "source_dump";

/// Configuration handed to the source printer for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Collect tensor constants into a side pool.
    pub tensor_constant_pool: bool,
    /// Collect named-type dependencies alongside the output.
    pub type_dependencies: bool,
    /// Record source ranges for emitted text.
    pub record_source_ranges: bool,
    /// Verbose annotation mode.
    pub annotate: bool,
}

impl PrintOptions {
    /// The fixed configuration used for diagnostic graph dumps: no constant
    /// pool, no type dependencies, no source ranges, no annotations.
    #[must_use]
    pub const fn source_dump() -> Self {
        Self {
            tensor_constant_pool: false,
            type_dependencies: false,
            record_source_ranges: false,
            annotate: false,
        }
    }
}

/// Temporary named wrapper satisfying the printer's function-shaped input
/// contract. Borrows the graph for one render call and never escapes it.
#[derive(Debug)]
pub struct FunctionShell<'g, G: ?Sized> {
    name: &'static str,
    graph: &'g G,
}

impl<'g, G: ?Sized> FunctionShell<'g, G> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

/// External print-as-source pass.
///
/// Implementations write a textual, source-code-like rendition of the shell's
/// graph into `out`. Failures surface unchanged through [`render_graph`].
pub trait SourcePrinter {
    type Graph: ?Sized;
    type Error: fmt::Display;

    /// Print `func`'s graph into `out` under `options`.
    ///
    /// # Errors
    ///
    /// Returns the printer's own error for malformed or unprintable graphs.
    fn print(
        &self,
        out: &mut String,
        func: &FunctionShell<'_, Self::Graph>,
        options: PrintOptions,
    ) -> Result<(), Self::Error>;
}

/// Render `graph` as source-like text for a diagnostic dump.
///
/// Wraps the graph in a shell named [`SOURCE_DUMP_NAME`] and invokes the
/// printer with [`PrintOptions::source_dump`]. The printer's output is
/// returned verbatim; prefixing is the caller's responsibility.
///
/// # Errors
///
/// Propagates the printer's error unchanged.
pub fn render_graph<P: SourcePrinter>(printer: &P, graph: &P::Graph) -> Result<String, P::Error> {
    let shell = FunctionShell {
        name: SOURCE_DUMP_NAME,
        graph,
    };
    let mut out = String::new();
    printer.print(&mut out, &shell, PrintOptions::source_dump())?;
    Ok(out)
}

/// Read-only view of a graph node, as far as tracing needs one.
pub trait GraphNode {
    /// Debug name of the node's first output, if the node has outputs.
    fn first_output_debug_name(&self) -> Option<&str>;
}

/// The node's first output name, or `"n/a"` for nodes without outputs.
#[must_use]
pub fn debug_value_or_default(node: &impl GraphNode) -> &str {
    node.first_output_debug_name().unwrap_or("n/a")
}
