use std::fmt::Write;

use crate::level::JitLoggingLevel;

/// Prepend `prefix` to every line of `text`.
///
/// Line boundaries follow `getline` semantics: a trailing newline does not
/// produce an extra empty line, interior empty lines are kept, and a final
/// unterminated line is included. Every emitted line is newline-terminated.
#[must_use]
pub fn prefix_lines(prefix: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    let mut out = String::new();
    for line in body.split('\n') {
        let _ = writeln!(out, "{prefix}{line}");
    }
    out
}

/// Build the bracketed provenance prefix: `[TAG basename:NNN] `.
///
/// The line number is zero-padded to three digits; wider numbers are not
/// truncated.
///
/// # Panics
///
/// Panics for [`JitLoggingLevel::Off`], which has no severity tag.
#[must_use]
pub fn leveled_prefix(level: JitLoggingLevel, source_file: &str, line: u32) -> String {
    format!("[{level} {}:{line:03}] ", basename(source_file))
}

/// Prefix every line of `text` with severity, source file and line number.
///
/// # Panics
///
/// Panics for [`JitLoggingLevel::Off`], which has no severity tag.
#[must_use]
pub fn prefix_leveled_lines(
    level: JitLoggingLevel,
    source_file: &str,
    line: u32,
    text: &str,
) -> String {
    prefix_lines(&leveled_prefix(level, source_file, line), text)
}

/// Final path segment of `path`, with any directory components stripped.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn prefixes_every_line() {
        assert_eq!(prefix_lines("> ", "a\nb\nc"), "> a\n> b\n> c\n");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(prefix_lines("> ", ""), "");
    }

    #[test]
    fn trailing_newline_adds_no_extra_line() {
        assert_eq!(prefix_lines("> ", "a\nb\n"), "> a\n> b\n");
    }

    #[test]
    fn interior_empty_lines_are_kept() {
        assert_eq!(prefix_lines("> ", "a\n\nb"), "> a\n> \n> b\n");
        assert_eq!(prefix_lines("> ", "\n\n"), "> \n> \n");
    }

    #[test]
    fn leveled_prefix_carries_provenance() {
        let text = prefix_leveled_lines(JitLoggingLevel::GraphDump, "/x/y/graph.cpp", 7, "hello");
        assert!(text.starts_with("[DUMP graph.cpp:007] hello"));
    }

    #[test]
    fn leveled_prefix_spans_multiline_payloads() {
        let text = prefix_leveled_lines(
            JitLoggingLevel::GraphDebug,
            "passes/fuse_linear.rs",
            42,
            "before:\ngraph()\n",
        );
        expect![[r#"
            [DEBUG fuse_linear.rs:042] before:
            [DEBUG fuse_linear.rs:042] graph()
        "#]]
        .assert_eq(&text);
    }

    #[test]
    fn line_numbers_pad_but_never_truncate() {
        assert_eq!(leveled_prefix(JitLoggingLevel::GraphDump, "a.rs", 7), "[DUMP a.rs:007] ");
        assert_eq!(
            leveled_prefix(JitLoggingLevel::GraphDump, "a.rs", 1234),
            "[DUMP a.rs:1234] "
        );
    }

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("/x/y/graph.cpp"), "graph.cpp");
        assert_eq!(basename("graph.cpp"), "graph.cpp");
        assert_eq!(basename("src\\ir\\alias.rs"), "alias.rs");
    }
}
