//! Tracing infrastructure for debugging the parser.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The parser is generic over a [`Tracer`]. When `NoopTracer` is used every
//! trait method is an `#[inline(always)]` empty function and the calls
//! disappear from the compiled parser.
//!
//! # Design: Tracer-Owned State
//!
//! The parser never records which node is open for tracing purposes.
//! `PrintTracer` keeps its own stack of open kinds so `trace_exit` can be
//! argument-free.

use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::SyntaxKind;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: rule entry and diagnostics.
    #[default]
    Default,
    /// Verbose (-v): consumed tokens with their text.
    Verbose,
    /// Very verbose (-vv): trivia and rule exits too.
    VeryVerbose,
}

/// Tracer trait for parser instrumentation.
///
/// - `trace_enter` - a node is started
/// - `trace_wrap` - a node is started retroactively around already built children
/// - `trace_exit` - the innermost open node is finished
/// - `trace_token` - a token is consumed into the tree
/// - `trace_diagnostic` - a diagnostic is emitted
pub trait Tracer {
    fn trace_enter(&mut self, kind: SyntaxKind);

    fn trace_wrap(&mut self, kind: SyntaxKind);

    fn trace_exit(&mut self);

    fn trace_token(&mut self, kind: SyntaxKind, text: &str);

    fn trace_diagnostic(&mut self, kind: DiagnosticKind, range: TextRange, message: &str);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _kind: SyntaxKind) {}

    #[inline(always)]
    fn trace_wrap(&mut self, _kind: SyntaxKind) {}

    #[inline(always)]
    fn trace_exit(&mut self) {}

    #[inline(always)]
    fn trace_token(&mut self, _kind: SyntaxKind, _text: &str) {}

    #[inline(always)]
    fn trace_diagnostic(&mut self, _kind: DiagnosticKind, _range: TextRange, _message: &str) {}
}

/// Tracer that collects an indented transcript of the parse.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    open: Vec<SyntaxKind>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            open: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the collected lines, one per row.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push_line(&mut self, body: String) {
        let indent = "  ".repeat(self.open.len());
        self.lines.push(format!("{indent}{body}"));
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, kind: SyntaxKind) {
        self.push_line(kind.name().to_string());
        self.open.push(kind);
    }

    fn trace_wrap(&mut self, kind: SyntaxKind) {
        self.push_line(format!("{} (wrap)", kind.name()));
        self.open.push(kind);
    }

    fn trace_exit(&mut self) {
        let Some(kind) = self.open.pop() else {
            return;
        };
        if self.verbosity == Verbosity::VeryVerbose {
            self.push_line(format!("/{}", kind.name()));
        }
    }

    fn trace_token(&mut self, kind: SyntaxKind, text: &str) {
        match self.verbosity {
            Verbosity::Default => {}
            Verbosity::Verbose if kind.is_trivia() => {}
            Verbosity::Verbose | Verbosity::VeryVerbose => {
                self.push_line(format!("{} {:?}", kind.name(), text));
            }
        }
    }

    fn trace_diagnostic(&mut self, kind: DiagnosticKind, range: TextRange, message: &str) {
        self.push_line(format!(
            "! {:?} at {}..{}: {}",
            kind,
            u32::from(range.start()),
            u32::from(range.end()),
            message
        ));
    }
}
