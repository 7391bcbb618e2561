mod message;
mod printer;

#[cfg(test)]
mod tests;

use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Fix, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    /// Diagnostics worth showing: cascades of an earlier mistake are dropped.
    ///
    /// - `TrailingInput` goes whenever a root-cause or unclosed-delimiter
    ///   error exists, since the leftover input is usually its fallout.
    /// - A diagnostic starting strictly inside a higher-priority one's
    ///   suppression range goes.
    /// - At the same start, the higher-priority kind wins, except that a
    ///   missing-token error beats an unclosed delimiter opened there.
    pub fn filtered(&self) -> Vec<DiagnosticMessage> {
        let has_primary = self
            .messages
            .iter()
            .any(|m| m.kind.is_root_cause_error() || m.kind.is_structural_error());

        let mut keep: Vec<bool> = self
            .messages
            .iter()
            .map(|m| !(has_primary && m.kind.is_consequence_error()))
            .collect();

        for (i, outer) in self.messages.iter().enumerate() {
            for (j, inner) in self.messages.iter().enumerate() {
                if i != j && keep[i] && keep[j] && shadows(outer, inner) {
                    keep[j] = false;
                }
            }
        }

        self.messages
            .iter()
            .zip(keep)
            .filter_map(|(m, kept)| kept.then(|| m.clone()))
            .collect()
    }

    pub fn printer<'a>(&self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self.messages.clone(), source)
    }

    /// Printer that uses filtered diagnostics (cascading errors suppressed).
    pub fn filtered_printer<'a>(&self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self.filtered(), source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_filtered(&self, source: &str) -> String {
        self.filtered_printer(source).render()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn suppression_range(mut self, range: TextRange) -> Self {
        self.message.suppression_range = range;
        self
    }

    /// The final message text, as it will be emitted.
    pub fn text(&self) -> &str {
        &self.message.message
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

/// Whether `outer` hides `inner` as a cascade.
fn shadows(outer: &DiagnosticMessage, inner: &DiagnosticMessage) -> bool {
    let (o, i) = (outer.suppression_range, inner.range);
    if o.start() < i.start() && i.end() <= o.end() && outer.kind.suppresses(&inner.kind) {
        return true;
    }
    if outer.range.start() != inner.range.start() {
        return false;
    }
    match (outer.kind.is_structural_error(), inner.kind.is_structural_error()) {
        (false, true) if outer.kind.is_root_cause_error() => true,
        (true, false) if inner.kind.is_root_cause_error() => false,
        _ => outer.kind.suppresses(&inner.kind),
    }
}
