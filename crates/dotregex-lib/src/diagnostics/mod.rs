//! Recoverable problems found while parsing a pattern.
//!
//! Everything .NET would reject at construction time lands here, in tree order and
//! without duplicates. Nothing here aborts a parse.

mod message;
mod printer;


use indexmap::IndexSet;
use rowan::TextRange;

pub use message::{Diagnostic, DiagnosticKind, Severity};
pub use printer::DiagnosticsPrinter;

pub(crate) use message::serialize_range;

/// Insertion-ordered, so iteration follows tree order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: IndexSet<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: IndexSet::new(),
        }
    }

    /// Starts a diagnostic with the kind's fallback message; `.message()` fills the template.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::with_default_message(kind, range),
        }
    }

    /// Appends an already-built diagnostic unless an identical one (same
    /// message and span) is present.
    pub fn push_unique(&mut self, diagnostic: Diagnostic) -> bool {
        self.messages.insert(diagnostic)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.messages.get_index(index)
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = indexmap::set::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Fills the kind's `{}` template, e.g. the quantifier in "Nested quantifier {}".
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    /// Records the diagnostic unless the same message was already reported on the same span.
    pub fn emit(self) {
        self.diagnostics.push_unique(self.message);
    }
}
