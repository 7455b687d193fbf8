//! Footnotes: which notes are printed, and which marks link them to the totals rows.

use crate::model::{NoteTexts, Notes, TaxInfo};

/// The marks appended to a label or prepended to a note.
const MARK: char = '*';

/// What a footnote is about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoteKind {
    /// The note printed on every invoice.
    Default,

    /// The legal notice of a zero VAT invoice.
    VatExempt,

    /// The legal notice of an invoice subject to retention.
    Retention,
}

/// A note along with the number of marks linking it to a row of the totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Footnote {
    /// What the note is about.
    pub kind: NoteKind,

    /// The text of the note.
    pub text: String,

    /// How many marks prefix the note.
    pub marks: usize,
}

impl Footnote {
    /// Returns the marks of the note, e.g. `**`.
    pub fn mark(&self) -> String {
        std::iter::repeat(MARK).take(self.marks).collect()
    }

    /// Returns the note as printed, its marks followed by its text.
    pub fn line(&self) -> String {
        format!("{}{}", self.mark(), self.text)
    }
}

/// The ordered list of footnotes of an invoice.
///
/// The n-th footnote carries n marks, so the same list drives both the labels of the totals
/// and the notes at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Footnotes {
    notes: Vec<Footnote>,
}

impl Footnotes {
    /// Composes the footnotes of a tax configuration.
    ///
    /// The VAT notice is added iff the VAT is zero, the retention notice iff the retention is
    /// not zero. A notice missing from the invoice notes is taken from the configured texts.
    pub fn compose(tax: &TaxInfo, notes: &Notes, texts: &NoteTexts) -> Footnotes {
        let mut footnotes = Footnotes { notes: vec![] };
        footnotes.push(NoteKind::Default, &notes.default);

        if tax.is_vat_exempt() {
            let text = notes.vat_exempt.as_deref().unwrap_or(texts.vat_0.as_str());
            footnotes.push(NoteKind::VatExempt, text);
        }

        if tax.has_retention() {
            let text = notes.retention.as_deref().unwrap_or(texts.retention_not_0.as_str());
            footnotes.push(NoteKind::Retention, text);
        }

        footnotes
    }

    fn push(&mut self, kind: NoteKind, text: &str) {
        let marks = self.notes.len();
        self.notes.push(Footnote {
            kind,
            text: String::from(text),
            marks,
        });
    }

    /// Returns the footnote of a kind, if present.
    pub fn get(&self, kind: NoteKind) -> Option<&Footnote> {
        self.notes.iter().find(|note| note.kind == kind)
    }

    /// Returns a label followed by the marks of the footnote of a kind.
    ///
    /// The label is returned as is if the footnote is absent.
    pub fn marked(&self, label: &str, kind: NoteKind) -> String {
        match self.get(kind) {
            Some(note) => format!("{}{}", label, note.mark()),
            None => String::from(label),
        }
    }

    /// Returns the footnotes in printing order.
    pub fn iter(&self) -> impl Iterator<Item = &Footnote> {
        self.notes.iter()
    }

    /// Returns the number of footnotes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if there are no footnotes. The default note makes this never happen for
    /// composed footnotes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
