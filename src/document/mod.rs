//! This module turns invoices into documents.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::footnotes::Footnotes;
use crate::layout::constants::LINE_HEIGHT;
use crate::layout::{Labels, Layout, PageGeometry};
use crate::model::{Invoice, NoteTexts};
use crate::surface::{PdfSurface, Recorder, Surface};
use crate::totals::Totals;
use crate::Result;

/// The suffix of the file names of drafts.
const DRAFT_SUFFIX: &str = "_DRAFT";

/// Something that renders an invoice once and saves the result.
pub trait Renderer: Sized {
    /// The extension of the files this renderer writes.
    const EXTENSION: &'static str;

    /// Lays out an invoice, with the draft watermark if `draft` is true.
    fn render(&mut self, invoice: &Invoice, draft: bool) -> Result<()>;

    /// Writes the rendered document. The renderer cannot be used afterwards.
    fn save_to(self, path: &Path) -> Result<()>;
}

/// Draws the sections of an invoice on a surface, in order.
pub struct Assembler<S: Surface> {
    /// The surface the invoice is drawn on.
    surface: S,

    /// The geometry of the page.
    page: PageGeometry,

    /// The fixed texts.
    labels: Labels,

    /// The configured notices, printed when an invoice lacks its own.
    note_texts: NoteTexts,

    /// Whether text cells are outlined.
    debug: bool,
}

/// Renders invoices to pdf.
pub type PdfRenderer = Assembler<PdfSurface>;

/// Renders invoices to a plain text list of primitives.
pub type DumpRenderer = Assembler<Recorder>;

impl<S: Surface> Assembler<S> {
    /// Creates an assembler drawing on a surface.
    pub fn new(surface: S, page: PageGeometry, labels: Labels) -> Assembler<S> {
        Assembler {
            surface,
            page,
            labels,
            note_texts: NoteTexts::default(),
            debug: false,
        }
    }

    /// Sets the notices used when an invoice lacks its own.
    pub fn with_note_texts(mut self, note_texts: NoteTexts) -> Assembler<S> {
        self.note_texts = note_texts;
        self
    }

    /// Outlines every text cell.
    pub fn with_debug(mut self, debug: bool) -> Assembler<S> {
        self.debug = debug;
        self
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draws every section of the invoice.
    pub fn assemble(&mut self, invoice: &Invoice, draft: bool) -> Result<()> {
        debug!("laying out invoice {}", invoice.id);

        let totals = Totals::compute(&invoice.items, &invoice.tax, invoice.discount);
        let footnotes = Footnotes::compose(&invoice.tax, &invoice.notes, &self.note_texts);

        let mut layout = Layout::new(&mut self.surface, self.page, &self.labels).with_debug(self.debug);

        let cursor = layout.start();
        let cursor = layout.header(cursor, invoice)?;
        let cursor = layout.divider(cursor)?;
        let cursor = layout.parties(cursor, &invoice.from, &invoice.to)?;
        let cursor = layout.divider(cursor)?;

        let mut cursor = layout.items(cursor, invoice, &totals, &footnotes)?;
        cursor.settle();
        cursor.br(LINE_HEIGHT);

        layout.notes(cursor, &footnotes)?;

        if draft {
            layout.draft_overlay()?;
        }

        Ok(())
    }
}

impl Renderer for PdfRenderer {
    const EXTENSION: &'static str = "pdf";

    fn render(&mut self, invoice: &Invoice, draft: bool) -> Result<()> {
        self.assemble(invoice, draft)
    }

    fn save_to(self, path: &Path) -> Result<()> {
        self.surface.save(path)
    }
}

impl Renderer for DumpRenderer {
    const EXTENSION: &'static str = "txt";

    fn render(&mut self, invoice: &Invoice, draft: bool) -> Result<()> {
        self.assemble(invoice, draft)
    }

    fn save_to(self, path: &Path) -> Result<()> {
        self.surface.save(path)
    }
}

/// Renders invoices into an output directory.
pub struct DocumentService {
    /// Where the documents are written.
    output_dir: PathBuf,
}

impl DocumentService {
    /// Creates a service writing into a directory.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> DocumentService {
        DocumentService {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the file name of the document of an invoice, e.g. `F24-001_DRAFT.pdf`.
    pub fn file_name(id: &str, draft: bool, extension: &str) -> String {
        if draft {
            format!("{}{}.{}", id, DRAFT_SUFFIX, extension)
        } else {
            format!("{}.{}", id, extension)
        }
    }

    /// Renders an invoice and saves it, returning the path of the written file.
    pub fn render<R: Renderer>(&self, renderer: R, invoice: &Invoice, draft: bool) -> Result<PathBuf> {
        let mut renderer = renderer;
        renderer.render(invoice, draft)?;

        create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(DocumentService::file_name(&invoice.id, draft, R::EXTENSION));

        renderer.save_to(&path)?;
        info!("wrote {}", path.display());

        Ok(path)
    }
}
