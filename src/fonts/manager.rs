use std::collections::HashMap;

use freetype::Library;
use printpdf::PdfDocumentReference;

use crate::fonts::styles::Weight;
use crate::fonts::Font;
use crate::{Error, Result};

/// This struct holds the fonts registered in a document.
pub struct FontManager {
    /// The freetype library, needed to be able to measure texts.
    library: Library,

    /// The hashmap that associates names of fonts with fonts.
    fonts: HashMap<String, Font>,
}

impl FontManager {
    /// Creates a font manager without any font.
    pub fn new() -> Result<FontManager> {
        Ok(FontManager {
            library: Library::init()?,
            fonts: HashMap::new(),
        })
    }

    /// Creates a font manager with a regular and a bold font.
    pub fn init(regular: &[u8], bold: &[u8], document: &PdfDocumentReference) -> Result<FontManager> {
        let mut font_manager = FontManager::new()?;
        font_manager.add_font(Weight::Regular.font_name(), regular, document)?;
        font_manager.add_font(Weight::Bold.font_name(), bold, document)?;
        Ok(font_manager)
    }

    /// Registers a new font under a name.
    pub fn add_font(
        &mut self,
        name: &str,
        bytes: &[u8],
        document: &PdfDocumentReference,
    ) -> Result<()> {
        let font = Font::from_bytes(bytes, &self.library, document)?;
        debug!(
            "registered font {} as \"{}\"",
            font.name().unwrap_or_else(|| String::from("without name")),
            name
        );
        self.fonts.insert(String::from(name), font);
        Ok(())
    }

    /// Returns a reference font if it is present in the font manager.
    pub fn get(&self, font_name: &str) -> Option<&Font> {
        self.fonts.get(font_name)
    }

    /// Returns the font of a weight, or an error if it was never registered.
    pub fn for_weight(&self, weight: Weight) -> Result<&Font> {
        let name = weight.font_name();
        self.get(name)
            .ok_or_else(|| Error::FontNotRegistered(String::from(name)))
    }
}
