//! A surface that keeps the primitives instead of drawing them.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::surface::{Primitive, Surface};
use crate::assets;
use crate::Result;

/// Records every primitive drawn on it.
///
/// Image sizes can be registered ahead, so that no file needs to exist. Unregistered images
/// are read from disk.
#[derive(Default)]
pub struct Recorder {
    /// The primitives, in drawing order.
    primitives: Vec<Primitive>,

    /// Known image sizes, by path.
    images: HashMap<PathBuf, (u32, u32)>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// Registers the size of an image.
    pub fn with_image<P: Into<PathBuf>>(mut self, path: P, width: u32, height: u32) -> Recorder {
        self.images.insert(path.into(), (width, height));
        self
    }

    /// Returns the recorded primitives.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the texts of the recorded primitives, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.primitives.iter().filter_map(Primitive::text).collect()
    }

    /// Returns the first primitive whose text is exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.text() == Some(text))
    }

    /// Writes one line per primitive.
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<()> {
        for primitive in &self.primitives {
            writeln!(writer, "{}", primitive)?;
        }
        Ok(())
    }

    /// Writes the dump into a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.dump(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Surface for Recorder {
    fn draw(&mut self, primitive: Primitive) -> Result<()> {
        self.primitives.push(primitive);
        Ok(())
    }

    fn image_size(&self, path: &Path) -> Result<(u32, u32)> {
        match self.images.get(path) {
            Some(size) => Ok(*size),
            None => assets::image_dimensions(path),
        }
    }
}
