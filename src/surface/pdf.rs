//! The pdf surface, drawing primitives with printpdf.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BlendMode, Color, ColorBits, ColorSpace, Image, ImageXObject, Line, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Pt, Px, Rgb, SeperableBlendMode,
};

use crate::assets;
use crate::fonts::manager::FontManager;
use crate::fonts::styles::{Rgb8, TextStyle};
use crate::surface::{Align, Blend, Primitive, Surface};
use crate::Result;

/// Distance between the top of a text cell and the baseline, relative to the font size.
const BASELINE: f64 = 0.9;

/// Height of a text cell, relative to the font size.
const CELL_HEIGHT: f64 = 1.25;

/// Thickness of rules and borders.
const STROKE: f64 = 1.0;

fn color(rgb: Rgb8) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Converts a distance from the top of the page into a pdf ordinate.
fn flip(page_height: Pt, y: Pt) -> Pt {
    page_height - y
}

/// Returns where text of a given width starts in its cell.
fn aligned_left(x: Pt, cell_width: Pt, text_width: Pt, align: Align) -> Pt {
    match align {
        Align::Left => x,
        Align::Center => x + Pt((cell_width.0 - text_width.0) / 2.0),
        Align::Right => x + cell_width - text_width,
    }
}

/// Returns the dpi at which an image `pixels` high is displayed `height` high.
///
/// At a given dpi, an image is displayed `pixels * 72 / dpi` points wide and high.
fn image_dpi(pixels: u32, height: Pt) -> f64 {
    f64::from(pixels) * 72.0 / height.0
}

/// A single page pdf document.
pub struct PdfSurface {
    /// The inner document from printpdf.
    document: PdfDocumentReference,

    /// The layer everything is drawn on.
    layer: PdfLayerReference,

    /// The fonts registered in the document.
    fonts: FontManager,

    /// The page size, in pt.
    page_size: (Pt, Pt),
}

impl PdfSurface {
    /// Creates a one page pdf document from its title, its size in pt and the bytes of its
    /// regular and bold fonts.
    pub fn new(title: &str, width: Pt, height: Pt, regular: &[u8], bold: &[u8]) -> Result<PdfSurface> {
        let (document, page, layer) = PdfDocument::new(title, width.into(), height.into(), "invoice");

        let layer = document.get_page(page).get_layer(layer);
        let fonts = FontManager::init(regular, bold, &document)?;

        Ok(PdfSurface {
            document,
            layer,
            fonts,
            page_size: (width, height),
        })
    }

    fn flip(&self, y: Pt) -> Pt {
        flip(self.page_size.1, y)
    }

    fn point(&self, x: Pt, y: Pt) -> (Point, bool) {
        (Point::new(x.into(), self.flip(y).into()), false)
    }

    fn rectangle(&self, x: Pt, y: Pt, width: Pt, height: Pt, fill: bool) {
        let line = Line {
            points: vec![
                self.point(x, y),
                self.point(x + width, y),
                self.point(x + width, y + height),
                self.point(x, y + height),
            ],
            is_closed: true,
            has_fill: fill,
            has_stroke: true,
            is_clipping_path: false,
        };
        self.layer.add_shape(line);
    }

    fn text(&self, x: Pt, y: Pt, width: Pt, text: &str, style: &TextStyle, align: Align) -> Result<()> {
        let font = self.fonts.for_weight(style.weight)?;
        let text_width = font.text_width(text, style.size);

        let left = aligned_left(x, width, text_width, align);
        let baseline = y + Pt(style.size.0 * BASELINE);

        self.layer.set_fill_color(color(style.color));
        self.layer.use_text(
            text,
            style.size.0,
            left.into(),
            self.flip(baseline).into(),
            font.printpdf(),
        );

        Ok(())
    }

    fn watermark(&self, x: Pt, y: Pt, text: &str, style: &TextStyle, blend: Blend) -> Result<()> {
        self.layer.save_graphics_state();
        if blend.overlay {
            self.layer
                .set_blend_mode(BlendMode::Seperable(SeperableBlendMode::Overlay));
        }

        // the page is white, so painting the blended color gives the look of transparency
        let style = TextStyle {
            color: style.color.over_white(blend.alpha),
            ..*style
        };
        self.text(x, y, Pt(0.0), text, &style, Align::Left)?;
        self.layer.restore_graphics_state();

        Ok(())
    }

    fn image(&self, path: &Path, x: Pt, y: Pt, height: Pt) -> Result<()> {
        let pixels = assets::load_rgb(path)?;

        let dpi = image_dpi(pixels.height, height);

        let image = Image::from(ImageXObject {
            width: Px(pixels.width as usize),
            height: Px(pixels.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: pixels.data,
            image_filter: None,
            clipping_bbox: None,
        });

        image.add_to_layer(
            self.layer.clone(),
            Some(x.into()),
            Some(self.flip(y + height).into()),
            None,
            None,
            None,
            Some(dpi),
        );

        Ok(())
    }

    /// Saves the document into a file.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.document.save(&mut writer)?;
        Ok(())
    }
}

impl Surface for PdfSurface {
    fn draw(&mut self, primitive: Primitive) -> Result<()> {
        match primitive {
            Primitive::Text {
                x,
                y,
                width,
                text,
                style,
                align,
                border,
            } => {
                if border {
                    self.layer.set_outline_color(color(style.color));
                    self.layer.set_outline_thickness(STROKE / 2.0);
                    self.rectangle(x, y, width, Pt(style.size.0 * CELL_HEIGHT), false);
                }
                self.text(x, y, width, &text, &style, align)?;
            }

            Primitive::Line { from, to, color: c } => {
                self.layer.set_outline_color(color(c));
                self.layer.set_outline_thickness(STROKE);
                self.layer.add_shape(Line {
                    points: vec![self.point(from.0, from.1), self.point(to.0, to.1)],
                    is_closed: false,
                    has_fill: false,
                    has_stroke: true,
                    is_clipping_path: false,
                });
            }

            Primitive::Rect {
                x,
                y,
                width,
                height,
                color: c,
            } => {
                self.layer.set_outline_color(color(c));
                self.layer.set_fill_color(color(c));
                self.layer.set_outline_thickness(STROKE);
                self.rectangle(x, y, width, height, true);
            }

            Primitive::Image {
                path, x, y, height, ..
            } => self.image(&path, x, y, height)?,

            Primitive::Watermark {
                x,
                y,
                text,
                style,
                blend,
            } => self.watermark(x, y, &text, &style, blend)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    use crate::document::{Assembler, DocumentService, PdfRenderer};
    use crate::layout::{Labels, PageGeometry};
    use crate::model::{Client, Freelancer, Invoice, Item, TaxInfo};

    #[test]
    fn flip_measures_from_the_bottom() {
        assert_eq!(flip(Pt(842.0), Pt(40.0)), Pt(802.0));
        assert_eq!(flip(Pt(842.0), Pt(842.0)), Pt(0.0));
    }

    #[test_case(Align::Left, 400.0 ; "left")]
    #[test_case(Align::Center, 440.0 ; "center")]
    #[test_case(Align::Right, 480.0 ; "right")]
    fn alignment_offsets(align: Align, expected: f64) {
        assert_eq!(
            aligned_left(Pt(400.0), Pt(155.0), Pt(75.0), align),
            Pt(expected)
        );
    }

    #[test]
    fn logo_dpi_scales_to_the_box() {
        // 400 pixels shown 100pt high is 288 dpi, and 200pt wide for a 800 pixel wide image
        let dpi = image_dpi(400, Pt(100.0));
        assert_eq!(dpi, 288.0);
        assert_eq!(800.0 * 72.0 / dpi, 200.0);
    }

    /// Finds a font to render with: `BILLDEX_TEST_FONT`, or a common system font.
    fn test_font() -> Option<Vec<u8>> {
        let candidates = std::env::var("BILLDEX_TEST_FONT")
            .into_iter()
            .chain(
                vec![
                    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                    "/usr/share/fonts/TTF/DejaVuSans.ttf",
                    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                    "/Library/Fonts/Arial.ttf",
                ]
                .into_iter()
                .map(String::from),
            );

        candidates
            .map(std::path::PathBuf::from)
            .find(|path| path.is_file())
            .and_then(|path| std::fs::read(path).ok())
    }

    #[test]
    fn renders_and_saves_a_draft() {
        let font = match test_font() {
            Some(font) => font,
            None => return,
        };

        let mut invoice = Invoice::new(
            "F24-001",
            Freelancer::default(),
            Client::default(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            chrono::Duration::days(30),
        );
        invoice.tax = TaxInfo::new(0.0, 15.0);
        invoice.add_items(vec![Item::new("Widget", 2, 10.0)]);

        let page = PageGeometry::a4();
        let surface = PdfSurface::new(&invoice.id, page.width, page.height, &font, &font).unwrap();
        let renderer: PdfRenderer = Assembler::new(surface, page, Labels::english());

        let dir = tempfile::tempdir().unwrap();
        let path = DocumentService::new(dir.path())
            .render(renderer, &invoice, true)
            .unwrap();

        assert!(path.ends_with("F24-001_DRAFT.pdf"));
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
