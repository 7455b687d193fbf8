//! This module defines the configuration of a billdex project. The configuration is parsed from
//! a TOML file located at the root of the project. Every section takes default values that are
//! also provided by this module.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::{fmt, result};

use chrono::Duration;
use printpdf::Pt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::layout::{Labels, PageGeometry};
use crate::model::{Freelancer, NoteTexts, Payment, TaxInfo};
use crate::parser::IdFormat;
use crate::{Error, Result};

/// The name of the configuration file.
pub const CONFIG_FILE: &str = "billdex.toml";

/// Serializes a `Pt` structure.
// This is required to use in macro `serialize_with`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_pt<S: Serializer>(pt: &Pt, serializer: S) -> result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(pt.0)
}

/// Deserializes a `Pt` structure.
pub fn deserialize_pt<'a, D: Deserializer<'a>>(deserializer: D) -> result::Result<Pt, D::Error> {
    deserializer.deserialize_f64(PtVisitor)
}

macro_rules! visit_from {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Pt(f64::from(value)))
        }
    };
}

macro_rules! visit_as {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Pt(value as f64))
        }
    };
}

/// Visitor for the `Pt` structure.
pub struct PtVisitor;

impl<'a> Visitor<'a> for PtVisitor {
    type Value = Pt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a length in points")
    }

    visit_from!(visit_u8, u8);
    visit_from!(visit_u16, u16);
    visit_from!(visit_u32, u32);
    visit_as!(visit_u64, u64);
    visit_from!(visit_i8, i8);
    visit_from!(visit_i16, i16);
    visit_from!(visit_i32, i32);
    visit_as!(visit_i64, i64);
    visit_from!(visit_f32, f32);
    visit_from!(visit_f64, f64);
}

/// The directories of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dirs {
    /// Where invoices are stored.
    pub invoice: PathBuf,

    /// Where clients are stored.
    pub client: PathBuf,

    /// Where documents are written.
    pub pdf: PathBuf,

    /// Where the logo and fonts live.
    #[serde(rename = "static")]
    pub assets: PathBuf,
}

impl Default for Dirs {
    fn default() -> Dirs {
        Dirs {
            invoice: PathBuf::from("./invoice"),
            client: PathBuf::from("./client"),
            pdf: PathBuf::from("./pdf"),
            assets: PathBuf::from("./static"),
        }
    }
}

impl Dirs {
    /// Returns every directory of the project.
    pub fn all(&self) -> [&Path; 4] {
        [
            self.invoice.as_path(),
            self.client.as_path(),
            self.pdf.as_path(),
            self.assets.as_path(),
        ]
    }
}

/// The values given to new invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDefaults {
    /// The currency code.
    pub currency: String,

    /// The path to the logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// The id template.
    pub id_format: String,

    /// How many days after issue invoices are due.
    pub due_days: u32,

    /// The VAT percentage.
    pub vat: f64,

    /// The retention percentage.
    pub retention: f64,
}

impl Default for InvoiceDefaults {
    fn default() -> InvoiceDefaults {
        InvoiceDefaults {
            currency: String::from("EUR"),
            logo: None,
            id_format: String::from("F%s-%03d"),
            due_days: 30,
            vat: 21.0,
            retention: 0.0,
        }
    }
}

impl InvoiceDefaults {
    /// Returns the default taxes.
    pub fn tax(&self) -> TaxInfo {
        TaxInfo::new(self.vat, self.retention)
    }

    /// Returns the default due delay.
    pub fn due(&self) -> Duration {
        Duration::days(i64::from(self.due_days))
    }
}

/// The font files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// The regular font.
    pub regular: PathBuf,

    /// The bold font.
    pub bold: PathBuf,
}

impl Default for Fonts {
    fn default() -> Fonts {
        Fonts {
            regular: PathBuf::from("./static/fonts/Inter.ttf"),
            bold: PathBuf::from("./static/fonts/Inter-Bold.ttf"),
        }
    }
}

/// Holds the configuration of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether text cells are outlined in documents.
    pub debug: bool,

    /// The language of the labels.
    pub language: String,

    /// The directories of the project.
    pub dirs: Dirs,

    /// The values given to new invoices.
    pub invoice: InvoiceDefaults,

    /// The font files.
    pub fonts: Fonts,

    /// The page geometry.
    pub page: PageGeometry,

    /// The issuer of the invoices.
    pub freelancer: Freelancer,

    /// The payment details printed on invoices.
    pub payment: Payment,

    /// The texts of the notes.
    pub notes: NoteTexts,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            debug: false,
            language: String::from("en"),
            dirs: Dirs::default(),
            invoice: InvoiceDefaults::default(),
            fonts: Fonts::default(),
            page: PageGeometry::default(),
            freelancer: Freelancer::default(),
            payment: Payment::default(),
            notes: NoteTexts::default(),
        }
    }
}

impl Config {
    /// Creates a default configuration for a company, with placeholders to fill in.
    pub fn with_title(title: &str) -> Config {
        Config {
            invoice: InvoiceDefaults {
                logo: Some(String::from("./static/logo.png")),
                ..InvoiceDefaults::default()
            },
            freelancer: Freelancer {
                company: String::from(title),
                name: String::from("Your Full Name"),
                email: String::from("your.email@example.com"),
                phone: String::from("+99 123456789"),
                vat_id: String::from("CC12345678A"),
                address1: String::from("Your Street Address"),
                address2: String::from("City, ST, Zip Code"),
            },
            payment: Payment {
                holder: String::from("Bank account holder"),
                iban: String::from("CC00 1234 1234 12 1234567890"),
                swift: String::from("ABCDDEFFXXX"),
            },
            notes: NoteTexts {
                no_due: String::from(
                    "Please send payment within 28 days of receiving this invoice.",
                ),
                vat_0: String::from(
                    "Invoice exempt from VAT pursuant to EU Directive 2006/112/EC.",
                ),
                retention_not_0: String::from(
                    "Retention applied to professional services.",
                ),
            },
            ..Config::default()
        }
    }

    /// Looks for the configuration file in a directory and its ancestors.
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
        let mut current_dir = PathBuf::from(start.as_ref());

        loop {
            current_dir.push(CONFIG_FILE);

            if current_dir.is_file() {
                debug!("found configuration at {}", current_dir.display());
                break Ok(current_dir);
            }

            // Remove billdex.toml
            current_dir.pop();

            // Go to the parent directory
            if !current_dir.pop() {
                break Err(Error::NoConfigFile);
            }
        }
    }

    /// Parses a configuration file.
    ///
    /// Relative paths are resolved against the directory of the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let mut config: Config = toml::from_str(&content)?;

        if let Some(root) = path.parent() {
            config.rebase(root);
        }

        Ok(config)
    }

    /// Writes the configuration into a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml = toml::to_string(self)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(toml.as_bytes())?;
        Ok(())
    }

    /// Makes relative paths relative to a root directory.
    fn rebase(&mut self, root: &Path) {
        for dir in &mut [
            &mut self.dirs.invoice,
            &mut self.dirs.client,
            &mut self.dirs.pdf,
            &mut self.dirs.assets,
            &mut self.fonts.regular,
            &mut self.fonts.bold,
        ] {
            let rebased = root.join(&**dir);
            **dir = rebased;
        }

        self.invoice.logo = match self.invoice.logo.take() {
            Some(logo) if !logo.is_empty() => Some(root.join(logo).display().to_string()),
            _ => None,
        };
    }

    /// Parses the invoice id template.
    pub fn id_format(&self) -> Result<IdFormat> {
        Ok(IdFormat::parse(&self.invoice.id_format)?)
    }

    /// Returns the labels of the configured language.
    pub fn labels(&self) -> Result<Labels> {
        Labels::for_language(&self.language)
    }
}
