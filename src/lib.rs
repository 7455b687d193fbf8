//! This crate contains all the tools we need to lay out and print invoices on a single pdf page.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod assets;
pub mod config;
pub mod document;
pub mod fonts;
pub mod footnotes;
pub mod layout;
pub mod model;
pub mod parser;
pub mod service;
pub mod store;
pub mod surface;
pub mod totals;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::{error, fmt, io, result};

use crate::parser::error::TemplateError;

macro_rules! impl_from_error {
    ($type: ty, $variant: path, $from: ty) => {
        impl From<$from> for $type {
            fn from(e: $from) -> $type {
                $variant(e)
            }
        }
    };
}

/// The error type of the library.
#[derive(Debug)]
pub enum Error {
    /// Cannot read current directory.
    CannotReadCurrentDir,

    /// No billdex.toml was found.
    NoConfigFile,

    /// Error while dealing with freetype.
    FreetypeError(freetype::Error),

    /// Error while dealing with printpdf.
    PrintpdfError(printpdf::errors::Error),

    /// The specified font file was not found.
    FontNotFound(PathBuf),

    /// A text style asked for a font that was never registered.
    FontNotRegistered(String),

    /// An image could not be opened or decoded.
    ImageError(PathBuf, image::ImageError),

    /// An image has a zero width or height.
    EmptyImage(PathBuf),

    /// A record could not be serialized or deserialized.
    JsonError(serde_json::Error),

    /// The configuration file could not be parsed.
    TomlError(toml::de::Error),

    /// The configuration could not be written.
    TomlSerError(toml::ser::Error),

    /// A record with the same id is already stored.
    AlreadyExists {
        /// The kind of record, e.g. "invoice".
        kind: &'static str,

        /// The id of the record.
        id: String,
    },

    /// No record has this id.
    NotFound {
        /// The kind of record, e.g. "client".
        kind: &'static str,

        /// The id that was looked up.
        id: String,
    },

    /// The invoice id template is malformed.
    InvalidTemplate(TemplateError),

    /// The configured language has no label set.
    UnsupportedLanguage(String),

    /// Another io error occured.
    IoError(io::Error),
}

impl_from_error!(Error, Error::FreetypeError, freetype::Error);
impl_from_error!(Error, Error::PrintpdfError, printpdf::errors::Error);
impl_from_error!(Error, Error::JsonError, serde_json::Error);
impl_from_error!(Error, Error::TomlError, toml::de::Error);
impl_from_error!(Error, Error::TomlSerError, toml::ser::Error);
impl_from_error!(Error, Error::InvalidTemplate, TemplateError);
impl_from_error!(Error, Error::IoError, io::Error);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotReadCurrentDir => write!(fmt, "cannot read current directory"),
            Error::NoConfigFile => write!(fmt, "no billdex.toml was found"),
            Error::FreetypeError(e) => write!(fmt, "freetype error: {}", e),
            Error::PrintpdfError(e) => write!(fmt, "printpdf error: {}", e),
            Error::FontNotFound(path) => write!(fmt, "couldn't find font \"{}\"", path.display()),
            Error::FontNotRegistered(name) => write!(fmt, "font \"{}\" is not registered", name),
            Error::ImageError(path, e) => {
                write!(fmt, "couldn't read image \"{}\": {}", path.display(), e)
            }
            Error::EmptyImage(path) => write!(fmt, "image \"{}\" has no pixels", path.display()),
            Error::JsonError(e) => write!(fmt, "json error: {}", e),
            Error::TomlError(e) => write!(fmt, "invalid configuration: {}", e),
            Error::TomlSerError(e) => write!(fmt, "couldn't write configuration: {}", e),
            Error::AlreadyExists { kind, id } => write!(fmt, "{} \"{}\" already exists", kind, id),
            Error::NotFound { kind, id } => write!(fmt, "{} \"{}\" not found", kind, id),
            Error::InvalidTemplate(e) => write!(fmt, "invalid id format\n{}", e),
            Error::UnsupportedLanguage(lang) => write!(fmt, "unsupported language: {}", lang),
            Error::IoError(e) => write!(fmt, "an io error occured: {}", e),
        }
    }
}

impl error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
