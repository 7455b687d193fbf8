//! This module contains everything related to invoice id template errors.

use std::error::Error;
use std::fmt;

use colored::*;

use crate::parser::utils::{compute_column, replicate};

/// The different types errors that can occur while parsing a template.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// A `%` is followed by something that is not a directive.
    UnknownDirective,

    /// A `%` ends the template.
    DanglingPercent,

    /// The template has no sequence number.
    MissingSequence,

    /// The template has more than one sequence number.
    DuplicateSequence,
}

impl ErrorType {
    /// Returns the title of the error.
    pub fn title(self) -> &'static str {
        match self {
            ErrorType::UnknownDirective => "unknown directive",
            ErrorType::DanglingPercent => "unterminated directive",
            ErrorType::MissingSequence => "missing sequence number",
            ErrorType::DuplicateSequence => "more than one sequence number",
        }
    }

    /// Returns the detail of the error.
    pub fn detail(self) -> &'static str {
        match self {
            ErrorType::UnknownDirective => "this directive is not supported",
            ErrorType::DanglingPercent => "expected a directive after this %",
            ErrorType::MissingSequence => "expected %d or %0Nd somewhere",
            ErrorType::DuplicateSequence => "the sequence number was already given",
        }
    }

    /// Returns an optional note.
    pub fn note(self) -> Option<&'static str> {
        match self {
            ErrorType::UnknownDirective | ErrorType::DanglingPercent => {
                Some("supported directives are %s, %d, %0Nd and %%")
            }
            ErrorType::MissingSequence => None,
            ErrorType::DuplicateSequence => None,
        }
    }
}

/// An error in an invoice id template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    /// The template that was parsed.
    pub template: String,

    /// The byte offset of the error in the template.
    pub offset: usize,

    /// The type of the error.
    pub ty: ErrorType,
}

impl TemplateError {
    /// Creates an error at some offset of a template.
    pub fn new(template: &str, offset: usize, ty: ErrorType) -> TemplateError {
        TemplateError {
            template: String::from(template),
            offset,
            ty,
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let column = compute_column(&self.template, 0, self.offset);
        let margin = replicate(' ', column);

        writeln!(fmt, "{}{}", "error: ".bold().red(), self.ty.title().bold())?;
        writeln!(fmt, "  {}", "|".blue().bold())?;
        writeln!(fmt, "  {} {}", "|".blue().bold(), self.template)?;
        writeln!(
            fmt,
            "  {} {}{} {}",
            "|".blue().bold(),
            margin,
            "^".bold().red(),
            self.ty.detail().bold().red()
        )?;

        if let Some(note) = self.ty.note() {
            writeln!(fmt, "  {} {}{}", "=".blue().bold(), "note: ".bold(), note)?;
        }

        Ok(())
    }
}

impl Error for TemplateError {}
