//! This module contains the parser of invoice id templates, such as `F%s-%03d`.
//!
//! A template mixes literal text with directives: `%s` is the two digit year, `%d` the sequence
//! number, `%0Nd` the sequence number padded with zeros to N digits and `%%` a percent sign.

pub mod combinators;
pub mod error;
pub mod utils;

use std::fmt;

use crate::parser::combinators::parse_segment;
use crate::parser::error::{ErrorType, TemplateError};
use crate::parser::utils::offset;

/// A part of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as is.
    Literal(String),

    /// The last two digits of the year.
    Year,

    /// The sequence number, optionally padded with zeros.
    Sequence {
        /// The minimal number of digits.
        width: Option<usize>,
    },
}

/// A parsed invoice id template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFormat {
    /// The template as written in the configuration.
    template: String,

    /// The parsed segments, consecutive literals merged.
    segments: Vec<Segment>,
}

impl IdFormat {
    /// Parses a template. It must contain exactly one sequence directive.
    pub fn parse(template: &str) -> Result<IdFormat, TemplateError> {
        let mut segments: Vec<Segment> = vec![];
        let mut sequence_seen = false;
        let mut input = template;

        while !input.is_empty() {
            let start = offset(template, input);

            let (rest, segment) = match parse_segment(input) {
                Ok(parsed) => parsed,
                Err(_) => {
                    let ty = if input == "%" {
                        ErrorType::DanglingPercent
                    } else {
                        ErrorType::UnknownDirective
                    };
                    return Err(TemplateError::new(template, start, ty));
                }
            };

            if let Segment::Sequence { .. } = segment {
                if sequence_seen {
                    return Err(TemplateError::new(
                        template,
                        start,
                        ErrorType::DuplicateSequence,
                    ));
                }
                sequence_seen = true;
            }

            input = rest;

            if let Segment::Literal(text) = &segment {
                if let Some(Segment::Literal(previous)) = segments.last_mut() {
                    previous.push_str(text);
                    continue;
                }
            }

            segments.push(segment);
        }

        if !sequence_seen {
            return Err(TemplateError::new(
                template,
                template.len(),
                ErrorType::MissingSequence,
            ));
        }

        Ok(IdFormat {
            template: String::from(template),
            segments,
        })
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the id of an invoice of a year.
    ///
    /// ```
    /// # use billdex::parser::IdFormat;
    /// let format = IdFormat::parse("F%s-%03d").unwrap();
    /// assert_eq!(format.render(2024, 7), "F24-007");
    /// ```
    pub fn render(&self, year: i32, sequence: u32) -> String {
        let mut id = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => id.push_str(text),
                Segment::Year => id.push_str(&format!("{:02}", year.rem_euclid(100))),
                Segment::Sequence { width: Some(width) } => {
                    id.push_str(&format!("{:0width$}", sequence, width = width))
                }
                Segment::Sequence { width: None } => id.push_str(&sequence.to_string()),
            }
        }

        id
    }

    /// Returns the smallest sequence number, starting at 1, whose id does not exist yet.
    pub fn next_sequence<F: Fn(&str) -> bool>(&self, year: i32, exists: F) -> u32 {
        let mut sequence = 1;
        while exists(&self.render(year, sequence)) {
            sequence += 1;
        }
        sequence
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("F%s-%03d", 2024, 7, "F24-007" ; "default format")]
    #[test_case("%d", 2024, 12, "12" ; "bare sequence")]
    #[test_case("INV-%s%%-%02d", 2009, 3, "INV-09%-03" ; "escaped percent")]
    #[test_case("%s/%04d", 2100, 12345, "00/12345" ; "wider than padding")]
    fn renders(template: &str, year: i32, sequence: u32, expected: &str) {
        let format = IdFormat::parse(template).unwrap();
        assert_eq!(format.render(year, sequence), expected);
    }

    #[test]
    fn literals_are_merged() {
        let format = IdFormat::parse("A%%B%d").unwrap();
        assert_eq!(
            format.segments(),
            &[
                Segment::Literal(String::from("A%B")),
                Segment::Sequence { width: None }
            ]
        );
    }

    #[test_case("F%s-%x", 5, ErrorType::UnknownDirective ; "unknown directive")]
    #[test_case("F%d%", 3, ErrorType::DanglingPercent ; "dangling percent")]
    #[test_case("F%s", 3, ErrorType::MissingSequence ; "missing sequence")]
    #[test_case("%d-%03d", 3, ErrorType::DuplicateSequence ; "duplicate sequence")]
    fn errors(template: &str, offset: usize, ty: ErrorType) {
        let error = IdFormat::parse(template).unwrap_err();
        assert_eq!(error.offset, offset);
        assert_eq!(error.ty, ty);
    }

    #[test]
    fn error_points_at_the_directive() {
        colored::control::set_override(false);
        let error = IdFormat::parse("F%s-%x").unwrap_err().to_string();
        assert!(error.contains("unknown directive"));
        assert!(error.contains("  |      ^ this directive is not supported"));
    }

    #[test]
    fn next_sequence_skips_existing_ids() {
        let format = IdFormat::parse("F%s-%03d").unwrap();
        let existing = ["F24-001", "F24-002", "F24-004"];
        assert_eq!(
            format.next_sequence(2024, |id| existing.contains(&id)),
            3
        );
        assert_eq!(format.next_sequence(2025, |id| existing.contains(&id)), 1);
    }
}
