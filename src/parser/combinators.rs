//! The nom parsers of the segments of an invoice id template.

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, value};
use nom::sequence::preceded;
use nom::IResult;

use crate::parser::Segment;

/// Parses text without directives.
/// ```
/// # use billdex::parser::Segment;
/// # use billdex::parser::combinators::parse_literal;
/// let (rest, parsed) = parse_literal("F-%d").unwrap();
/// assert_eq!(parsed, Segment::Literal(String::from("F-")));
/// assert_eq!(rest, "%d");
/// ```
pub fn parse_literal(input: &str) -> IResult<&str, Segment> {
    map(is_not("%"), |s: &str| Segment::Literal(String::from(s)))(input)
}

/// Parses an escaped percent sign, `%%`.
pub fn parse_percent(input: &str) -> IResult<&str, Segment> {
    value(Segment::Literal(String::from("%")), tag("%%"))(input)
}

/// Parses the year directive, `%s`.
pub fn parse_year(input: &str) -> IResult<&str, Segment> {
    value(Segment::Year, tag("%s"))(input)
}

/// Parses the sequence directive, `%d` or `%0Nd`.
/// ```
/// # use billdex::parser::Segment;
/// # use billdex::parser::combinators::parse_sequence;
/// let (_, parsed) = parse_sequence("%03d").unwrap();
/// assert_eq!(parsed, Segment::Sequence { width: Some(3) });
/// ```
pub fn parse_sequence(input: &str) -> IResult<&str, Segment> {
    let (input, _) = char('%')(input)?;
    let (input, width) = opt(preceded(
        char('0'),
        map_res(digit1, |digits: &str| digits.parse::<usize>()),
    ))(input)?;
    let (input, _) = char('d')(input)?;
    Ok((input, Segment::Sequence { width }))
}

/// Parses any segment.
pub fn parse_segment(input: &str) -> IResult<&str, Segment> {
    alt((parse_literal, parse_percent, parse_year, parse_sequence))(input)
}
