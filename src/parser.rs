//! Grammar for the `VN` lines of a vcf-compare report.
//!
//! ```text
//! line        := "VN" TAB count (TAB label)* EOL?
//! count       := DIGIT+
//! label       := SPACE* identifier (SPACE+ annotation)? SPACE*
//! identifier  := (any byte except space, tab, CR, LF)+
//! annotation  := (any byte except tab, CR, LF)+
//! ```
//!
//! vcf-compare writes labels as `<file> (<percentage>%)`. Only the identifier
//! takes part in matching records; the annotation is kept as written.
use pom::parser::*;

pub const MARKER: &str = "VN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub identifier: String,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLine {
    pub count: u64,
    pub labels: Vec<Label>,
}

fn tab<'a>() -> Parser<'a, u8, ()> {
    sym(b'\t').discard()
}

fn spaces<'a>() -> Parser<'a, u8, ()> {
    sym(b' ').repeat(0..).discard()
}

fn line_end<'a>() -> Parser<'a, u8, ()> {
    one_of(b"\r\n").repeat(0..).discard()
}

fn count<'a>() -> Parser<'a, u8, u64> {
    one_of(b"0123456789")
        .repeat(1..)
        .convert(String::from_utf8)
        .convert(|s| s.parse::<u64>())
}

fn identifier<'a>() -> Parser<'a, u8, String> {
    none_of(b" \t\r\n").repeat(1..).convert(String::from_utf8)
}

fn annotation<'a>() -> Parser<'a, u8, String> {
    none_of(b"\t\r\n")
        .repeat(1..)
        .convert(String::from_utf8)
        .map(|s| s.trim_end().to_string())
}

fn label<'a>() -> Parser<'a, u8, Label> {
    (spaces() * identifier() + (sym(b' ').repeat(1..) * annotation()).opt() - spaces()).map(
        |(identifier, annotation)| Label {
            identifier,
            annotation: annotation.filter(|a| !a.is_empty()),
        },
    )
}

fn marker_line<'a>() -> Parser<'a, u8, MarkerLine> {
    (seq(MARKER.as_bytes()) * tab() * count() + (tab() * label()).repeat(0..) - line_end() - end())
        .map(|(count, labels)| MarkerLine { count, labels })
}

/// True when the first tab-separated field is the `VN` marker.
pub fn is_marker_line(line: &str) -> bool {
    line.split('\t')
        .next()
        .map(|field| field.trim_end_matches(['\r', '\n']) == MARKER)
        .unwrap_or(false)
}

pub fn parse_marker_line(line: &str) -> Result<MarkerLine, pom::Error> {
    marker_line().parse(line.as_bytes())
}

pub fn parse_label(field: &str) -> Result<Label, pom::Error> {
    (label() - end()).parse(field.as_bytes())
}
