use crate::entity::{Document, Element};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::anychar,
    combinator::{map, peek, recognize, rest, verify},
    multi::many_till,
    sequence::{delimited, pair, preceded},
    IResult,
};

/// Parses a whole Markdown document into its top-level elements.
///
/// Parsing is total: blank lines are skipped, `# ` / `## ` lines become
/// headings, and every other line becomes a paragraph of inline spans.
/// Malformed markup never fails, it stays in the output as literal text.
pub fn parse(i: &str) -> Document {
    let document: Document = i
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect();
    log::debug!("parsed {} top-level elements", document.len());
    document
}

fn parse_line(i: &str) -> Element {
    match parse_heading(i) {
        Ok((_, heading)) => heading,
        Err(_) => Element::Paragraph(tokenize(i)),
    }
}

// Heading text is the raw remainder of the line, so inline markers inside
// headings stay literal. Three or more hashes miss both tags and fall
// through to the paragraph branch.
fn parse_heading(i: &str) -> IResult<&str, Element> {
    alt((
        map(preceded(tag("## "), rest), |text: &str| {
            Element::Heading2(text.to_string())
        }),
        map(preceded(tag("# "), rest), |text: &str| {
            Element::Heading1(text.to_string())
        }),
    ))(i)
}

/// Splits paragraph text into bold, italic, and plain spans in source
/// order. Bold binds tighter: each pass finds the first complete
/// `**...**` pair and only the text before it is considered for italics.
fn tokenize(i: &str) -> Vec<Element> {
    log::trace!("tokenizing {:?}", i);
    let mut spans = Vec::new();
    let mut remaining = i;
    while let Ok((remainder, (plain, bold))) = next_bold(remaining) {
        spans.extend(tokenize_italics(plain));
        spans.push(Element::Bold(bold.to_string()));
        remaining = remainder;
    }
    spans.extend(tokenize_italics(remaining));
    spans
}

// Italic pass over text that contains no bold pair. One level deep only:
// the content of a matched pair is taken verbatim.
fn tokenize_italics(i: &str) -> Vec<Element> {
    let mut spans = Vec::new();
    let mut remaining = i;
    while let Ok((remainder, (plain, italic))) = next_italic(remaining) {
        if !plain.is_empty() {
            spans.push(Element::Text(plain.to_string()));
        }
        spans.push(Element::Italic(italic.to_string()));
        remaining = remainder;
    }
    if !remaining.is_empty() {
        spans.push(Element::Text(remaining.to_string()));
    }
    spans
}

// A complete `**...**` pair at the current position. `take_until` must
// see the closing marker before anything is committed, so a dangling
// opener fails here and stays literal text. Empty pairs do not count.
fn parse_bold(i: &str) -> IResult<&str, &str> {
    delimited(
        tag("**"),
        verify(take_until("**"), |s: &str| !s.is_empty()),
        tag("**"),
    )(i)
}

fn parse_italic(i: &str) -> IResult<&str, &str> {
    delimited(
        tag("*"),
        verify(take_until("*"), |s: &str| !s.is_empty()),
        tag("*"),
    )(i)
}

// Scans forward to the first position where a complete pair starts and
// returns (text before the pair, content of the pair).
fn next_bold(i: &str) -> IResult<&str, (&str, &str)> {
    pair(recognize(many_till(anychar, peek(parse_bold))), parse_bold)(i)
}

fn next_italic(i: &str) -> IResult<&str, (&str, &str)> {
    pair(
        recognize(many_till(anychar, peek(parse_italic))),
        parse_italic,
    )(i)
}
