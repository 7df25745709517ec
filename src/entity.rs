/// The ordered top-level elements of one parsed document.
pub type Document = Vec<Element>;

/// One node of the parsed element tree.
///
/// Leaf variants carry literal, unescaped text. `Paragraph` is the only
/// variant with children and holds its inline spans in source order.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Heading1(String),
    Heading2(String),
    Bold(String),
    Italic(String),
    Text(String),
    Paragraph(Vec<Element>),
}
