use crate::entity::Element;

/// Options for full-document rendering.
///
/// Callers usually start from `RenderOptions::default()` and override the
/// fields they care about.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Text of the `<title>` tag. Escaped like any other text.
    pub title: String,
    /// Emit the leading `<!DOCTYPE html>` declaration.
    pub include_doctype: bool,
    /// Emit the charset and viewport `<meta>` tags.
    pub include_metadata: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: String::from("Markdown转换结果"),
            include_doctype: true,
            include_metadata: true,
        }
    }
}

// Emitted verbatim into <head>, already indented one level.
const DOCUMENT_STYLE: &str = r#"    <style>
        body {
            font-family: -apple-system, "Segoe UI", "PingFang SC", "Hiragino Sans GB", "Microsoft YaHei", sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            line-height: 1.6;
            color: #333;
        }
        h1, h2 {
            border-bottom: 1px solid #eee;
            padding-bottom: 0.3em;
        }
        p {
            margin: 1em 0;
        }
        strong {
            font-weight: 600;
        }
    </style>
"#;

/// Escapes HTML-significant characters in text content.
///
/// `&` goes first: it appears in every entity the later substitutions
/// produce, and replacing it any later would double-escape them.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_element(element: &Element) -> String {
    match element {
        Element::Heading1(text) => format!("<h1>{}</h1>", escape(text)),
        Element::Heading2(text) => format!("<h2>{}</h2>", escape(text)),
        Element::Bold(text) => format!("<strong>{}</strong>", escape(text)),
        Element::Italic(text) => format!("<em>{}</em>", escape(text)),
        Element::Text(text) => escape(text),
        Element::Paragraph(spans) => {
            let inner: String = spans.iter().map(render_element).collect();
            format!("<p>{}</p>", inner)
        }
    }
}

/// Renders elements without the document shell: one line of HTML per
/// top-level element, joined with newlines.
pub fn render_fragment(elements: &[Element]) -> String {
    elements
        .iter()
        .map(render_element)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders a complete standalone HTML document around the elements.
pub fn render(elements: &[Element], options: &RenderOptions) -> String {
    log::debug!(
        "rendering {} elements (doctype: {}, metadata: {})",
        elements.len(),
        options.include_doctype,
        options.include_metadata
    );
    let mut html = String::new();
    if options.include_doctype {
        html.push_str("<!DOCTYPE html>\n");
    }
    html.push_str("<html lang=\"zh-CN\">\n");
    html.push_str("<head>\n");
    if options.include_metadata {
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
    }
    html.push_str(&format!("    <title>{}</title>\n", escape(&options.title)));
    html.push_str(DOCUMENT_STYLE);
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    for line in render_fragment(elements).lines() {
        if !line.is_empty() {
            html.push_str("    ");
            html.push_str(line);
        }
        html.push('\n');
    }
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}
