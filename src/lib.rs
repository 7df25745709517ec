//! A small Markdown to HTML converter.
//!
//! Supports a restricted dialect: `# ` and `## ` headings, `**bold**`,
//! `*italic*`, and blank-line separated paragraphs. Input is parsed into
//! a flat [`Element`] tree and rendered as an escaped, self-contained
//! HTML page (or a bare fragment).
//!
//! ```
//! use md2html::{convert, RenderOptions};
//!
//! let html = convert("# 你好\n\nSome **bold** text.\n", &RenderOptions::default());
//! assert!(html.contains("<h1>你好</h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```

pub mod entity;
pub mod parser;
pub mod renderer;

pub use entity::{Document, Element};
pub use renderer::RenderOptions;

/// Converts a Markdown document into a complete HTML document in one call.
pub fn convert(markdown: &str, options: &RenderOptions) -> String {
    renderer::render(&parser::parse(markdown), options)
}

#[cfg(test)]
mod tests {
    use crate::parser;
    use crate::renderer;

    macro_rules! assert_convert {
        ($markdown:expr, $html:expr) => {
            assert_eq!(
                renderer::render_fragment(&parser::parse($markdown)),
                String::from($html)
            );
        };
    }

    #[test]
    fn test_convert() {
        assert_convert!("# h1\n", "<h1>h1</h1>");
        assert_convert!("## h2\n", "<h2>h2</h2>");
        assert_convert!("plain\n", "<p>plain</p>");
        assert_convert!("a**b**c\n", "<p>a<strong>b</strong>c</p>");
        assert_convert!("a*b*c\n", "<p>a<em>b</em>c</p>");
        assert_convert!("# A\n\ntext\n", "<h1>A</h1>\n<p>text</p>");
        assert_convert!("", "");
    }

    #[test]
    fn test_convert_escapes_markup() {
        assert_convert!(
            "# <script>alert(\"x\")</script>\n",
            "<h1>&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;</h1>"
        );
        assert_convert!("5 < 6 & 7 > 2\n", "<p>5 &lt; 6 &amp; 7 &gt; 2</p>");
        assert_convert!("**<b>**\n", "<p><strong>&lt;b&gt;</strong></p>");
    }

    #[test]
    fn test_convert_full_document() {
        let html = crate::convert("# t\n", &crate::RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>t</h1>"));
        assert!(html.ends_with("</html>\n"));
    }
}
