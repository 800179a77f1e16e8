use ammonia::Builder;
use pulldown_cmark::{html, Options, Parser};

/// Renders Markdown post bodies to HTML for analysis, optionally passing
/// the output through an ammonia sanitizer first.
pub struct MarkdownRenderer {
    sanitizer: Builder<'static>,
    sanitize: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_sanitize(true)
    }

    pub fn with_sanitize(sanitize: bool) -> Self {
        let mut sanitizer = Builder::default();
        sanitizer.link_rel(Some("noopener noreferrer"));
        Self { sanitizer, sanitize }
    }

    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;

        let parser = Parser::new_ext(markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        if self.sanitize {
            self.sanitizer.clean(&html_output).to_string()
        } else {
            html_output
        }
    }
}
