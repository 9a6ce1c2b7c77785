//! Markdown rendering collaborator.

use comrak::{markdown_to_html, Options};

use crate::error::RenderError;

/// Converts markdown text into HTML.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        self(markdown)
    }
}

/// CommonMark renderer backed by comrak.
pub struct ComrakRenderer {
    options: Options<'static>,
}

impl ComrakRenderer {
    pub fn new() -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        Self { options }
    }
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        Ok(markdown_to_html(markdown, &self.options))
    }
}
