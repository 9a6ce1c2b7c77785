//! Lesson extraction from markdown files.
//!
//! A lesson file is named `<digits>.<anything>.content` (or `.md`); the
//! leading digits order the lesson within its module and the first `# `
//! heading gives its title.

use tracing::warn;

use crate::render::MarkdownRenderer;
use crate::types::Lesson;

/// Title used when the markdown has no `# ` heading.
pub const UNTITLED: &str = "Untitled";

const HEADING_MARKER: &str = "# ";

/// Parse the leading digit run of `filename`, or `0` when it has none.
///
/// Digit runs too large for `u32` saturate at `u32::MAX`.
pub fn extract_ordering_key(filename: &str) -> u32 {
    filename
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |key, digit| {
            key.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

/// Text of the first `# ` heading up to the end of its line.
pub fn extract_title(content: &str) -> String {
    let Some(marker) = content.find(HEADING_MARKER) else {
        return UNTITLED.to_string();
    };

    let start = marker + HEADING_MARKER.len();
    let end = content[start..]
        .find('\n')
        .map_or(content.len(), |offset| start + offset);
    content[start..end].to_string()
}

/// Render markdown, degrading to an empty string when the renderer fails.
pub fn render_content<R: MarkdownRenderer + ?Sized>(renderer: &R, markdown: &str) -> String {
    renderer.render(markdown).unwrap_or_else(|e| {
        warn!("Failed to render lesson markdown: {}", e);
        String::new()
    })
}

/// Build a lesson from its effective file name and raw content.
pub fn extract_lesson<R: MarkdownRenderer + ?Sized>(
    filename: &str,
    content: &str,
    renderer: &R,
) -> Lesson {
    Lesson {
        ordering_key: extract_ordering_key(filename),
        title: extract_title(content),
        rendered_content: render_content(renderer, content),
        valid: true,
    }
}
