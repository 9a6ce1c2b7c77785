//! Parser for quiz text files.
//!
//! # Format
//! ```markdown
//! ### Question 1
//! What is 2+2?
//!
//! a) 3
//! b) 4
//! c) 5
//!
//! **Answer: b)**
//! ```
//!
//! Parsing is a scan over substring searches rather than a tokenizer.
//! Malformed blocks are skipped silently; nothing here returns an error.

use crate::types::{QuizOption, QuizQuestion, DEFAULT_ANSWER};

/// Bytes after a question body that are searched for options and the
/// answer marker.
pub const LOOKAHEAD_WINDOW: usize = 500;

/// Most questions kept from one quiz file.
pub const MAX_QUIZ_QUESTIONS: usize = 50;

const HEADER_MARKER: &str = "###";
const BLANK_LINE: &str = "\n\n";
const FIRST_OPTION_LINE: &str = "\na)";
const BOLD_MARKER: &str = "**";
const ANSWER_MARKERS: [&str; 2] = ["**Answer:", "**Sagot:"];
const OPTION_LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Tunables for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizParseOptions {
    pub lookahead: usize,
    pub max_questions: usize,
}

impl Default for QuizParseOptions {
    fn default() -> Self {
        Self {
            lookahead: LOOKAHEAD_WINDOW,
            max_questions: MAX_QUIZ_QUESTIONS,
        }
    }
}

/// Parse quiz text with the default options.
pub fn parse(content: &str) -> Vec<QuizQuestion> {
    parse_with(content, &QuizParseOptions::default())
}

/// Parse quiz text into questions, in document order.
pub fn parse_with(content: &str, options: &QuizParseOptions) -> Vec<QuizQuestion> {
    let scanner = Scanner {
        text: content,
        lookahead: options.lookahead,
    };

    let mut questions = Vec::new();
    let mut cursor = 0;

    while cursor < content.len() && questions.len() < options.max_questions {
        let Some(header) = scanner.find(HEADER_MARKER, cursor) else {
            break;
        };
        // A header without a terminating newline ends the scan.
        let Some(header_end) = scanner.find("\n", header) else {
            break;
        };
        let body_start = header_end + 1;

        if let Some(question) = scanner.question_at(body_start) {
            questions.push(question);
        }
        cursor = body_start;
    }

    questions
}

/// Read-only view of the quiz text with cursor-based searches.
struct Scanner<'a> {
    text: &'a str,
    lookahead: usize,
}

impl<'a> Scanner<'a> {
    /// Byte offset of `needle` at or after `from`.
    fn find(&self, needle: &str, from: usize) -> Option<usize> {
        self.text
            .get(from..)?
            .find(needle)
            .map(|offset| from + offset)
    }

    fn within_window(&self, position: usize, body_end: usize) -> bool {
        position <= body_end.saturating_add(self.lookahead)
    }

    /// Build the question whose body starts at `body_start`.
    fn question_at(&self, body_start: usize) -> Option<QuizQuestion> {
        let body_end = self.body_end(body_start)?;
        let prompt = self.prompt(body_start, body_end)?;

        Some(QuizQuestion {
            prompt: prompt.to_string(),
            options: self.options(body_end),
            correct_answer: self.answer(body_end).unwrap_or(DEFAULT_ANSWER),
        })
    }

    /// End of the question body: the first blank line or the first line
    /// opening with `a)`, whichever comes first. An empty body is rejected.
    fn body_end(&self, body_start: usize) -> Option<usize> {
        let blank = self.find(BLANK_LINE, body_start);
        let first_option = self.find(FIRST_OPTION_LINE, body_start);
        let end = match (blank, first_option) {
            (Some(a), Some(b)) => a.min(b),
            (a, b) => a.or(b)?,
        };
        (end > body_start).then_some(end)
    }

    /// Trimmed prompt text, rejecting empty and bold-led bodies.
    fn prompt(&self, body_start: usize, body_end: usize) -> Option<&'a str> {
        let prompt = self.text.get(body_start..body_end)?.trim();
        if prompt.is_empty() || prompt.starts_with(BOLD_MARKER) {
            return None;
        }
        Some(prompt)
    }

    /// Consecutive `a)`..`d)` options found within the window.
    fn options(&self, body_end: usize) -> Vec<QuizOption> {
        let mut options = Vec::with_capacity(OPTION_LETTERS.len());

        for letter in OPTION_LETTERS {
            let pattern = format!("{})", letter);
            let Some(start) = self
                .find(&pattern, body_end)
                .filter(|&start| self.within_window(start, body_end))
            else {
                break;
            };

            let end = self.find("\n", start).unwrap_or(self.text.len());
            let text = self.text[start + pattern.len()..end].trim();
            options.push(QuizOption::new(letter, text));
        }

        options
    }

    /// Letter right before the first `)` after an answer marker.
    ///
    /// `**Sagot:` is only consulted when no `**Answer:` follows the body at
    /// all; a marker found past the window resolves nothing.
    fn answer(&self, body_end: usize) -> Option<char> {
        let marker = ANSWER_MARKERS
            .iter()
            .find_map(|marker| self.find(marker, body_end))?;
        if marker >= body_end.saturating_add(self.lookahead) {
            return None;
        }

        let close = self.find(")", marker)?;
        self.text[marker..close].chars().next_back()
    }
}
