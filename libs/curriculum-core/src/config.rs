//! Loader configuration.

use serde::{Deserialize, Serialize};

use crate::quiz::{QuizParseOptions, LOOKAHEAD_WINDOW, MAX_QUIZ_QUESTIONS};

/// Most modules kept in one curriculum.
pub const MAX_MODULES: usize = 10;

/// Most lessons kept in one module.
pub const MAX_LESSONS: usize = 10;

/// Module receiving files whose names carry no `prefix_`.
pub const FALLBACK_MODULE: &str = "general";

/// Largest file read into memory, in bytes.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Limits and defaults applied while aggregating a storage root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub max_modules: usize,
    pub max_lessons: usize,
    pub max_quiz_questions: usize,
    /// Bytes after a question body searched for options and the answer marker.
    pub lookahead: usize,
    pub fallback_module: String,
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_modules: MAX_MODULES,
            max_lessons: MAX_LESSONS,
            max_quiz_questions: MAX_QUIZ_QUESTIONS,
            lookahead: LOOKAHEAD_WINDOW,
            fallback_module: FALLBACK_MODULE.to_string(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl LoaderConfig {
    /// Quiz parser options matching this configuration.
    pub fn quiz_options(&self) -> QuizParseOptions {
        QuizParseOptions {
            lookahead: self.lookahead,
            max_questions: self.max_quiz_questions,
        }
    }
}
