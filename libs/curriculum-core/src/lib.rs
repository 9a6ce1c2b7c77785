//! Core curriculum library: turns a flat listing of content files into
//! modules of lessons and quizzes.
//!
//! Provides:
//! - Title normalization for module identifiers
//! - Lesson extraction (ordering key, title, rendered HTML)
//! - Quiz text parser for the `###` / `a)` / `**Answer:` format
//! - Module aggregation over a storage root
//! - Quiz HTML rendering for parsed quizzes

pub mod aggregator;
pub mod config;
pub mod error;
pub mod lesson;
pub mod quiz;
pub mod quiz_html;
pub mod render;
pub mod storage;
pub mod store;
pub mod title;
pub mod types;

pub use aggregator::load_curriculum;
pub use config::LoaderConfig;
pub use error::{RenderError, Result, StorageError};
pub use lesson::{extract_ordering_key, extract_title};
pub use quiz::{parse, parse_with, QuizParseOptions, LOOKAHEAD_WINDOW, MAX_QUIZ_QUESTIONS};
pub use quiz_html::render_quiz_html;
pub use render::{ComrakRenderer, MarkdownRenderer};
pub use storage::{FsStorage, MemoryStorage, Storage, StorageEntry};
pub use store::Curriculum;
pub use title::normalize;
pub use types::{Lesson, Module, QuizOption, QuizQuestion};
