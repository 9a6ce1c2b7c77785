//! Core types for the curriculum.

use serde::{Deserialize, Serialize};

use crate::title;

/// Letter given to a question when no answer marker resolves one.
pub const DEFAULT_ANSWER: char = 'a';

/// One lesson parsed from a markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Leading digits of the file name, `0` when unknown.
    pub ordering_key: u32,
    pub title: String,
    pub rendered_content: String,
    pub valid: bool,
}

/// A single answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: char,
    pub text: String,
}

impl QuizOption {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

/// Multiple-choice question parsed from quiz text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: char,
}

impl QuizQuestion {
    /// Create a question with no options and the default answer.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
            correct_answer: DEFAULT_ANSWER,
        }
    }
}

/// A named bucket of lessons and an optional quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub display_name: String,
    pub lessons: Vec<Lesson>,
    pub quiz_questions: Vec<QuizQuestion>,
    pub has_quiz: bool,
    pub valid: bool,
}

impl Module {
    /// Create an empty module, deriving the display name from `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let display_name = title::normalize(&id);
        Self {
            id,
            display_name,
            lessons: Vec::new(),
            quiz_questions: Vec::new(),
            has_quiz: false,
            valid: true,
        }
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn question_count(&self) -> usize {
        self.quiz_questions.len()
    }

    /// Append a lesson unless `capacity` lessons are already present.
    /// Returns whether the lesson was stored.
    pub fn push_lesson(&mut self, lesson: Lesson, capacity: usize) -> bool {
        if self.lessons.len() >= capacity {
            return false;
        }
        self.lessons.push(lesson);
        true
    }

    /// Replace the quiz with a freshly parsed question set.
    ///
    /// Each quiz file overwrites whatever an earlier quiz file in the same
    /// module produced, including resetting `has_quiz` when it parsed nothing.
    pub fn replace_quiz(&mut self, questions: Vec<QuizQuestion>) {
        self.has_quiz = !questions.is_empty();
        self.quiz_questions = questions;
    }

    /// True when the module has at least one lesson or a parsed quiz.
    pub fn has_content(&self) -> bool {
        !self.lessons.is_empty() || self.has_quiz
    }

    /// Lessons sorted by ordering key; equal keys keep discovery order.
    pub fn lessons_in_order(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by_key(|lesson| lesson.ordering_key);
        lessons
    }

    /// One-line description: name, lesson count and question count.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {} lessons, {} quiz questions",
            self.display_name,
            self.id,
            self.lesson_count(),
            self.question_count()
        )
    }
}
