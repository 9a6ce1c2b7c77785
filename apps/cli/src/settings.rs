//! Settings read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use curriculum_core::LoaderConfig;

/// How the loaded curriculum is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format: {}", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub loader: LoaderConfig,
}

impl Settings {
    /// Read settings from process environment variables.
    ///
    /// - CURRICULUM_ROOT: storage directory (default `./storage`)
    /// - CURRICULUM_FORMAT: `text` or `json` (default `text`)
    /// - CURRICULUM_MAX_MODULES, CURRICULUM_MAX_LESSONS,
    ///   CURRICULUM_MAX_QUIZ_QUESTIONS, CURRICULUM_LOOKAHEAD,
    ///   CURRICULUM_MAX_FILE_SIZE: numeric limits
    /// - CURRICULUM_FALLBACK_MODULE: module for unprefixed files
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LoaderConfig::default();

        let root = lookup("CURRICULUM_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./storage"));
        let format = match lookup("CURRICULUM_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::Text,
        };

        let loader = LoaderConfig {
            max_modules: parse_var(&lookup, "CURRICULUM_MAX_MODULES", defaults.max_modules)?,
            max_lessons: parse_var(&lookup, "CURRICULUM_MAX_LESSONS", defaults.max_lessons)?,
            max_quiz_questions: parse_var(
                &lookup,
                "CURRICULUM_MAX_QUIZ_QUESTIONS",
                defaults.max_quiz_questions,
            )?,
            lookahead: parse_var(&lookup, "CURRICULUM_LOOKAHEAD", defaults.lookahead)?,
            fallback_module: lookup("CURRICULUM_FALLBACK_MODULE")
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.fallback_module),
            max_file_size: parse_var(&lookup, "CURRICULUM_MAX_FILE_SIZE", defaults.max_file_size)?,
        };

        Ok(Self {
            root,
            format,
            loader,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, value)),
        None => Ok(default),
    }
}
