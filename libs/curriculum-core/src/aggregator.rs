//! Module aggregation over a flat storage root.
//!
//! Files are grouped by the prefix before their first `_`:
//! `math_1.intro.content` and `math_quiz.quiz` both land in module `math`.
//! Names without a prefix go to the fallback module.

use tracing::{debug, info, warn};

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::lesson;
use crate::quiz;
use crate::render::MarkdownRenderer;
use crate::storage::{self, Storage, StorageEntry};
use crate::store::{Curriculum, CurriculumBuilder};

const LESSON_SUFFIXES: [&str; 2] = [".content", ".md"];
const QUIZ_SUFFIXES: [&str; 2] = [".quiz", ".txt"];

/// What a file contributes to its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Lesson,
    Quiz,
}

/// Classify a file by the suffix of its effective name.
pub fn classify(filename: &str) -> Option<FileKind> {
    if LESSON_SUFFIXES.iter().any(|suffix| filename.ends_with(suffix)) {
        Some(FileKind::Lesson)
    } else if QUIZ_SUFFIXES.iter().any(|suffix| filename.ends_with(suffix)) {
        Some(FileKind::Quiz)
    } else {
        None
    }
}

/// Split `math_1.intro.content` into (`math`, `1.intro.content`).
///
/// A name with no `_`, or one starting with `_`, belongs to `fallback`
/// and keeps its whole name.
pub fn split_module_key<'a>(name: &'a str, fallback: &'a str) -> (&'a str, &'a str) {
    match name.find('_') {
        Some(index) if index > 0 => (&name[..index], &name[index + 1..]),
        _ => (fallback, name),
    }
}

/// Scan the storage root once and assemble the curriculum.
///
/// Only a failure to enumerate the root is returned. Unreadable or
/// oversized files are logged and skipped, and modules left without
/// lessons or quiz questions are dropped at the end.
pub fn load_curriculum<S, R>(storage: &S, renderer: &R, config: &LoaderConfig) -> Result<Curriculum>
where
    S: Storage + ?Sized,
    R: MarkdownRenderer + ?Sized,
{
    let entries = storage.list_root()?;
    debug!("Scanning {} entries using prefix grouping", entries.len());

    let mut builder = CurriculumBuilder::new(config.max_modules);
    for entry in &entries {
        add_entry(&mut builder, storage, renderer, config, entry);
    }

    let curriculum = builder.finish();
    info!("Total modules loaded: {}", curriculum.count());
    Ok(curriculum)
}

fn add_entry<S, R>(
    builder: &mut CurriculumBuilder,
    storage: &S,
    renderer: &R,
    config: &LoaderConfig,
    entry: &StorageEntry,
) where
    S: Storage + ?Sized,
    R: MarkdownRenderer + ?Sized,
{
    let name = entry.name.strip_prefix('/').unwrap_or(&entry.name);
    if entry.is_dir || name.starts_with('.') {
        return;
    }

    let (module_id, filename) = split_module_key(name, &config.fallback_module);
    let Some(module) = builder.module_mut(module_id) else {
        warn!("Max modules reached. Skipping: {}", name);
        return;
    };

    let content = match storage::read_text(storage, entry, config.max_file_size) {
        Ok(content) => content,
        Err(e) => {
            warn!("Skipping {}: {}", name, e);
            return;
        }
    };

    match classify(filename) {
        Some(FileKind::Lesson) => {
            if module.lesson_count() >= config.max_lessons {
                warn!("Lesson limit reached in {}. Skipping: {}", module_id, name);
                return;
            }
            let lesson = lesson::extract_lesson(filename, &content, renderer);
            debug!("Added lesson to {}: {}", module_id, lesson.title);
            module.push_lesson(lesson, config.max_lessons);
        }
        Some(FileKind::Quiz) => {
            let questions = quiz::parse_with(&content, &config.quiz_options());
            debug!("Added quiz to {} with {} questions", module_id, questions.len());
            module.replace_quiz(questions);
        }
        None => debug!("Ignoring {}: unrecognized suffix", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn plain(markdown: &str) -> std::result::Result<String, RenderError> {
        Ok(format!("<p>{}</p>", markdown.len()))
    }

    const QUIZ: &str = "### Q1\nWhat is 2+2?\n\na) 3\nb) 4\n\n**Answer: b)**\n";

    #[test]
    fn split_on_first_underscore() {
        assert_eq!(
            split_module_key("math_1.intro.content", "general"),
            ("math", "1.intro.content")
        );
        assert_eq!(
            split_module_key("earth-science_quiz_final.quiz", "general"),
            ("earth-science", "quiz_final.quiz")
        );
    }

    #[test]
    fn split_without_underscore_uses_fallback() {
        assert_eq!(
            split_module_key("standalone.content", "general"),
            ("general", "standalone.content")
        );
        assert_eq!(split_module_key("_hidden.md", "general"), ("general", "_hidden.md"));
    }

    #[test]
    fn classify_by_suffix() {
        assert_eq!(classify("1.intro.content"), Some(FileKind::Lesson));
        assert_eq!(classify("notes.md"), Some(FileKind::Lesson));
        assert_eq!(classify("quiz.quiz"), Some(FileKind::Quiz));
        assert_eq!(classify("final.txt"), Some(FileKind::Quiz));
        assert_eq!(classify("diagram.png"), None);
    }

    #[test]
    fn groups_lessons_and_quiz_by_prefix() {
        let storage = MemoryStorage::new()
            .with_file("math_1.intro.content", "# Intro\nNumbers")
            .with_file("math_quiz.quiz", QUIZ);

        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        assert_eq!(curriculum.count(), 1);

        let math = curriculum.by_id("math").unwrap();
        assert_eq!(math.display_name, "Math");
        assert_eq!(math.lesson_count(), 1);
        assert_eq!(math.lessons[0].ordering_key, 1);
        assert_eq!(math.lessons[0].title, "Intro");
        assert!(math.has_quiz);
        assert_eq!(math.quiz_questions[0].correct_answer, 'b');
    }

    #[test]
    fn unprefixed_files_go_to_fallback_module() {
        let storage = MemoryStorage::new().with_file("standalone.content", "# Alone");
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        assert_eq!(curriculum.by_index(0).unwrap().id, "general");
        assert_eq!(curriculum.by_index(0).unwrap().display_name, "General");
    }

    #[test]
    fn skips_directories_and_dotfiles() {
        let storage = MemoryStorage::new()
            .with_dir("math_archive")
            .with_file(".math_hidden.md", "# Hidden")
            .with_file("/.DS_Store", "junk");
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        assert!(curriculum.is_empty());
    }

    #[test]
    fn leading_slash_is_ignored() {
        let storage = MemoryStorage::new().with_file("/bio_1.cells.md", "# Cells");
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        assert_eq!(curriculum.by_id("bio").unwrap().lessons[0].title, "Cells");
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let storage = MemoryStorage::new()
            .with_unreadable("math_1.broken.md", 12)
            .with_file("math_2.ok.md", "# Ok");
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        let math = curriculum.by_id("math").unwrap();
        assert_eq!(math.lesson_count(), 1);
        assert_eq!(math.lessons[0].title, "Ok");
    }

    #[test]
    fn oversized_file_is_skipped() {
        let config = LoaderConfig {
            max_file_size: 8,
            ..LoaderConfig::default()
        };
        let storage = MemoryStorage::new()
            .with_file("math_1.long.md", "# A very long lesson")
            .with_file("math_2.short.md", "# Short");
        let curriculum = load_curriculum(&storage, &plain, &config).unwrap();
        assert_eq!(curriculum.by_id("math").unwrap().lessons[0].title, "Short");
    }

    #[test]
    fn render_failure_keeps_lesson() {
        let failing = |_: &str| -> std::result::Result<String, RenderError> {
            Err(RenderError("nope".into()))
        };
        let storage = MemoryStorage::new().with_file("math_1.intro.md", "# Intro");
        let curriculum = load_curriculum(&storage, &failing, &LoaderConfig::default()).unwrap();
        let lesson = &curriculum.by_id("math").unwrap().lessons[0];
        assert_eq!(lesson.rendered_content, "");
        assert!(lesson.valid);
    }

    #[test]
    fn module_with_unparsable_quiz_is_dropped() {
        let storage = MemoryStorage::new()
            .with_file("history_quiz.quiz", "No headers in here at all.")
            .with_file("art_1.color.md", "# Color");
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        assert_eq!(curriculum.count(), 1);
        assert!(curriculum.by_id("history").is_none());
    }

    #[test]
    fn later_quiz_file_replaces_earlier_one() {
        let second = "### Q\nOnly question?\n\na) yes\n";
        let storage = MemoryStorage::new()
            .with_file("math_a.quiz", QUIZ)
            .with_file("math_b.txt", second);
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        let math = curriculum.by_id("math").unwrap();
        assert_eq!(math.question_count(), 1);
        assert_eq!(math.quiz_questions[0].prompt, "Only question?");
    }

    #[test]
    fn empty_later_quiz_clears_has_quiz() {
        let storage = MemoryStorage::new()
            .with_file("math_a.quiz", QUIZ)
            .with_file("math_b.quiz", "nothing parsable");
        let curriculum = load_curriculum(&storage, &plain, &LoaderConfig::default()).unwrap();
        assert!(curriculum.by_id("math").is_none());
    }

    #[test]
    fn lesson_capacity_drops_extra_files() {
        let config = LoaderConfig {
            max_lessons: 2,
            ..LoaderConfig::default()
        };
        let storage = MemoryStorage::new()
            .with_file("math_1.a.md", "# A")
            .with_file("math_2.b.md", "# B")
            .with_file("math_3.c.md", "# C");
        let curriculum = load_curriculum(&storage, &plain, &config).unwrap();
        let titles: Vec<&str> = curriculum
            .by_id("math")
            .unwrap()
            .lessons
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn module_capacity_drops_new_keys() {
        let config = LoaderConfig {
            max_modules: 2,
            ..LoaderConfig::default()
        };
        let storage = MemoryStorage::new()
            .with_file("a_1.md", "# A")
            .with_file("b_1.md", "# B")
            .with_file("c_1.md", "# C")
            .with_file("a_2.md", "# A2");
        let curriculum = load_curriculum(&storage, &plain, &config).unwrap();
        assert_eq!(curriculum.count(), 2);
        assert!(curriculum.by_id("c").is_none());
        assert_eq!(curriculum.by_id("a").unwrap().lesson_count(), 2);
    }

    #[test]
    fn unknown_suffix_holds_a_slot_until_dropped() {
        let config = LoaderConfig {
            max_modules: 1,
            ..LoaderConfig::default()
        };
        let storage = MemoryStorage::new()
            .with_file("img_logo.png", "binary")
            .with_file("math_1.intro.md", "# Intro");
        let curriculum = load_curriculum(&storage, &plain, &config).unwrap();
        assert!(curriculum.is_empty());
    }
}
