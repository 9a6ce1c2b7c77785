//! Text and JSON rendering of a loaded curriculum.

use std::fmt::Write;

use curriculum_core::Curriculum;

use crate::settings::OutputFormat;

pub fn render(curriculum: &Curriculum, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(curriculum)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(curriculum)? + "\n"),
    }
}

/// One summary line per module followed by its lessons in order.
pub fn render_text(curriculum: &Curriculum) -> String {
    let mut out = String::new();
    for module in curriculum {
        let _ = writeln!(out, "{}", module.summary());
        for lesson in module.lessons_in_order() {
            let _ = writeln!(out, "  Lesson {}: {}", lesson.ordering_key, lesson.title);
        }
    }
    let _ = writeln!(out, "Total modules loaded: {}", curriculum.count());
    out
}
