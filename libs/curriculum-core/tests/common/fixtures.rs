//! Test fixtures and factory functions for quiz and lesson content.

/// One quiz block in the `###` format.
///
/// # Arguments
/// * `number` - Shown in the header line
/// * `prompt` - Question text
/// * `options` - Option texts, lettered from `a`
/// * `answer` - Correct letter, or `None` to omit the answer marker
pub fn quiz_block(number: usize, prompt: &str, options: &[&str], answer: Option<char>) -> String {
    let mut block = format!("### Question {}\n{}\n\n", number, prompt);
    for (letter, text) in ('a'..='d').zip(options) {
        block.push_str(&format!("{}) {}\n", letter, text));
    }
    if let Some(letter) = answer {
        block.push_str(&format!("\n**Answer: {})**\n", letter));
    }
    block.push('\n');
    block
}

/// Generate quiz text with `num_questions` well-formed questions.
pub fn sample_quiz(num_questions: usize) -> String {
    (0..num_questions)
        .map(|i| {
            quiz_block(
                i + 1,
                &format!("Question number {}?", i + 1),
                &["first", "second", "third"],
                Some(['a', 'b', 'c'][i % 3]),
            )
        })
        .collect()
}

/// Markdown lesson with a level-one heading.
pub fn sample_lesson(title: &str) -> String {
    format!("# {}\n\nSome text about {}.\n\n- point one\n- point two\n", title, title)
}
