//! Interactive HTML for a module's quiz.

use std::fmt::Write;

use crate::types::Module;

/// Share of correct answers that earns the middle feedback tier.
const GOOD_SCORE_RATIO: f64 = 0.7;

/// Render the module's quiz as a form with an inline grading script.
///
/// Returns an empty string when the module has no quiz.
pub fn render_quiz_html(module: &Module) -> String {
    if !module.has_quiz {
        return String::new();
    }

    let mut html = String::from("<form id='quizForm'>\n");

    for (i, question) in module.quiz_questions.iter().enumerate() {
        html.push_str("<div class='question'>\n");
        let _ = writeln!(
            html,
            "<p><strong>{}. {}</strong></p>",
            i + 1,
            escape(&question.prompt)
        );
        for option in &question.options {
            let _ = writeln!(
                html,
                "<label><input type='radio' name='q{}' value='{}'> {}</label><br>",
                i,
                option.letter,
                escape(&option.text)
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str("<button type='button' onclick='gradeQuiz()'>Submit Quiz</button>\n");
    html.push_str("</form>\n");
    html.push_str("<div id='result'></div>\n");
    html.push_str(&grading_script(module));
    html
}

fn grading_script(module: &Module) -> String {
    let mut script = String::from("<script>\nfunction gradeQuiz() {\n");
    script.push_str("  var score = 0;\n");
    let _ = writeln!(script, "  var total = {};", module.quiz_questions.len());
    script.push_str("  var form = document.forms['quizForm'];\n");

    for (i, question) in module.quiz_questions.iter().enumerate() {
        let _ = writeln!(
            script,
            "  if(form.elements['q{}'].value == '{}') score++;",
            i,
            escape(&question.correct_answer.to_string())
        );
    }

    script.push_str("  var resultDiv = document.getElementById('result');\n");
    script.push_str("  resultDiv.innerHTML = 'You scored ' + score + ' out of ' + total;\n");
    script.push_str("  if(score == total) {\n");
    script.push_str("    resultDiv.style.color = 'green';\n");
    script.push_str("    resultDiv.innerHTML += '<br>Excellent work!';\n");
    let _ = writeln!(script, "  }} else if(score >= total * {}) {{", GOOD_SCORE_RATIO);
    script.push_str("    resultDiv.style.color = 'orange';\n");
    script.push_str("    resultDiv.innerHTML += '<br>Good job! Keep practicing.';\n");
    script.push_str("  } else {\n");
    script.push_str("    resultDiv.style.color = 'red';\n");
    script.push_str("    resultDiv.innerHTML += '<br>Keep studying!';\n");
    script.push_str("  }\n");
    script.push_str("}\n</script>\n");
    script
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
