//! Live preview renderer
//!
//! Produces HTML resembling the end-user widget. The markup uses the
//! same class names and `data-*` attributes the runtime script reads,
//! but the preview itself is illustrative: its submit button is always
//! disabled.

use crate::model::{Choice, Document, QuestionId};

/// Runtime script wiring hint/submit behaviour into rendered questions
pub const RUNTIME_JS: &str = include_str!("../assets/question-runtime.js");

const PREVIEW_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.5;
    max-width: 720px;
    margin: 0 auto;
    padding: 24px;
}

.question {
    border: 1px solid #d0d7de;
    border-radius: 6px;
    padding: 16px;
}

.question-text {
    font-weight: 600;
    margin-bottom: 12px;
}

.answer-choice {
    padding: 6px 0;
    cursor: pointer;
}

.buttons {
    margin-top: 12px;
    display: flex;
    gap: 8px;
}
"#;

/// Escape text for an HTML text node or a double-quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String is infallible
    let _ = pulldown_cmark_escape::escape_html(&mut out, text);
    out
}

fn render_choice(choice: &Choice, question_id: &QuestionId) -> String {
    let id = escape_html(&choice.id);
    format!(
        r#"  <div class="answer-choice">
    <input id="{id}" value="{id}" name="{name}" data-feedback="{feedback}" type="radio">
    <label for="{id}">{text}</label>
  </div>
"#,
        id = id,
        name = escape_html(question_id.as_str()),
        feedback = escape_html(&choice.feedback),
        text = escape_html(&choice.text),
    )
}

/// Render the question widget as an HTML fragment
pub fn render_preview(doc: &Document, question_id: &QuestionId) -> String {
    let mut html = format!(
        r#"<div class="question" id="{id}" data-hint="{hint}" data-correct="{correct}">
  <div class="question-text">{text}</div>
"#,
        id = escape_html(question_id.as_str()),
        hint = escape_html(&doc.hint),
        correct = escape_html(doc.correct().unwrap_or_default()),
        text = escape_html(&doc.question_text),
    );

    for choice in doc.choices() {
        html.push_str(&render_choice(choice, question_id));
    }

    html.push_str(
        r#"  <div class="buttons">
    <button class="toggle-hint">View Hint</button>
    <button disabled class="submit">Submit</button>
  </div>
</div>"#,
    );
    html
}

/// Wrap a fragment in a complete HTML document.
///
/// With `with_runtime` the runtime script is embedded, making the page
/// interactive (selecting a choice enables submit).
pub fn render_page(fragment: &str, title: &str, with_runtime: bool) -> String {
    let script = if with_runtime {
        format!("<script>{}</script>", RUNTIME_JS)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{fragment}
{script}
</body>
</html>"#,
        title = escape_html(title),
        css = PREVIEW_CSS,
        fragment = fragment,
        script = script,
    )
}
