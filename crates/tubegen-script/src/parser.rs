//! Parsing of labeled model output.
//!
//! The model is asked for three labeled sections. Labels may come back in
//! Hindi or English, sections may be missing, and the text may not follow the
//! format at all. Parsing never fails: every missing section gets a default.

use tubegen_models::ScriptContent;

const TITLE_LABELS: [&str; 2] = ["शीर्षक:", "Title:"];
const DESCRIPTION_LABELS: [&str; 2] = ["विवरण:", "Description:"];
const SCRIPT_LABELS: [&str; 2] = ["स्क्रिप्ट:", "Script:"];

/// Description used when the model output has none.
pub fn default_description(topic: &str) -> String {
    format!("{} के बारे में वीडियो", topic)
}

/// Split model output into title, description and script.
pub fn parse_script_response(content: &str, topic: &str) -> ScriptContent {
    let title = labeled_line(content, &TITLE_LABELS).unwrap_or_else(|| topic.to_string());
    let description =
        labeled_line(content, &DESCRIPTION_LABELS).unwrap_or_else(|| default_description(topic));
    let script = script_body(content).unwrap_or_else(|| content.to_string());

    ScriptContent {
        title,
        description,
        script,
    }
}

/// Value of the first line containing any of `labels`: the text after the
/// line's first colon.
fn labeled_line(content: &str, labels: &[&str]) -> Option<String> {
    let line = content
        .lines()
        .find(|line| labels.iter().any(|label| line.contains(label)))?;
    let (_, value) = line.split_once(':')?;
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}

/// Everything after the first script label, localized label first.
fn script_body(content: &str) -> Option<String> {
    let start = SCRIPT_LABELS
        .iter()
        .find_map(|label| content.find(label).map(|pos| pos + label.len()))?;
    let body = content[start..].trim();

    (!body.is_empty()).then(|| body.to_string())
}
