//! Recovers the question list from the model's free-text reply.
//!
//! The reply is supposed to be a JSON document but may arrive wrapped in prose
//! or a markdown code fence. Extraction tries, in order:
//!
//! 1. the whole reply (after stripping a code fence),
//! 2. an array, when the reply itself opens with `[`,
//! 3. the first balanced `{...}` span, found by bracket-depth counting,
//! 4. the first balanced `[...]` span, when no object parses.
//!
//! Items inside the list are not validated.

use serde_json::{json, Value};

use crate::errors::GenerationError;

pub fn extract_questions(content: &str) -> Result<Value, GenerationError> {
    let body = strip_code_fence(content.trim());

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return normalize(value);
    }

    if body.starts_with('[') {
        if let Some(array) = array_span(body) {
            return normalize(array);
        }
    }

    let object_error = match balanced_span(body, '{') {
        Some(span) => match serde_json::from_str::<Value>(span) {
            Ok(value) => return normalize(value),
            Err(e) => format!("invalid JSON in reply: {}", e),
        },
        None => "no complete JSON object in reply".to_string(),
    };

    if let Some(array) = array_span(body) {
        return normalize(array);
    }

    log::error!("Could not parse AI response: {} | content: {}", object_error, content);
    Err(GenerationError::MalformedUpstreamReply(object_error))
}

/// `{"questions": ...}` passes through untouched; a bare array or a single
/// question object is wrapped.
fn normalize(value: Value) -> Result<Value, GenerationError> {
    match value {
        Value::Object(map) if map.contains_key("questions") => Ok(Value::Object(map)),
        Value::Object(map) => Ok(json!({ "questions": [Value::Object(map)] })),
        Value::Array(items) => Ok(json!({ "questions": items })),
        other => Err(GenerationError::MalformedUpstreamReply(format!(
            "expected a JSON object or array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the info string (`json`) on the opening line
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn array_span(text: &str) -> Option<Value> {
    let span = balanced_span(text, '[')?;
    serde_json::from_str::<Value>(span)
        .ok()
        .filter(Value::is_array)
}

/// Returns the slice from the first `open` bracket to its matching closer.
/// Brackets inside JSON strings are ignored. `None` when the reply ends
/// before the span closes or a closer does not match.
fn balanced_span(text: &str, open: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(ch) {
                    return None;
                }
                if stack.is_empty() {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOMS_REPLY: &str = r#"{"questions":[{"question":"Write everything you know about atoms.","marks":6,"expectedKeyPoints":["nucleus","proton"]}]}"#;

    fn assert_malformed(result: Result<Value, GenerationError>) {
        assert!(
            matches!(result, Err(GenerationError::MalformedUpstreamReply(_))),
            "expected MalformedUpstreamReply, got {:?}",
            result
        );
    }

    #[test]
    fn well_formed_document_is_returned_unchanged() {
        let expected: Value = serde_json::from_str(ATOMS_REPLY).unwrap();
        assert_eq!(extract_questions(ATOMS_REPLY).unwrap(), expected);
    }

    #[test]
    fn extra_top_level_keys_survive() {
        let reply = r#"{"questions":[],"topic":"atoms"}"#;
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["topic"], "atoms");
    }

    #[test]
    fn bare_array_is_wrapped() {
        let reply = r#"[{"question":"Calculate relative formula mass of NaCl. [2 marks]","marks":2,"expectedKeyPoints":["Na=23","Cl=35.5","58.5"]}]"#;
        let value = extract_questions(reply).unwrap();

        let questions = value["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["marks"], 2);
        assert_eq!(questions[0]["expectedKeyPoints"][2], "58.5");
    }

    #[test]
    fn json_inside_prose_and_code_fence_is_found() {
        let reply = format!(
            "Sure! Here are your questions:\n```json\n{}\n```\nGood luck with revision.",
            ATOMS_REPLY
        );
        let expected: Value = serde_json::from_str(ATOMS_REPLY).unwrap();
        assert_eq!(extract_questions(&reply).unwrap(), expected);
    }

    #[test]
    fn fenced_bare_array_is_wrapped() {
        let reply = "```json\n[{\"question\":\"q\",\"marks\":5,\"expectedKeyPoints\":[]}]\n```";
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["questions"][0]["question"], "q");
    }

    #[test]
    fn array_in_prose_before_any_object_is_wrapped() {
        let reply = "Questions: [{\"question\":\"q\",\"marks\":5,\"expectedKeyPoints\":[]}] done";
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn bracketed_prose_before_the_object_is_skipped() {
        let reply = format!(
            "Questions for section [4.1] of the notes below:\n{}\nSee [1] for marks.",
            ATOMS_REPLY
        );
        let expected: Value = serde_json::from_str(ATOMS_REPLY).unwrap();
        assert_eq!(extract_questions(&reply).unwrap(), expected);
    }

    #[test]
    fn leading_array_followed_by_prose_is_wrapped() {
        let reply = "[{\"question\":\"q\",\"marks\":5,\"expectedKeyPoints\":[]}]\nHope these help!";
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["questions"][0]["marks"], 5);
    }

    #[test]
    fn braces_inside_strings_do_not_end_the_span() {
        let reply = r#"Output: {"questions":[{"question":"What does } mean in {set} notation?","marks":1,"expectedKeyPoints":["\"quoted\" }"]}]} trailing {"#;
        let value = extract_questions(reply).unwrap();
        assert_eq!(
            value["questions"][0]["question"],
            "What does } mean in {set} notation?"
        );
    }

    #[test]
    fn first_object_wins_over_later_ones() {
        let reply = r#"{"questions":[{"question":"first"}]} and also {"questions":[{"question":"second"}]}"#;
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["questions"][0]["question"], "first");
    }

    #[test]
    fn single_question_object_is_wrapped() {
        let reply = r#"{"question":"State what an atom is. [1 mark]","marks":1,"expectedKeyPoints":["smallest particle"]}"#;
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["questions"][0]["marks"], 1);
    }

    #[test]
    fn fields_are_not_validated() {
        let reply = r#"{"questions":[{"question":"","marks":42,"expectedKeyPoints":[]}]}"#;
        let value = extract_questions(reply).unwrap();
        assert_eq!(value["questions"][0]["marks"], 42);
    }

    #[test]
    fn reply_without_braces_is_malformed() {
        assert_malformed(extract_questions("I'm sorry, I can't help with that."));
        assert_malformed(extract_questions(""));
    }

    #[test]
    fn truncated_json_is_malformed() {
        assert_malformed(extract_questions(
            r#"{"questions":[{"question":"Describe filtration.","marks":4,"expectedKeyPoints":["filter paper""#,
        ));
    }

    #[test]
    fn balanced_but_invalid_json_is_malformed() {
        assert_malformed(extract_questions("Here: {questions: [one, two]}"));
    }

    #[test]
    fn scalar_json_is_malformed() {
        assert_malformed(extract_questions("\"just a string\""));
        assert_malformed(extract_questions("42"));
    }
}
