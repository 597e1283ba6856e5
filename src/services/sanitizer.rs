use crate::errors::{AppError, AppResult};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Top-level JSON container the caller expects from the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedShape {
    Array,
    Object,
}

impl ExpectedShape {
    fn delimiters(self) -> (char, char) {
        match self {
            ExpectedShape::Array => ('[', ']'),
            ExpectedShape::Object => ('{', '}'),
        }
    }
}

/// Extract the JSON payload from a raw model completion.
///
/// Completions arrive wrapped in markdown fences, preceded by prose
/// ("Here is your quiz:"), or followed by sign-off text. Fences are
/// stripped first, then the text is sliced from the first opening
/// bracket of the expected shape to the last matching close. No
/// brace-balancing repair is attempted: a truncated payload keeps its
/// missing tail and fails at the JSON parse with the real error.
pub fn extract_json_payload(raw: &str, shape: ExpectedShape) -> AppResult<&str> {
    let body = fenced_block(raw).unwrap_or(raw);
    let (open, close) = shape.delimiters();

    let start = body.find(open).ok_or_else(|| {
        AppError::MalformedResponse(format!("no '{open}' found in model completion"))
    })?;
    let payload = match body.rfind(close) {
        Some(end) if end >= start => &body[start..=end],
        _ => &body[start..],
    };

    Ok(payload.trim())
}

/// The contents of the first markdown fence, preferring a json-tagged
/// fence over a generic one. An unclosed fence runs to end of string.
fn fenced_block(raw: &str) -> Option<&str> {
    for tag in [JSON_FENCE, FENCE] {
        if let Some(open) = raw.find(tag) {
            let body = &raw[open + tag.len()..];
            let end = body.find(FENCE).unwrap_or(body.len());
            return Some(&body[..end]);
        }
    }
    None
}
