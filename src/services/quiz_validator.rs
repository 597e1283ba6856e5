use std::collections::HashSet;

use serde_json::Value;

use crate::errors::SchemaViolation;
use crate::models::domain::{Difficulty, QuizQuestion};

pub const REQUIRED_OPTION_COUNT: usize = 4;

/// Maps a question's position to a difficulty label when the model
/// supplies none.
pub type DifficultyStrategy = fn(usize) -> Difficulty;

pub const DIFFICULTY_PATTERN: [Difficulty; 7] = [
    Difficulty::Easy,
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Medium,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Hard,
];

pub fn positional_difficulty(index: usize) -> Difficulty {
    DIFFICULTY_PATTERN
        .get(index)
        .copied()
        .unwrap_or(Difficulty::Medium)
}

/// Unwrap the two accepted top-level shapes: a bare question array, or
/// an object carrying the array under a "quiz" key.
pub fn question_candidates(value: &Value) -> Option<&[Value]> {
    if let Some(array) = value.as_array() {
        return Some(array.as_slice());
    }
    value
        .get("quiz")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

/// Validate every candidate in order. All-or-nothing: the first defect
/// fails the batch. Surviving excess is truncated to `requested`; a
/// shortfall is an error, never a smaller quiz.
pub fn validate_questions(
    candidates: &[Value],
    requested: usize,
    strategy: DifficultyStrategy,
) -> Result<Vec<QuizQuestion>, SchemaViolation> {
    let mut questions = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        questions.push(validate_question(index, candidate, strategy)?);
    }

    if questions.len() < requested {
        return Err(SchemaViolation::InsufficientQuestions {
            got: questions.len(),
            want: requested,
        });
    }
    questions.truncate(requested);
    Ok(questions)
}

fn validate_question(
    index: usize,
    candidate: &Value,
    strategy: DifficultyStrategy,
) -> Result<QuizQuestion, SchemaViolation> {
    let question = string_field(candidate, &["question", "questionText"])
        .filter(|text| !text.trim().is_empty())
        .ok_or(SchemaViolation::MissingField {
            index,
            field: "question",
        })?;

    let options = validate_options(index, candidate)?;

    let answer = string_field(candidate, &["correct_answer", "answer"]).ok_or(
        SchemaViolation::MissingField {
            index,
            field: "correct_answer",
        },
    )?;
    // Exact, case-sensitive membership; answers are compared verbatim
    // at scoring time too.
    if !options.iter().any(|option| option == answer) {
        return Err(SchemaViolation::AnswerNotInOptions {
            index,
            answer: answer.to_string(),
        });
    }

    let difficulty = match string_field(candidate, &["difficulty"]) {
        Some(label) => parse_difficulty(label),
        None => strategy(index),
    };
    let explanation = string_field(candidate, &["explanation"])
        .unwrap_or_default()
        .to_string();

    Ok(QuizQuestion {
        question: question.to_string(),
        options,
        correct_answer: answer.to_string(),
        difficulty,
        explanation,
    })
}

fn validate_options(index: usize, candidate: &Value) -> Result<Vec<String>, SchemaViolation> {
    let raw = candidate
        .get("options")
        .ok_or(SchemaViolation::MissingField {
            index,
            field: "options",
        })?;
    let raw = raw.as_array().ok_or(SchemaViolation::InvalidOptionCount {
        index,
        actual_count: 0,
    })?;

    if raw.len() != REQUIRED_OPTION_COUNT {
        return Err(SchemaViolation::InvalidOptionCount {
            index,
            actual_count: raw.len(),
        });
    }

    let options: Vec<String> = raw
        .iter()
        .filter_map(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .collect();
    let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();

    if options.len() != REQUIRED_OPTION_COUNT || distinct.len() != REQUIRED_OPTION_COUNT {
        return Err(SchemaViolation::InvalidOptionCount {
            index,
            actual_count: distinct.len(),
        });
    }
    Ok(options)
}

fn string_field<'a>(candidate: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| candidate.get(key).and_then(Value::as_str))
}

fn parse_difficulty(value: &str) -> Difficulty {
    match value.trim().to_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}
