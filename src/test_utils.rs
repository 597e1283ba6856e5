use crate::models::domain::{Difficulty, Quiz, QuizQuestion};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a four-option question with the given correct answer
    pub fn question(correct_answer: &str) -> QuizQuestion {
        let mut options = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        if !options.iter().any(|o| o == correct_answer) {
            options.push(correct_answer.to_string());
        } else {
            options.push("D".to_string());
        }

        QuizQuestion {
            question: format!("Which option is {}?", correct_answer),
            options,
            correct_answer: correct_answer.to_string(),
            difficulty: Difficulty::Medium,
            explanation: format!("{} is the documented answer.", correct_answer),
        }
    }

    /// Creates a stored quiz with the given correct answers, one question each
    pub fn quiz(topic: &str, correct_answers: &[&str]) -> Quiz {
        let questions = correct_answers.iter().map(|a| question(a)).collect();
        Quiz::new(
            topic,
            &format!(
                "https://en.wikipedia.org/wiki/{}",
                topic.replace(' ', "_")
            ),
            questions,
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_question() {
        let q = question("B");
        assert_eq!(q.options.len(), 4);
        assert!(q.options.contains(&"B".to_string()));
        assert_eq!(q.correct_answer, "B");
    }

    #[test]
    fn test_fixtures_question_with_unlisted_answer() {
        let q = question("Paris");
        assert_eq!(q.options.len(), 4);
        assert!(q.options.contains(&"Paris".to_string()));
    }

    #[test]
    fn test_fixtures_quiz() {
        let quiz = quiz("Rust language", &["A", "C"]);
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.source_url, "https://en.wikipedia.org/wiki/Rust_language");
        assert_eq!(quiz.questions[1].correct_answer, "C");
    }
}
