pub mod quiz_handler;

pub use quiz_handler::{
    delete_quiz, generate_quiz, get_leaderboard, get_quiz, get_recent_quizzes, health_check,
    health_check_live, health_check_ready, submit_quiz,
};
