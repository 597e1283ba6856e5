pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are a quiz generator. Always respond with valid JSON only, no markdown or extra text.";

/// Instruction prompt for quiz generation. Deterministic for a given
/// (topic, content, count) triple; embeds a literal output example and
/// forbids markdown wrapping, which the sanitizer still defends against.
pub fn build_quiz_prompt(topic: &str, content: &str, num_questions: usize) -> String {
    format!(
        r#"Based on the following Wikipedia article about "{topic}", generate {num_questions} multiple-choice quiz questions.

Article Content:
{content}

IMPORTANT: Return ONLY a valid JSON array. Do not include any markdown formatting, code blocks, or explanatory text.

Format:
[
  {{
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer": "Option A",
    "explanation": "Brief explanation of the correct answer"
  }}
]

Requirements:
1. Questions should test understanding, not just memorization
2. Each question must have exactly 4 options
3. Mix difficulty levels (easy, medium, hard)
4. correct_answer must exactly match one of the options
5. Keep explanations concise (1-2 sentences)
6. Return ONLY the JSON array, nothing else - no text before or after

Generate the questions now:"#
    )
}
