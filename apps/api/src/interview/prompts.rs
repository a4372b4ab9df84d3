// All LLM prompt constants for the interview endpoints.

/// System prompt for question generation — enforces JSON-only output.
pub const GENERATE_SYSTEM: &str = "You are an experienced technical interviewer who has \
    run hundreds of hiring loops. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Question generation prompt template.
/// Replace `{role}`, `{interview_type}`, `{count}` before sending.
pub const GENERATE_PROMPT_TEMPLATE: &str = r#"Generate {count} interview questions for a candidate applying for the role of {role}.

Interview type: {interview_type}

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {
      "question": "The full question text",
      "category": "technical",
      "difficulty": "medium"
    }
  ]
}

Rules:
- "category" is one of: "technical", "behavioral", "situational".
- "difficulty" is one of: "easy", "medium", "hard".
- Match the interview type: a "technical" interview leans technical, "behavioral" leans behavioral, "mixed" blends both.
- Order questions from easier to harder.
- Questions must be specific to the role, not generic filler."#;

/// System prompt for single-answer feedback — enforces JSON-only output.
pub const FEEDBACK_SYSTEM: &str = "You are an experienced interview coach giving candid, \
    constructive feedback on interview answers. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Single-answer feedback prompt template.
/// Replace `{role}`, `{question}`, `{answer}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"A candidate interviewing for the role of {role} was asked the question below and gave the answer below. Evaluate the answer.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 74,
  "strengths": ["What the answer did well"],
  "improvements": ["What would make the answer stronger"],
  "suggestedAnswer": "A concise model answer the candidate can learn from"
}

Rules:
- "score" is an integer from 0 to 100.
- Give 2 to 4 strengths and 2 to 4 improvements, each specific to this answer.
- "suggestedAnswer" must be 3 to 6 sentences and realistic for a spoken reply.

QUESTION:
{question}

CANDIDATE ANSWER:
{answer}"#;

/// System prompt for full-session analysis — enforces JSON-only output.
pub const ANALYZE_SYSTEM: &str = "You are an experienced interview coach reviewing a full \
    mock-interview session. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Full-session analysis prompt template.
/// Replace `{role}` and `{qa_pairs}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"A candidate interviewing for the role of {role} completed the mock interview below. Evaluate the session as a whole.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overallScore": 68,
  "summary": "Two or three sentences on how the session went overall",
  "strengths": ["Session-wide strength"],
  "improvements": ["Session-wide improvement"],
  "perQuestion": [
    {"question": "The question asked", "score": 70, "comment": "One or two sentences on this answer"}
  ]
}

Rules:
- "overallScore" and every per-question "score" are integers from 0 to 100.
- "perQuestion" has exactly one entry per question, in the order asked.
- Feedback must reference what the candidate actually said, not generic advice.

SESSION TRANSCRIPT:
{qa_pairs}"#;
