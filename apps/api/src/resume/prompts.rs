// All LLM prompt constants for the resume endpoints.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for ATS scoring — enforces JSON-only output.
pub const ATS_SYSTEM: &str = "You are an expert ATS (Applicant Tracking System) analyst \
    who evaluates how well resumes survive automated screening. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// ATS scoring prompt template. Replace `{resume_text}` and `{target_role}`
/// before sending.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Evaluate the following resume for ATS compatibility when applying for the role of {target_role}.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overallScore": 78,
  "breakdown": [
    {"category": "Keywords & Skills", "score": 26, "maxScore": 35, "status": "warning"},
    {"category": "Formatting & Structure", "score": 22, "maxScore": 25, "status": "good"},
    {"category": "Experience & Achievements", "score": 19, "maxScore": 25, "status": "warning"},
    {"category": "Contact & Sections", "score": 11, "maxScore": 15, "status": "good"}
  ],
  "suggestions": ["Specific, actionable improvement"],
  "keywords": {"found": ["keyword"], "missing": ["keyword"]},
  "strengths": ["What the resume does well"],
  "weaknesses": ["What holds the resume back"]
}

Rules:
- "overallScore" is an integer from 0 to 100 and must equal the sum of the breakdown scores.
- Use exactly the four breakdown categories shown above with those maxScore values.
- "status" is exactly one of: "good" (>= 80% of maxScore), "warning" (50-79%), "poor" (< 50%).
- Every breakdown "score" must be between 0 and its "maxScore".
- "keywords.missing" lists terms expected for the target role that the resume lacks.
- Give 3 to 6 suggestions, each concrete enough to act on directly.

RESUME:
{resume_text}"#;

/// System prompt for professional summary generation. Plain-text output.
pub const SUMMARY_SYSTEM: &str = "You are an expert resume writer. \
    Respond with the summary text only — no preamble, no quotes, no markdown.";

/// Summary generation prompt template. Replace `{resume_text}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a professional resume summary for the candidate below.

Requirements:
- 2 to 3 sentences, 40 to 70 words.
- Third person implied, no pronouns ("Seasoned engineer with...", not "I am...").
- Lead with the candidate's strongest selling point.
- Mention concrete skills and years of experience only if they appear in the resume.

CANDIDATE RESUME:
{resume_text}"#;

/// System prompt for experience rewriting. Plain-text output.
pub const IMPROVE_SYSTEM: &str = "You are an expert resume writer who turns plain job \
    descriptions into achievement-focused resume bullets. \
    Respond with the rewritten description only — no preamble, no quotes, no markdown.";

/// Experience improvement prompt template.
/// Replace `{description}`, `{position}`, `{company}` before sending.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"Rewrite the following work experience description as 2-4 strong resume bullet points.

Requirements:
- Start each bullet with "• " and a strong action verb.
- Emphasize impact and outcomes; add plausible scope words only where the original supports them. Never invent numbers.
- Keep each bullet to one line where possible.

POSITION: {position}
COMPANY: {company}
ORIGINAL DESCRIPTION:
{description}"#;

/// System prompt for skill suggestion — enforces JSON-only output.
pub const SKILLS_SYSTEM: &str = "You are an expert career advisor who recommends resume skills. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Skill suggestion prompt template.
/// Replace `{experience_text}` and `{current_skills}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Suggest additional resume skills for a candidate with the experience below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["skill one", "skill two"]
}

Rules:
- Suggest 5 to 10 skills relevant to the candidate's experience.
- Do NOT repeat any of the current skills.
- Prefer concrete, widely recognized skill names over vague traits.

EXPERIENCE:
{experience_text}

CURRENT SKILLS: {current_skills}"#;
