// All LLM prompt constants for the career endpoints.

/// System prompt for career-path analysis — enforces JSON-only output.
pub const ANALYZE_SYSTEM: &str = "You are an expert career advisor who maps a candidate's \
    skills and history onto realistic career paths. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Career-path analysis prompt template.
/// Replace `{skills}`, `{experience}`, `{education}`, `{target_roles}`,
/// `{career_status}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze the career position of the candidate below and recommend concrete paths forward.

Return a JSON object with this EXACT schema (no extra fields):
{
  "currentAssessment": "Two or three sentences on where the candidate stands today",
  "recommendedPaths": [
    {
      "role": "Role title",
      "matchScore": 82,
      "reason": "Why this path fits the candidate",
      "requiredSkills": ["Skill they would need to add"]
    }
  ],
  "skillGaps": ["Skill missing for the candidate's stated targets"],
  "nextSteps": ["Concrete action the candidate can take this month"]
}

Rules:
- "matchScore" is an integer from 0 to 100.
- Recommend 2 to 4 paths, ordered by matchScore descending.
- If target roles are given, at least one recommended path must address them.
- "nextSteps" must be 3 to 5 items, each specific and immediately actionable.

CANDIDATE SKILLS: {skills}

CAREER STATUS: {career_status}

TARGET ROLES: {target_roles}

EXPERIENCE:
{experience}

EDUCATION:
{education}"#;
