#![allow(dead_code)]

// All LLM prompt constants for the enrichment module.
// Each template carries `{placeholder}` slots filled with .replace() at the
// call site; inputs are truncated before substitution, never after.

/// System prompt for the resume critique call.
pub const INSIGHT_SYSTEM: &str = "You are an expert HR analyst.";

/// Resume critique prompt template. Replace `{resume_text}` and `{job_text}`
/// before sending.
pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"You are an expert HR analyst. Compare the resume to the job description.

Return strictly valid JSON with keys:
- strengths: array of short strings
- missing_skills: array of short strings
- fit_score: integer 0-100
- quick_recommendation: short string
- tone: one-word label (e.g., "leadership", "technical", "collaborative")
- suggested_roles: array of {"role": "Role Name", "confidence": percent_int}

Resume:
{resume_text}

Job Description:
{job_text}

Return only JSON."#;

/// System prompt for the single-bullet rewrite call.
pub const BULLET_REWRITE_SYSTEM: &str = "You are a resume-writing expert.";

/// Bullet rewrite prompt template. Replace `{style}` and `{bullet}` before
/// sending.
pub const BULLET_REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite the following resume bullet to be more {style}, concise and achievement-focused.
Return only the rewritten bullet as plain text.

Bullet:
{bullet}"#;

/// System prompt for the full resume rewrite call.
pub const FULL_REWRITE_SYSTEM: &str = "You are an expert resume writer.";

/// Full rewrite prompt template. Replace `{tone}`, `{job_text}` and
/// `{resume_text}` before sending.
pub const FULL_REWRITE_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Rewrite the resume below to optimize for the job description provided.
- Use measurable achievements where possible.
- Use action verbs.
- Keep similar length but more focused.
- Output as plain text resume.

Tone: {tone}

Job:
{job_text}

Resume:
{resume_text}"#;

/// System prompt for the LinkedIn profile review call.
pub const PROFILE_SYSTEM: &str = "You are an expert HR analyst.";

/// LinkedIn profile review prompt template. Replace `{headline}` and
/// `{about}` before sending.
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"You are an expert HR analyst. Review this LinkedIn profile info and return JSON:
- strengths: array of short strings
- missing_skills: array of short strings
- quick_recommendation: short string

Headline: {headline}
About: {about}
Return only JSON."#;
