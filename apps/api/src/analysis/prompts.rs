// LLM prompt constants for resume analysis.

/// System prompt describing the expected JSON reply.
pub const ANALYZE_SYSTEM: &str = "You are an expert resume analyzer. Analyze the provided resume text and extract:
1. Skills (technical and soft skills)
2. Education details
3. Work experience highlights
4. Key qualifications

Then compare against the job requirements provided and return a structured JSON response with:
- extractedSkills: array of skills found
- matchedSkills: array of skills that match job requirements
- missingSkills: array of required skills not found
- matchPercentage: number (0-100)
- suggestions: array of improvement suggestions
- experienceSummary: brief summary of experience
- educationSummary: brief summary of education

Be thorough and accurate in skill extraction.";

/// User message template. Replace `{resume_text}` and `{job_requirements}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = "Resume Text:
{resume_text}

Job Requirements:
{job_requirements}

Please analyze and return JSON only.";

pub fn build_analyze_prompt(resume_text: &str, job_requirements: &str) -> String {
    // Requirements first so a literal placeholder inside the resume is left alone
    ANALYZE_PROMPT_TEMPLATE
        .replace("{job_requirements}", job_requirements)
        .replacen("{resume_text}", resume_text, 1)
}
