pub const SYSTEM_PROMPT: &str = r#"You are an experienced technical recruiter extracting skills from resumes.

Given resume text, identify every technical skill explicitly mentioned:
programming languages, software tools and platforms, frameworks and
libraries, technical methodologies, and specialized technologies.

Rules:
- Exclude soft skills, personal traits, spoken languages, and general education.
- Respond with a single JSON array of skill strings and nothing else.

Example response:
["python", "sql", "machine learning", "react", "flask"]"#;

/// Builds the user prompt, truncating the resume to the provider's context
/// budget on a character boundary.
pub fn build_prompt(resume_text: &str, max_chars: usize) -> String {
    let mut text = resume_text;
    if text.len() > max_chars {
        let mut cut = max_chars;
        while cut > 0 && !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text = &text[..cut];
    }

    format!("Extract the technical skills from this resume text:\n\n{text}")
}
