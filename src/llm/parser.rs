use serde_json::Value;

/// Parses a model response into a skill list. Accepts a bare JSON array,
/// a fenced code block, a `{"skills": [...]}` object, or a Python-style
/// single-quoted list. Anything else yields an empty list — a malformed
/// collaborator response is never fatal.
pub fn parse_skill_list(response: &str) -> Vec<String> {
    let candidate = extract_list_text(response).unwrap_or_else(|| response.trim().to_string());

    if let Some(skills) = parse_json_skills(&candidate) {
        return skills;
    }

    // Python repr-style lists use single quotes, which serde rejects.
    let requoted = candidate.replace('\'', "\"");
    if let Some(skills) = parse_json_skills(&requoted) {
        return skills;
    }

    tracing::warn!("Could not parse skill list from LLM response, treating as empty");
    Vec::new()
}

/// Pulls the bracketed list out of fenced or prose-wrapped response text.
fn extract_list_text(text: &str) -> Option<String> {
    // Fenced code block first, with or without a language tag.
    if let Some(start) = text.find("```") {
        let start = start + 3;
        let start = text[start..]
            .find('\n')
            .map(|i| start + i + 1)
            .unwrap_or(start);
        if let Some(end) = text[start..].find("```") {
            let content = text[start..start + end].trim();
            if content.starts_with('[') || content.starts_with('{') {
                return Some(content.to_string());
            }
        }
    }

    // Raw bracketed span.
    let start = text.find(['[', '{'])?;
    let open = text[start..].chars().next()?;
    let close = if open == '[' { ']' } else { '}' };
    let end = text.rfind(close)?;
    (end > start).then(|| text[start..=end].to_string())
}

fn parse_json_skills(text: &str) -> Option<Vec<String>> {
    let value: Value = serde_json::from_str(text).ok()?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("skills") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let skills: Vec<String> = items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => {
                let s = s.trim().to_string();
                (!s.is_empty()).then_some(s)
            }
            _ => None,
        })
        .collect();

    Some(skills)
}
