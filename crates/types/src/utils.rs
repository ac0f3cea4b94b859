//! Utility functions and helpers

/// Bugzilla bug ids are plain decimal numbers
pub fn is_bugzilla_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_digit())
}

/// Jira issue keys look like `PROJECT-123`
pub fn is_jira_key(key: &str) -> bool {
    let Some((project, number)) = key.split_once('-') else {
        return false;
    };

    let mut project_chars = project.chars();
    match project_chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }

    if !project_chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
        return false;
    }

    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

/// Mask a secret so it can be logged
pub fn sanitize_for_logging(s: &str) -> String {
    let char_count = s.chars().count();
    if char_count <= 8 {
        return "***".to_string();
    }

    // Show the first 4 characters so keys can still be told apart
    let prefix: String = s.chars().take(4).collect();
    format!("{}... ({} chars)", prefix, char_count)
}
