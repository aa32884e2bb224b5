const MAX_PREVIEW_CHARS: usize = 80;

/// Shortened transcript for log fields.
pub fn transcript_preview(transcript: &str) -> String {
    let trimmed = transcript.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_PREVIEW_CHARS {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(MAX_PREVIEW_CHARS).collect();
    format!("{}... ({} chars total)", head, total)
}
