/// Emoji shown next to a predicted label.
///
/// Unknown labels get `None`; callers print the bare label.
pub fn emoji_for(label: &str) -> Option<&'static str> {
    match label {
        "anger" => Some("😠"),
        "disgust" => Some("🤮"),
        "fear" => Some("😨😱"),
        "happy" => Some("🤗"),
        "joy" => Some("😂"),
        "neutral" => Some("😐"),
        "sad" | "sadness" => Some("😔"),
        "shame" => Some("😳"),
        "surprise" => Some("😮"),
        _ => None,
    }
}

/// `label: emoji`, or just `label`.
pub fn decorate(label: &str) -> String {
    match emoji_for(label) {
        Some(e) => format!("{label}: {e}"),
        None => label.to_string(),
    }
}
