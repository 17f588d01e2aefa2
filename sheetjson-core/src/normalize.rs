//! Header-to-key normalization

/// Normalize a raw column header into a machine-friendly JSON key.
///
/// The transform is pure and idempotent: trim surrounding whitespace,
/// lowercase, then collapse every maximal run of characters outside
/// `[a-z0-9_]` into a single underscore. `"Emotion Score (%)"` becomes
/// `emotion_score_` (the trailing ` (%)` is one run).
///
/// Two distinct headers may normalize to the same key; resolving that
/// collision is the caller's concern (see `record::build_records`).
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut key = String::with_capacity(trimmed.len());
    let mut in_run = false;

    for ch in trimmed.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            key.push(ch);
            in_run = false;
        } else if !in_run {
            key.push('_');
            in_run = true;
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_replaces_spaces() {
        assert_eq!(normalize_header("Article Title"), "article_title");
    }

    #[test]
    fn collapses_runs_of_special_characters() {
        assert_eq!(normalize_header("Emotion Score (%)"), "emotion_score_");
        assert_eq!(normalize_header("A -- B"), "a_b");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_header("  Weekly Total  "), "weekly_total");
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(normalize_header("week_2 total"), "week_2_total");
    }

    #[test]
    fn non_ascii_letters_become_underscores() {
        assert_eq!(normalize_header("Café Count"), "caf_count");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_header("Emotion Score (%)");
        assert_eq!(normalize_header(&once), once);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            normalize_header("Sentiment: Joy/Fear"),
            normalize_header("Sentiment: Joy/Fear")
        );
    }
}
