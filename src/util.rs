/// Titles longer than this get split onto two lines.
const WRAP_THRESHOLD: usize = 22;

/// Split a long title into two lines, breaking the word list roughly in
/// half. Purely a rendering concern; node positions never depend on it.
pub fn wrap_title(title: &str) -> Vec<String> {
    if title.chars().count() <= WRAP_THRESHOLD {
        return vec![title.to_string()];
    }

    let words = title
        .split(|c: char| c.is_whitespace() || c == '\u{2014}' || c == '\u{2192}')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();
    if words.len() < 2 {
        return vec![title.to_string()];
    }

    let half = words.len().div_ceil(2);
    vec![words[..half].join(" "), words[half..].join(" ")]
}

pub fn truncate_description(description: &str, max_chars: usize) -> String {
    if description.chars().count() <= max_chars {
        return description.to_string();
    }
    let cut = description.chars().take(max_chars).collect::<String>();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_stay_on_one_line() {
        assert_eq!(wrap_title("Crash Retrievals"), ["Crash Retrievals"]);
    }

    #[test]
    fn long_titles_split_words_roughly_in_half() {
        let lines = wrap_title("Unidentified Anomalous Phenomena Hearings");
        assert_eq!(lines, ["Unidentified Anomalous", "Phenomena Hearings"]);
    }

    #[test]
    fn em_dash_and_arrow_count_as_breaks() {
        let lines = wrap_title("Signals \u{2014} Sightings \u{2192} Official Review Panels");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Signals Sightings Official");
    }

    #[test]
    fn single_long_word_is_not_split() {
        let word = "a".repeat(30);
        assert_eq!(wrap_title(&word), [word.clone()]);
    }

    #[test]
    fn truncation_appends_ellipsis_only_when_needed() {
        assert_eq!(truncate_description("short", 500), "short");
        assert_eq!(truncate_description("abcdef", 3), "abc...");
    }
}
