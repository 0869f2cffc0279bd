use regex::Regex;
use std::sync::OnceLock;

fn delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\s").unwrap())
}

/// Segment a free-text numbered list ("1. Do X 2. Do Y") into trimmed,
/// non-empty items. Text without any numbered delimiter comes back as a
/// single segment; empty or whitespace-only input yields nothing.
pub fn split_numbered_list(text: &str) -> Vec<String> {
    delimiter()
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_numbered_delimiters() {
        assert_eq!(
            split_numbered_list("1. Go for a walk 2. Play cards"),
            vec!["Go for a walk", "Play cards"]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_numbered_list("").is_empty());
        assert!(split_numbered_list("   \n ").is_empty());
    }

    #[test]
    fn text_without_delimiters_is_one_segment() {
        assert_eq!(split_numbered_list("no numbers here"), vec!["no numbers here"]);
    }

    #[test]
    fn leading_delimiter_and_newlines_are_handled() {
        let text = "1. Look through a photo album together\n2. Listen to music from the 1950s\n10. Share a favourite recipe";
        assert_eq!(
            split_numbered_list(text),
            vec![
                "Look through a photo album together",
                "Listen to music from the 1950s",
                "Share a favourite recipe"
            ]
        );
    }

    #[test]
    fn bare_number_without_trailing_space_is_not_a_delimiter() {
        assert_eq!(
            split_numbered_list("version 2.0 of the plan"),
            vec!["version 2.0 of the plan"]
        );
    }
}
