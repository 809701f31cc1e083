/// Byte sequences left behind when a UTF-8 quote is decoded as Windows-1252.
const MOJIBAKE_APOSTROPHES: &[&str] = &["â€™", "â€˜"];

/// Repair mis-encoded apostrophes and trim surrounding whitespace and stray dashes.
pub fn clean(text: &str) -> String {
    let mut repaired = text.to_string();
    for pattern in MOJIBAKE_APOSTROPHES {
        if repaired.contains(pattern) {
            repaired = repaired.replace(pattern, "'");
        }
    }
    trim_delimiters(&repaired).to_string()
}

/// Strip leading/trailing whitespace, hyphens and em dashes. En dashes are kept,
/// they separate subtitles.
pub fn trim_delimiters(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '—')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_whitespace_and_dashes() {
        assert_eq!(clean("  Title  "), "Title");
        assert_eq!(clean("- Title -"), "Title");
        assert_eq!(clean("— Title\u{a0}"), "Title");
        assert_eq!(clean("Sur-Name"), "Sur-Name");
    }

    #[test]
    fn test_clean_keeps_en_dash() {
        assert_eq!(clean("Title –"), "Title –");
    }

    #[test]
    fn test_clean_repairs_apostrophes() {
        assert_eq!(clean("Hitchhikerâ€™s Guide"), "Hitchhiker's Guide");
        assert_eq!(clean("â€˜Quotedâ€™"), "'Quoted'");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "-",
            " - Title – Sub - ",
            "ââ€™€™",
            "O'Reilly",
            "—\u{a0}Title",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {:?}", input);
        }
    }
}
