/// Coarse pre-filter applied before spending a classifier call on an entry.
/// All keywords are lower-case; matching is substring based.
pub const PRIMARY_KEYWORDS: &[&str] = &[
    "bitcoin",
    "btc",
    "dogecoin",
    "doge",
    "elon musk",
    "etf",
    "sec",
    "approval",
    "ban",
    "regulation",
    "halving",
    "surge",
    "crash",
];

/// True when the text contains any primary keyword, ignoring case.
pub fn contains_primary_keyword(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    PRIMARY_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
}

/// Keywords that matched, in list order. Used for debug logging only.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    PRIMARY_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| text_lower.contains(keyword))
        .collect()
}
