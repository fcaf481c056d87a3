//! Common utility functions shared across the codebase.

/// First and last code point of the CJK range treated as translatable text.
const CJK_START: char = '\u{4e00}';
const CJK_END: char = '\u{9fa5}';

/// Checks if the text contains at least one CJK unified ideograph (U+4E00..=U+9FA5).
///
/// # Examples
///
/// ```
/// use cjk_i18n::utils::contains_cjk;
///
/// assert!(contains_cjk("你好"));
/// assert!(contains_cjk("Hello 世界"));
/// assert!(!contains_cjk("Hello"));
/// assert!(!contains_cjk("こんにちは"));
/// assert!(!contains_cjk(""));
/// ```
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| (CJK_START..=CJK_END).contains(&c))
}

/// Pluralize a noun for summary lines: `1 file`, `2 files`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
