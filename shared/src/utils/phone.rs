//! Phone number utilities
//!
//! Recipient lists arrive as one user-supplied string of comma-separated
//! phone numbers with arbitrary punctuation. The helpers here split such a
//! list, strip formatting characters from each entry, and mask numbers for
//! log output.

use once_cell::sync::Lazy;
use regex::Regex;

// Formatting characters stripped from recipient tokens: '-', '(', ')', space.
// Matches anywhere in the token, not just at the boundaries.
static STRIP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-() ]").unwrap());

/// Split a raw recipient list on the literal `,` character.
///
/// Every substring is preserved, including empty ones, in original order.
/// An empty input therefore yields exactly one empty token.
pub fn split_recipients(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
}

/// Normalize one recipient token by removing every occurrence of `-`, `(`,
/// `)` and space. No other characters are affected; digits, `+`, letters and
/// remaining punctuation pass through untouched.
pub fn normalize_recipient(token: &str) -> String {
    STRIP_PATTERN.replace_all(token, "").into_owned()
}

/// Check whether a normalized token is worth handing to a provider.
///
/// A token qualifies if it contains at least one ASCII digit. This is
/// deliberately loose: the provider remains the authority on whether a
/// number is actually routable.
pub fn is_dialable(number: &str) -> bool {
    number.chars().any(|c| c.is_ascii_digit())
}

/// Mask a phone number for display (e.g. 201****4794)
///
/// Shows at most the first three and last four characters so log output
/// never carries a full recipient number.
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", prefix, suffix)
    } else {
        "****".to_string()
    }
}
