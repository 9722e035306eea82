const VISIBLE_PREFIX: usize = 8;
const VISIBLE_SUFFIX: usize = 4;
const FULL_MASK: &str = "********";

/// Masks a secret for display, keeping the first 8 and last 4 characters.
///
/// Secrets too short to hide anything behind that window are masked
/// entirely.
pub fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= VISIBLE_PREFIX + VISIBLE_SUFFIX {
        return FULL_MASK.to_string();
    }

    let prefix: String = chars[..VISIBLE_PREFIX].iter().collect();
    let suffix: String = chars[chars.len() - VISIBLE_SUFFIX..].iter().collect();
    format!("{prefix}...{suffix}")
}
