/// Asks the user a yes/no question before a destructive change.
pub trait Confirm {
    /// Returns `true` only on an explicit affirmative answer.
    fn confirm(&self, message: &str) -> anyhow::Result<bool>;
}

/// Accepts `y` and `yes` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        for answer in ["y", "Y", "yes", "YES", " yes\n"] {
            assert!(is_affirmative(answer), "{answer:?} should confirm");
        }
    }

    #[test]
    fn test_is_not_affirmative() {
        for answer in ["", "n", "no", "yep", "sure", "y e s"] {
            assert!(!is_affirmative(answer), "{answer:?} should not confirm");
        }
    }
}
