//! Output comparison
//!
//! Expected and produced output are normalized (line endings unified,
//! surrounding whitespace trimmed) and then compared for exact equality.
//! This strictness is deliberate: there is no tolerance for numeric rounding
//! or interior whitespace differences, which keeps verdicts reproducible and
//! arguable from the problem statement alone.

/// Normalize program output for comparison.
///
/// All line-ending styles collapse to `\n` and leading/trailing whitespace is
/// stripped. Normalization is idempotent.
pub fn normalize(output: &str) -> String {
    output.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Compare expected vs. produced output after normalization.
pub fn outputs_match(expected: &str, actual: &str) -> bool {
    normalize(expected) == normalize(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(outputs_match("7\n", "7\n"));
        assert!(outputs_match("hello world", "hello world"));
    }

    #[test]
    fn test_trailing_newline_ignored() {
        assert!(outputs_match("7\n", "7"));
        assert!(outputs_match("a\nb\n", "a\nb"));
    }

    #[test]
    fn test_line_endings_normalized() {
        assert!(outputs_match("a\r\nb", "a\nb"));
        assert!(outputs_match("a\rb", "a\nb"));
        assert!(outputs_match("a\r\nb\r\n", "a\nb\n"));
    }

    #[test]
    fn test_interior_whitespace_is_significant() {
        assert!(!outputs_match("a b", "a  b"));
        assert!(!outputs_match("a\nb", "a\n\nb"));
    }

    #[test]
    fn test_mismatch() {
        assert!(!outputs_match("7", "8"));
        assert!(!outputs_match("", "x"));
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["  7\r\n", "a\rb\r\nc  ", "\n\nx\n\n", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
