//! Text functions

/// TRIM - strips leading and trailing whitespace, interior runs are kept
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// UPPER
pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

/// LOWER
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// PROPER - lowercases everything, then uppercases the first character of
/// each whitespace-separated word
pub fn proper(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            result.push(ch);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_keeps_interior_spaces() {
        assert_eq!(trim("  a  b  "), "a  b");
        assert_eq!(trim("\tx\n"), "x");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(upper("MiXeD 1"), "MIXED 1");
        assert_eq!(lower("MiXeD 1"), "mixed 1");
    }

    #[test]
    fn test_proper() {
        assert_eq!(proper("john  q public"), "John  Q Public");
        assert_eq!(proper("hELLO wORLD"), "Hello World");
        assert_eq!(proper("o'neil mc-donald"), "O'neil Mc-donald");
        assert_eq!(proper(" leading"), " Leading");
        assert_eq!(proper(""), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["  Mixed Case  ", "abc DEF", "x"] {
            assert_eq!(trim(&trim(input)), trim(input));
            assert_eq!(upper(&upper(input)), upper(input));
            assert_eq!(lower(&lower(input)), lower(input));
            assert_eq!(proper(&proper(input)), proper(input));
        }
    }
}
