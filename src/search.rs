use regex::Regex;

/// Characters the pattern skips over between tokens, in both the query and the stored name.
const SEPARATORS: &str = r"[\s\p{P}]*";

/// Loose author-name matcher.
///
/// Every significant character of the query becomes a literal token preceded
/// by "zero or more separators", compiled case-insensitively and unanchored.
/// So `jkrowling` finds `J. K. Rowling` and `tolkien` finds `J. R. R. Tolkien`.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// Build a pattern from user input.
    ///
    /// Returns `None` when the input has no significant characters; a blank
    /// query would otherwise match every name.
    pub fn new(query: &str) -> Option<Self> {
        let tokens: Vec<String> = query
            .chars()
            .filter(|c| !is_separator(*c))
            .map(|c| format!("{}{}", SEPARATORS, regex::escape(&c.to_string())))
            .collect();

        if tokens.is_empty() {
            return None;
        }

        // Escaped literals only, so this cannot fail to compile.
        let regex = Regex::new(&format!("(?i){}", tokens.concat())).ok()?;
        Some(Self { regex })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_case_spacing_and_initial_dots() {
        let pattern = NamePattern::new("jkrowling").unwrap();
        assert!(pattern.matches("J. K. Rowling"));

        let pattern = NamePattern::new("JRR Tolkien").unwrap();
        assert!(pattern.matches("J. R. R. Tolkien"));
    }

    #[test]
    fn test_tolerates_extra_spaces_in_stored_name() {
        let pattern = NamePattern::new("brentweeks").unwrap();
        assert!(pattern.matches("Brent    Weeks"));
        assert!(pattern.matches("B r e n t Weeks"));
    }

    #[test]
    fn test_unanchored_substring() {
        let pattern = NamePattern::new("weeks").unwrap();
        assert!(pattern.matches("Brent Weeks"));
    }

    #[test]
    fn test_no_match() {
        let pattern = NamePattern::new("tolkien").unwrap();
        assert!(!pattern.matches("J. K. Rowling"));
    }

    #[test]
    fn test_punctuation_in_query_is_not_regex_syntax() {
        let pattern = NamePattern::new("j.k").unwrap();
        assert!(pattern.matches("JK"));
        assert!(!pattern.matches("jxk"));

        let pattern = NamePattern::new("(brent").unwrap();
        assert!(pattern.matches("Brent Weeks"));
    }

    #[test]
    fn test_blank_query_has_no_pattern() {
        assert!(NamePattern::new("").is_none());
        assert!(NamePattern::new("  . ").is_none());
    }
}
