//! Word tokenization
//!
//! Splits raw document text into an ordered sequence of word tokens.
//! Tokens are compared downstream by exact string equality; no case folding
//! or punctuation stripping happens here.

/// A single word token with its zero-based position in its source sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text
    pub text: String,

    /// Token index in the sequence
    pub index: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// Split text into word tokens on runs of whitespace
///
/// Empty or whitespace-only input yields an empty sequence. Paragraph
/// breaks (newlines) count as whitespace like any other.
///
/// # Example
///
/// ```rust
/// use pagediff_core::tokenizers::tokenize;
///
/// let tokens = tokenize("the quick  brown\nfox");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2].text, "brown");
/// assert_eq!(tokens[2].index, 2);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| Token::new(word, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenize() {
        let tokens = tokenize("hello world");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].index, 0);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(tokenize("  \t \n  ").is_empty());
    }

    #[test]
    fn test_runs_of_whitespace_collapse() {
        let tokens = tokenize("a   b\t\tc");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "b");
        assert_eq!(tokens[2].index, 2);
    }

    #[test]
    fn test_paragraph_breaks_are_whitespace() {
        let tokens = tokenize("first paragraph\nsecond paragraph");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "paragraph", "second", "paragraph"]);
    }

    #[test]
    fn test_no_normalization() {
        let tokens = tokenize("Hello, HELLO hello");

        assert_eq!(tokens[0].text, "Hello,");
        assert_eq!(tokens[1].text, "HELLO");
        assert_eq!(tokens[2].text, "hello");
    }
}
