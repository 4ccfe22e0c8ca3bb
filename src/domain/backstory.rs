//! Backstory trimming: bound the completion to 250 words, ending on a
//! sentence boundary.

/// Maximum number of words kept from the backstory completion.
pub const WORD_LIMIT: usize = 250;

/// Band backstory, bounded to [`WORD_LIMIT`] words.
#[derive(Debug, Clone)]
pub struct Backstory(String);

impl Backstory {
    /// Trim a raw completion to at most [`WORD_LIMIT`] words.
    ///
    /// Text at or under the limit is returned untouched. Over the limit, the
    /// first 250 words are kept (rejoined with single spaces) and truncated
    /// at the last `.`, `!` or `?` among them, inclusive. If no sentence
    /// terminator exists within those words the full 250-word fragment is
    /// returned unterminated.
    pub fn from_completion(text: &str) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() <= WORD_LIMIT {
            return Self(text.to_string());
        }

        let trimmed = words[..WORD_LIMIT].join(" ");
        match trimmed.rfind(['.', '!', '?']) {
            Some(end) => Self(trimmed[..=end].to_string()),
            None => Self(trimmed),
        }
    }

    /// The trimmed backstory text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Backstory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
