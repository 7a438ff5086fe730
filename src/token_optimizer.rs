use tiktoken_rs::cl100k_base;

/// Counts and truncates prompt text against a provider token budget
pub struct TokenOptimizer {
    encoder: tiktoken_rs::CoreBPE,
    max_tokens: usize,
}

impl TokenOptimizer {
    #[allow(clippy::unwrap_used)] // cl100k tables are compiled in, loading cannot fail
    pub fn new(max_tokens: usize) -> Self {
        Self {
            encoder: cl100k_base().unwrap(),
            max_tokens,
        }
    }

    pub const fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    // Count the number of tokens in a string
    pub fn count_tokens(&self, s: &str) -> usize {
        self.encoder.encode_ordinary(s).len()
    }

    // Truncate a string to fit within the specified token limit
    pub fn truncate_string(&self, s: &str, max_tokens: usize) -> String {
        let tokens = self.encoder.encode_ordinary(s);

        if tokens.len() <= max_tokens {
            return s.to_string();
        }

        let truncation_limit = max_tokens.saturating_sub(1); // Reserve space for the ellipsis
        let mut truncated_tokens = tokens[..truncation_limit].to_vec();
        truncated_tokens.push(self.encoder.encode_ordinary("…")[0]);

        self.encoder
            .decode(truncated_tokens)
            .unwrap_or_else(|_| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through_untouched() {
        let optimizer = TokenOptimizer::new(1000);
        assert_eq!(optimizer.truncate_string("hello world", 100), "hello world");
    }

    #[test]
    fn truncation_respects_the_budget() {
        let optimizer = TokenOptimizer::new(1000);
        let long = "scaffold ".repeat(500);
        let truncated = optimizer.truncate_string(&long, 20);
        assert!(optimizer.count_tokens(&truncated) <= 20);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn counts_are_stable() {
        let optimizer = TokenOptimizer::new(1000);
        let text = "Generate a Web API ASP.NET Core project named 'Shop'.";
        assert_eq!(optimizer.count_tokens(text), optimizer.count_tokens(text));
        assert!(optimizer.count_tokens(text) > 0);
    }
}
