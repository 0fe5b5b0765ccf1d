use std::cmp::Ordering;

use chain_walk_core::chain::ChainState;

/// One corpus word, the state type of the tweet chain.
///
/// A word ending with `'.'` closes a sentence and therefore ends a tweet.
#[derive(Clone, Debug)]
pub struct Word(String);

impl Word {
    pub fn new(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl ChainState for Word {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Renders the word followed by a separating space, except at the end
    /// of a sentence.
    fn render(&self) -> String {
        if self.is_terminal() {
            self.0.clone()
        } else {
            format!("{} ", self.0)
        }
    }

    fn is_terminal(&self) -> bool {
        self.0.ends_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_ending_word_is_terminal() {
        assert!(Word::new("done.").is_terminal());
        assert!(!Word::new("keep").is_terminal());
    }

    #[test]
    fn render_separates_words_but_not_sentence_ends() {
        assert_eq!(Word::new("hello").render(), "hello ");
        assert_eq!(Word::new("world.").render(), "world.");
    }

    #[test]
    fn words_compare_by_text() {
        assert_eq!(Word::new("same").compare(&Word::new("same")), Ordering::Equal);
        assert_ne!(Word::new("one").compare(&Word::new("two")), Ordering::Equal);
    }
}
