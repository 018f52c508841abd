//! Null-object tokenizer. Wired when the segmentation capability is absent.

use crate::ports::Tokenizer;

/// Produces no tokens; word-frequency features degrade to empty results
/// instead of special-casing a missing segmenter throughout the pipeline.
pub struct NullTokenizer;

impl Tokenizer for NullTokenizer {
    fn tokenize(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }

    fn is_available(&self) -> bool {
        false
    }
}
