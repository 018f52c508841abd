//! Jieba-backed word segmentation. Compiled in with the `jieba` feature.

use crate::ports::Tokenizer;
use jieba_rs::Jieba;

/// Chinese word segmentation via jieba-rs. Dictionary is loaded once at
/// construction.
pub struct JiebaTokenizer {
    jieba: Jieba,
}

impl JiebaTokenizer {
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, false)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
