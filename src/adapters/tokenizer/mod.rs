//! Tokenizer adapters. The capability is selected once at startup.

#[cfg(feature = "jieba")]
pub mod jieba;
pub mod null;

#[cfg(feature = "jieba")]
pub use jieba::JiebaTokenizer;
pub use null::NullTokenizer;

use crate::ports::Tokenizer;
use std::sync::Arc;

/// Pick the segmentation implementation available in this build. Warns once
/// when only the null fallback is wired.
pub fn select_tokenizer() -> Arc<dyn Tokenizer> {
    #[cfg(feature = "jieba")]
    {
        Arc::new(JiebaTokenizer::new())
    }
    #[cfg(not(feature = "jieba"))]
    {
        tracing::warn!(
            "word segmentation unavailable (built without the `jieba` feature); word-frequency features will be empty"
        );
        Arc::new(NullTokenizer)
    }
}
