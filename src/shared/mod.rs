//! Shared helpers: configuration, stopword sets.

pub mod config;
pub mod stopwords;
