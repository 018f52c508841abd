//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem and word segmentation. Map infrastructure errors to DomainError.

pub mod persistence;
pub mod tokenizer;
