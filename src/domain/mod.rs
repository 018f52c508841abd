//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod report;

pub use entities::{
    classify_textual, ChatSession, Member, Message, MessageKind, Meta, UNKNOWN_NAME,
    VOICE_TRANSCRIPT_MARKER,
};
pub use errors::DomainError;
pub use report::{
    ChatStats, FontWeight, NightOwl, NightOwlTitle, StatsMeta, TalkerProfile, WordCloudItem,
};
