//! chat-report: transcript statistics and simplified-text digest generation.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
