//! Application use cases. Orchestrate domain logic via ports.

pub mod analysis_service;
pub mod night_owl;
pub mod simplifier;
pub mod word_cloud;

pub use analysis_service::AnalysisService;
pub use night_owl::NightWindow;
pub use simplifier::SimplifyPolicy;
