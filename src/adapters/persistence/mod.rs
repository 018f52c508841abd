//! Filesystem persistence adapters.

pub mod report_writer;
pub mod session_json;

pub use report_writer::FsReportSink;
pub use session_json::JsonSessionSource;
