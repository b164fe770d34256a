pub mod alert_service;
pub mod writer;

pub use alert_service::{AlertService, RunSummary};
pub use writer::DocumentWriter;
