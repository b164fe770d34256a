pub mod alert;
pub mod document;

pub use alert::Alert;
pub use document::{AlertDocument, DocumentMeta};
