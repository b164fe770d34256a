pub mod html;
pub mod rss;
pub mod xml;

pub use html::{strip_tags, strip_tags_opt};
pub use rss::extract_alerts;
