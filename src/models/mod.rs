mod document;
mod report;
mod slug;

pub use document::*;
pub use report::*;
pub use slug::*;
