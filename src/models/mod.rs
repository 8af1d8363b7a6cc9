mod content;
mod section;

pub use content::*;
pub use section::{SectionId, UnknownSection};
