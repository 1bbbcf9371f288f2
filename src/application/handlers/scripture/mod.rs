//! Scripture text lookup.

mod get_chapter_text;

pub use get_chapter_text::{GetChapterTextHandler, GetChapterTextQuery};
