//! Dictionary storage and first-character lookup

mod index;

pub use index::{DictionaryIndex, WordId};
