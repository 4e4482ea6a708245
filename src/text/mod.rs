//! Text preparation shared by every pipeline stage.
//!
//! Both documents pass through [`normalize`] before any keyword work, so
//! extraction and matching always compare lowercase, single-spaced text.

mod normalizer;

pub use normalizer::{contains_whole_word, normalize};
