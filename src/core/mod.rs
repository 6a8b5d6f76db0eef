//! Core functionality for ytplay

pub mod selection;
pub mod streams;

pub use selection::*;
pub use streams::*;
