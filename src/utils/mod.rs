//! Utility functions for ytplay

pub mod url;

pub use url::*;
