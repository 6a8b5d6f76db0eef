//! CLI front-end for ytplay

pub mod args;
pub mod output;

pub use args::Args;
pub use output::Terminal;
