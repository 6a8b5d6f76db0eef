//! Video platform API client and related functionality

pub mod formats;
pub mod innertube;
pub mod profile;

pub use formats::*;
pub use innertube::*;
pub use profile::*;
