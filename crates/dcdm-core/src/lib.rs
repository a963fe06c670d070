//! # dcdm-core
//!
//! Core types shared by the DCDM encoding crates.
//!
//! - [`Scale`] - Domain-range scale (`reference`, `1`, `100`)
//! - [`set_scale`], [`get_scale`], [`with_scale`] - Scoped scale override
//! - [`Signal`] - Shape-preserving mapping over scalars, arrays and vectors
//! - [`Error`], [`Result`] - Configuration errors
//!
//! ## Crate Structure
//!
//! ```text
//! dcdm-core (this crate)
//!    ^
//!    |
//!    +-- dcdm-transfer (OETF / EOTF)
//!    +-- dcdm-cli (command line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scale;
pub mod signal;

// Re-exports for convenience
pub use error::*;
pub use scale::*;
pub use signal::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use dcdm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scale::{get_scale, set_scale, with_scale, Scale, ScaleGuard};
    pub use crate::signal::{FloatSample, Sample, Signal};
}
