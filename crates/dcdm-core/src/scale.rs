//! Domain-range scale and its scoped override.
//!
//! Transfer functions operate natively on values in `[0, 1]`. Callers that
//! work in percentages select the `100` scale: inputs are divided by 100
//! before the curve is evaluated and outputs multiplied by 100 afterwards.
//!
//! | Scale | Factor | Meaning |
//! |-------|--------|---------|
//! | [`Scale::Reference`] | 1 | Native domain of each function |
//! | [`Scale::One`] | 1 | Explicit unity alias of reference |
//! | [`Scale::Hundred`] | 100 | Percentage domain and range |
//!
//! # Scoped Override
//!
//! The active scale lives in a per-thread cell. [`set_scale`] installs a new
//! scale and returns a [`ScaleGuard`]; dropping the guard restores whatever
//! was active before, including when the scope is left through `?` or a
//! panic. Guards nest like a stack.
//!
//! ```rust
//! use dcdm_core::{get_scale, set_scale, Scale};
//!
//! assert_eq!(get_scale(), Scale::Reference);
//! {
//!     let _guard = set_scale(Scale::Hundred);
//!     assert_eq!(get_scale(), Scale::Hundred);
//! }
//! assert_eq!(get_scale(), Scale::Reference);
//! ```
//!
//! Code that fans work out to other threads should read the scale once with
//! [`get_scale`] and hand it over by value; worker threads start from
//! [`Scale::Reference`].

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};

thread_local! {
    static CURRENT: Cell<Scale> = const { Cell::new(Scale::Reference) };
}

/// Convention used to interpret the numeric range of inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scale {
    /// Native `[0, 1]` domain.
    #[default]
    Reference,
    /// Unity scale, numerically identical to [`Scale::Reference`].
    One,
    /// Percentage scale, values in `[0, 100]`.
    Hundred,
}

impl Scale {
    /// All accepted scales.
    pub const ALL: [Scale; 3] = [Scale::Reference, Scale::One, Scale::Hundred];

    /// Multiplier between the native domain and this scale.
    #[inline]
    pub const fn factor(self) -> f64 {
        match self {
            Scale::Reference | Scale::One => 1.0,
            Scale::Hundred => 100.0,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Scale::Reference => "reference",
            Scale::One => "1",
            Scale::Hundred => "100",
        }
    }

    /// Brings a caller value into the native `[0, 1]` domain.
    #[inline]
    pub fn to_domain(self, v: f64) -> f64 {
        v / self.factor()
    }

    /// Takes a native `[0, 1]` result back to the caller's range.
    #[inline]
    pub fn from_range(self, v: f64) -> f64 {
        v * self.factor()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(Scale::Reference),
            "1" => Ok(Scale::One),
            "100" => Ok(Scale::Hundred),
            _ => Err(Error::invalid_scale(s)),
        }
    }
}

impl TryFrom<u32> for Scale {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self> {
        match v {
            1 => Ok(Scale::One),
            100 => Ok(Scale::Hundred),
            other => Err(Error::invalid_scale(other.to_string())),
        }
    }
}

/// Returns the scale active on the calling thread.
#[inline]
pub fn get_scale() -> Scale {
    CURRENT.with(Cell::get)
}

/// Makes `scale` current until the returned guard is dropped.
#[must_use = "the scale is restored as soon as the guard is dropped"]
pub fn set_scale(scale: Scale) -> ScaleGuard {
    let previous = CURRENT.with(|c| c.replace(scale));
    trace!(%scale, %previous, "scale::set");
    ScaleGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Runs `f` with `scale` current and restores the previous scale afterwards.
///
/// ```rust
/// use dcdm_core::{get_scale, with_scale, Scale};
///
/// let factor = with_scale(Scale::Hundred, || get_scale().factor());
/// assert_eq!(factor, 100.0);
/// assert_eq!(get_scale(), Scale::Reference);
/// ```
pub fn with_scale<R>(scale: Scale, f: impl FnOnce() -> R) -> R {
    let _guard = set_scale(scale);
    f()
}

/// Restores the previously active scale on drop.
///
/// Tied to the thread that created it.
#[derive(Debug)]
pub struct ScaleGuard {
    previous: Scale,
    _not_send: PhantomData<*const ()>,
}

impl ScaleGuard {
    /// Scale that becomes current again when this guard drops.
    #[inline]
    pub fn previous(&self) -> Scale {
        self.previous
    }
}

impl Drop for ScaleGuard {
    fn drop(&mut self) {
        CURRENT.with(|c| c.set(self.previous));
        trace!(restored = %self.previous, "scale::restore");
    }
}
