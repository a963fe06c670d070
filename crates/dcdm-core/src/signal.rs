//! Shape-preserving element mapping over signal containers.
//!
//! A signal is a single sample or any nesting of fixed arrays and vectors of
//! samples. [`Signal::map_samples`] applies an element function to every
//! sample and rebuilds a container of the same shape, so the transfer
//! functions can be written once and called uniformly:
//!
//! ```rust
//! use dcdm_core::Signal;
//!
//! let doubled = [[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]].map_samples(|v| v * 2.0);
//! assert_eq!(doubled, [[2.0, 4.0, 6.0], [8.0, 10.0, 12.0]]);
//!
//! let codes = vec![0.25, 0.5].map_samples(|v| (v * 4.0) as u16);
//! assert_eq!(codes, vec![1, 2]);
//! ```
//!
//! Leaves are `f64` samples or `u16` codes only, so unsuffixed float and
//! integer literals inside a container resolve without annotations.
//! Arithmetic happens in `f64`; other stored types go through the flat
//! buffer helpers via [`Sample`] and [`FloatSample`].

/// A scalar sample that can enter the `f64` pipeline.
pub trait Sample: Copy {
    /// Widens the sample to `f64`.
    fn to_f64(self) -> f64;
}

/// A floating-point sample that can also be written back from `f64`.
pub trait FloatSample: Sample {
    /// Narrows an `f64` result into this sample type.
    fn from_f64(v: f64) -> Self;
}

/// Scalar or container of samples with a shape-preserving map.
pub trait Signal: Sized {
    /// Same shape as `Self` with every sample replaced by a `U`.
    type Mapped<U>;

    /// Applies `f` to each sample, keeping the container shape.
    fn map_samples<U, F: FnMut(f64) -> U>(self, f: F) -> Self::Mapped<U>;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_signal_leaf {
    ($($t:ty),*) => {$(
        impl Signal for $t {
            type Mapped<U> = U;

            #[inline]
            fn map_samples<U, F: FnMut(f64) -> U>(self, mut f: F) -> U {
                f(self.to_f64())
            }
        }
    )*};
}

impl_sample!(f64, f32, u16);
impl_signal_leaf!(f64, u16);

impl FloatSample for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl FloatSample for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl<S: Signal, const N: usize> Signal for [S; N] {
    type Mapped<U> = [S::Mapped<U>; N];

    #[inline]
    fn map_samples<U, F: FnMut(f64) -> U>(self, mut f: F) -> Self::Mapped<U> {
        self.map(|s| s.map_samples(&mut f))
    }
}

impl<S: Signal> Signal for Vec<S> {
    type Mapped<U> = Vec<S::Mapped<U>>;

    fn map_samples<U, F: FnMut(f64) -> U>(self, mut f: F) -> Self::Mapped<U> {
        self.into_iter().map(|s| s.map_samples(&mut f)).collect()
    }
}

impl<S: Signal + Copy> Signal for &[S] {
    type Mapped<U> = Vec<S::Mapped<U>>;

    fn map_samples<U, F: FnMut(f64) -> U>(self, mut f: F) -> Self::Mapped<U> {
        self.iter().map(|&s| s.map_samples(&mut f)).collect()
    }
}
