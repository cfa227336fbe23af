pub mod coef;
#[cfg(feature = "rand")]
pub mod random;
pub mod seed_derive;
pub mod ustr;

/// Emits a diagnostic event when the `verbose` feature is enabled.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        tracing::debug!($($arg)*);
    };
}

pub(crate) use verbose;
