//! Error types.
//!
//! Normal cache traffic never produces an error: a miss is `None`, and a
//! non-positive capacity quietly yields a disabled cache. The two types here
//! cover the remaining cases.
//!
//! - [`InvariantError`]: returned by
//!   [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants)
//!   when the cache's internal structures disagree with each other.
//! - [`ConfigError`]: returned by
//!   [`LfuCacheBuilder::try_build`](crate::builder::LfuCacheBuilder::try_build)
//!   when strict validation is switched on and the configuration is rejected.
//!
//! ```
//! use freqcache::builder::LfuCacheBuilder;
//! use freqcache::error::ConfigError;
//!
//! let err = LfuCacheBuilder::new(0)
//!     .require_positive_capacity(true)
//!     .try_build::<u64, u64>()
//!     .unwrap_err();
//! assert_eq!(err, ConfigError::NonPositiveCapacity { requested: 0 });
//! assert!(err.to_string().contains("capacity"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Internal structures of a cache disagree with each other.
///
/// Carries a description of the first broken invariant found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache invariant violated: {}", self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// A cache configuration rejected under strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested capacity was zero or negative.
    NonPositiveCapacity { requested: i64 },
    /// The requested capacity exceeds the number of slots the entry arena
    /// can address.
    CapacityTooLarge { requested: i64, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveCapacity { requested } => {
                write!(f, "capacity must be > 0, got {requested}")
            },
            ConfigError::CapacityTooLarge { requested, max } => {
                write!(f, "capacity must be <= {max}, got {requested}")
            },
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_prefixes_message() {
        let err = InvariantError::new("min_freq bucket is empty");
        assert_eq!(
            err.to_string(),
            "cache invariant violated: min_freq bucket is empty"
        );
        assert_eq!(err.message(), "min_freq bucket is empty");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn config_display_names_the_field() {
        let err = ConfigError::NonPositiveCapacity { requested: -3 };
        assert_eq!(err.to_string(), "capacity must be > 0, got -3");

        let err = ConfigError::CapacityTooLarge {
            requested: 1 << 40,
            max: 4_294_967_295,
        };
        assert_eq!(
            err.to_string(),
            "capacity must be <= 4294967295, got 1099511627776"
        );
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<InvariantError>();
        assert_error::<ConfigError>();
    }
}
