//! Default values and functions for configuration

/// Upper bound accepted for the evaluation cutoff
pub(crate) const MAX_K: usize = 100_000;

pub(crate) fn default_k() -> usize {
    10
}
