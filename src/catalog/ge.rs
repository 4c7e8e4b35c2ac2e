//! GE pool resolution and debt bookkeeping.

use tracing::warn;

use crate::error::CatalogError;

use super::GePoolResolver;

/// A GE pool with a fixed requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGePool {
    units: u32,
}

impl FixedGePool {
    pub fn new(units: u32) -> Self {
        Self { units }
    }
}

impl GePoolResolver for FixedGePool {
    fn required_ge_units(&self) -> Result<u32, CatalogError> {
        Ok(self.units)
    }
}

/// Asks the resolver for the GE requirement, falling back to `default` on
/// failure.
pub fn resolve_required_ge_units(resolver: &dyn GePoolResolver, default: u32) -> u32 {
    match resolver.required_ge_units() {
        Ok(units) => units,
        Err(err) => {
            warn!(error = %err, default, "GE pool lookup failed, using default requirement");
            default
        }
    }
}

/// Remaining GE units: requirement minus units done, never negative.
#[inline]
pub fn ge_debt(required: u32, done: u32) -> u32 {
    required.saturating_sub(done)
}
