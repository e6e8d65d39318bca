//! Forecast horizon value object.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Number of future days over which demand is projected.
///
/// The enclosing tool offers a small fixed menu (30/60/90), but any positive
/// number of days is a valid horizon at this level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horizon(u32);

impl Horizon {
    pub fn new(days: u32) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::validation("horizon must be at least one day"));
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Horizon {}

impl core::fmt::Display for Horizon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
