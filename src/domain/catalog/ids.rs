//! Strongly-typed identifier for catalog items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Upstream-assigned identifier of a catalog item.
///
/// Always positive; the upstream never hands out id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU32);

impl ItemId {
    /// Creates an ItemId, returning `None` for 0.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the raw numeric id.
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<NonZeroU32>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_an_item_id() {
        assert!(ItemId::new(0).is_none());
        assert!("0".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let id: ItemId = "25".parse().unwrap();
        assert_eq!(id.get(), 25);
        assert_eq!(id.to_string(), "25");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let id = ItemId::new(6).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "6");
        let back: ItemId = serde_json::from_str("6").unwrap();
        assert_eq!(back, id);
    }
}
