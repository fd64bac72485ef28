//! Stock locations.

use std::fmt;

use continental_shared::types::LocationId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Kind of a stock location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// Internal location physically holding stock.
    Storage,
    /// Warehouse grouping storage locations.
    Warehouse,
    /// Virtual location stock comes from when bought.
    Supplier,
    /// Virtual location stock goes to when sold.
    Customer,
    /// Virtual location of production consumption and output.
    Production,
    /// Virtual location of inventory gains and losses.
    LostFound,
    /// Grouping location, never holds stock.
    View,
}

impl LocationKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Warehouse => "warehouse",
            Self::Supplier => "supplier",
            Self::Customer => "customer",
            Self::Production => "production",
            Self::LostFound => "lost_found",
            Self::View => "view",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "storage" => Some(Self::Storage),
            "warehouse" => Some(Self::Warehouse),
            "supplier" => Some(Self::Supplier),
            "customer" => Some(Self::Customer),
            "production" => Some(Self::Production),
            "lost_found" => Some(Self::LostFound),
            "view" => Some(Self::View),
            _ => None,
        }
    }

    /// Returns true if stock received from this kind of location carries a
    /// purchase or production cost.
    #[must_use]
    pub fn is_priced_origin(&self) -> bool {
        matches!(self, Self::Supplier | Self::Production)
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stock location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Location name.
    pub name: String,
    /// Location kind.
    pub kind: LocationKind,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            kind,
        }
    }
}

/// Parses configured location kind names, skipping unknown ones.
#[must_use]
pub fn parse_kinds(names: &[String]) -> Vec<LocationKind> {
    names
        .iter()
        .filter_map(|name| {
            let kind = LocationKind::parse(name);
            if kind.is_none() {
                warn!(kind = %name, "ignoring unknown location kind");
            }
            kind
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips() {
        for kind in [
            LocationKind::Storage,
            LocationKind::Warehouse,
            LocationKind::Supplier,
            LocationKind::Customer,
            LocationKind::Production,
            LocationKind::LostFound,
            LocationKind::View,
        ] {
            assert_eq!(LocationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(LocationKind::parse("STORAGE"), Some(LocationKind::Storage));
        assert_eq!(LocationKind::parse("transit"), None);
    }

    #[test]
    fn test_priced_origins() {
        assert!(LocationKind::Supplier.is_priced_origin());
        assert!(LocationKind::Production.is_priced_origin());
        assert!(!LocationKind::LostFound.is_priced_origin());
        assert!(!LocationKind::Customer.is_priced_origin());
    }

    #[test]
    fn test_parse_kinds_skips_unknown() {
        let names = vec!["storage".to_string(), "transit".to_string(), "lost_found".to_string()];
        assert_eq!(
            parse_kinds(&names),
            vec![LocationKind::Storage, LocationKind::LostFound]
        );
    }
}
