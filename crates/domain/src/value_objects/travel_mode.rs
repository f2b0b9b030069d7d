//! Travel mode value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// How the user intends to travel
///
/// Each mode maps to exactly one routing profile of the directions service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Driving by car
    #[default]
    Car,
    /// Walking
    Walk,
    /// Cycling
    Bike,
}

impl TravelMode {
    /// All supported modes, in menu order
    pub const ALL: [Self; 3] = [Self::Car, Self::Walk, Self::Bike];

    /// Routing profile identifier used by the directions endpoint
    #[must_use]
    pub const fn profile(&self) -> &'static str {
        match self {
            Self::Car => "driving-car",
            Self::Walk => "foot-walking",
            Self::Bike => "cycling-regular",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Walk => "Walk",
            Self::Bike => "Bike",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" | "drive" | "driving" | "driving-car" => Ok(Self::Car),
            "walk" | "foot" | "walking" | "foot-walking" => Ok(Self::Walk),
            "bike" | "cycle" | "cycling" | "cycling-regular" => Ok(Self::Bike),
            _ => Err(DomainError::InvalidTravelMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_distinct() {
        assert_eq!(TravelMode::Car.profile(), "driving-car");
        assert_eq!(TravelMode::Walk.profile(), "foot-walking");
        assert_eq!(TravelMode::Bike.profile(), "cycling-regular");
    }

    #[test]
    fn test_from_str_labels() {
        assert_eq!("Car".parse::<TravelMode>().unwrap(), TravelMode::Car);
        assert_eq!("walk".parse::<TravelMode>().unwrap(), TravelMode::Walk);
        assert_eq!(" BIKE ".parse::<TravelMode>().unwrap(), TravelMode::Bike);
    }

    #[test]
    fn test_from_str_profiles() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.profile().parse::<TravelMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("plane".parse::<TravelMode>().is_err());
        assert!("".parse::<TravelMode>().is_err());
    }

    #[test]
    fn test_default_is_car() {
        assert_eq!(TravelMode::default(), TravelMode::Car);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TravelMode::Walk).unwrap(), "\"walk\"");
        let mode: TravelMode = serde_json::from_str("\"bike\"").unwrap();
        assert_eq!(mode, TravelMode::Bike);
    }

    #[test]
    fn test_display() {
        assert_eq!(TravelMode::Bike.to_string(), "Bike");
    }
}
