//! Core Zone trait for access-controlled zones.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for zone identifiers.
///
/// A zone is the unit of access control: each zone is granted by exactly
/// one full authentication sequence. Zones label the accepting states of
/// the automaton.
///
/// # Example
///
/// ```rust
/// use zonegate::core::Zone;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum BuildingZone {
///     Lobby,
///     ServerRoom,
/// }
///
/// impl Zone for BuildingZone {
///     fn id(&self) -> &str {
///         match self {
///             Self::Lobby => "Lobby",
///             Self::ServerRoom => "ServerRoom",
///         }
///     }
/// }
/// ```
pub trait Zone: Clone + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Get the zone's identifier for display/logging.
    fn id(&self) -> &str;
}

/// Dynamically keyed deployments can use plain strings as zone ids.
impl Zone for String {
    fn id(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestZone {
        Lobby,
        Lab,
    }

    impl Zone for TestZone {
        fn id(&self) -> &str {
            match self {
                Self::Lobby => "Lobby",
                Self::Lab => "Lab",
            }
        }
    }

    #[test]
    fn id_returns_correct_value() {
        assert_eq!(TestZone::Lobby.id(), "Lobby");
        assert_eq!(TestZone::Lab.id(), "Lab");
    }

    #[test]
    fn string_zones_are_their_own_id() {
        let zone = String::from("SR");
        assert_eq!(zone.id(), "SR");
    }

    #[test]
    fn zone_serializes_correctly() {
        let zone = TestZone::Lab;
        let json = serde_json::to_string(&zone).unwrap();
        let deserialized: TestZone = serde_json::from_str(&json).unwrap();
        assert_eq!(zone, deserialized);
    }
}
