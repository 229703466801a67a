use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

macro_rules! record_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub i64);

            impl $name {
                /// Select inputs use `0` for "nothing chosen".
                pub fn is_set(self) -> bool {
                    self.0 != 0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = ParseIntError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    s.parse().map(Self)
                }
            }
        )*
    };
}

record_id! {
    EmployeeId,
    PositionId,
    ShiftId,
    /// The remote API calls locations "customers".
    LocationId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_route_segments() {
        let id: EmployeeId = "42".parse().unwrap();
        assert_eq!(id, EmployeeId(42));
        assert_eq!(id.to_string(), "42");
        assert!("forty-two".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn zero_means_unset() {
        assert!(!PositionId::default().is_set());
        assert!(PositionId(3).is_set());
    }

    #[test]
    fn ids_are_plain_numbers_on_the_wire() {
        assert_eq!(serde_json::to_string(&ShiftId(7)).unwrap(), "7");
        let id: LocationId = serde_json::from_str("12").unwrap();
        assert_eq!(id, LocationId(12));
    }
}
