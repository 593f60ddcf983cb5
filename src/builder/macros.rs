//! Macros for ergonomic signal and zone declarations.

/// Generate a Signal trait implementation for simple enums.
///
/// The variant name doubles as the signal code. Declaring more variants
/// than the alphabet admits is normal: the extra values model signals a
/// reader can physically present that no zone sequence uses.
///
/// # Example
///
/// ```
/// use zonegate::signal_enum;
/// use zonegate::core::Signal;
///
/// signal_enum! {
///     pub enum AuthSignal {
///         CD,
///         FP,
///         PN,
///     }
/// }
///
/// assert_eq!(AuthSignal::CD.code(), "CD");
/// ```
#[macro_export]
macro_rules! signal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Signal for $name {
            fn code(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a Zone trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use zonegate::zone_enum;
/// use zonegate::core::Zone;
///
/// zone_enum! {
///     pub enum BuildingZone {
///         LO,
///         SR,
///     }
/// }
///
/// assert_eq!(BuildingZone::SR.id(), "SR");
/// ```
#[macro_export]
macro_rules! zone_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Zone for $name {
            fn id(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Signal, Zone};

    signal_enum! {
        enum TestSignal {
            CD,
            FP,
            RT,
        }
    }

    zone_enum! {
        enum TestZone {
            LO,
            SR,
        }
    }

    #[test]
    fn signal_enum_macro_generates_trait() {
        assert_eq!(TestSignal::CD.code(), "CD");
        assert_eq!(TestSignal::FP.code(), "FP");
        assert_eq!(TestSignal::RT.code(), "RT");
    }

    #[test]
    fn zone_enum_macro_generates_trait() {
        assert_eq!(TestZone::LO.id(), "LO");
        assert_eq!(TestZone::SR.id(), "SR");
    }

    #[test]
    fn macro_enums_serialize_as_their_code() {
        let json = serde_json::to_string(&TestSignal::CD).unwrap();
        assert_eq!(json, "\"CD\"");
    }

    #[test]
    fn macros_support_visibility() {
        signal_enum! {
            pub enum PublicSignal {
                A,
                B,
            }
        }

        zone_enum! {
            pub enum PublicZone {
                X,
            }
        }

        assert_eq!(PublicSignal::A.code(), "A");
        assert_eq!(PublicZone::X.id(), "X");
    }
}
