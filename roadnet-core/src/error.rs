//! Error types for the roadnet core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while building road graphs or running the engines.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RoadNetError {
    /// A road connects an endpoint to itself.
    #[error("road {id} connects `{endpoint}` to itself")]
    SelfLoop {
        /// Identifier of the offending road.
        id: i64,
        /// The endpoint named at both ends of the road.
        endpoint: Arc<str>,
    },
    /// Two roads in the same input share an identifier.
    #[error("road id {id} appears more than once")]
    DuplicateRoadId {
        /// The repeated identifier.
        id: i64,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("road network invariant violated: {invariant} (endpoint `{endpoint}`)")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The endpoint being processed when the violation was detected.
        endpoint: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`RoadNetError`] variants.
    enum RoadNetErrorCode for RoadNetError {
        /// A road connects an endpoint to itself.
        SelfLoop => SelfLoop { .. } => "ROADNET_SELF_LOOP",
        /// Two roads in the same input share an identifier.
        DuplicateRoadId => DuplicateRoadId { .. } => "ROADNET_DUPLICATE_ROAD_ID",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "ROADNET_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, RoadNetError>;
