//! Error types for the kruskal core library.
//!
//! Each public error enum is paired with a `Copy` code enum whose string form
//! is stable, so logs and exit paths can report failures without matching on
//! message text.

use thiserror::Error;

/// Generates a code enum for an error enum together with `code()`,
/// `as_str()` and `Display`.
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
            /// Returns the stable machine-readable identifier for this code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!("Returns the stable [`", stringify!($CodeTy), "`] for this error.")]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Errors returned while computing a minimum spanning tree or forest.
///
/// Disconnected and empty graphs are not errors: they produce a forest with
/// more than one component or an empty forest respectively.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge endpoint lies outside `0..node_count`.
    #[error("edge {edge_index} references vertex {node}, but the graph has {node_count} vertices")]
    InvalidEdgeEndpoint {
        /// Position of the offending edge in the caller's list.
        edge_index: usize,
        /// The out-of-range endpoint.
        node: usize,
        /// Vertex count supplied by the caller.
        node_count: usize,
    },
    /// An edge weight cannot be ordered (NaN or an infinity).
    #[error("edge {edge_index} ({left}, {right}) has a non-finite weight")]
    InvalidWeight {
        /// Position of the offending edge in the caller's list.
        edge_index: usize,
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
    },
    /// Accepting an edge pushed the total weight outside the weight type.
    #[error("accepting edge {edge_index} overflows the total weight")]
    WeightOverflow {
        /// Position of the edge in the scanned slice: the caller's order for
        /// `kruskal_mst`, the sorted order for `kruskal_mst_in_place`.
        edge_index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge endpoint lies outside `0..node_count`.
        InvalidEdgeEndpoint => InvalidEdgeEndpoint { .. } => "MST_INVALID_EDGE_ENDPOINT",
        /// An edge weight cannot be ordered.
        InvalidWeight => InvalidWeight { .. } => "MST_INVALID_WEIGHT",
        /// The total weight does not fit the weight type.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}
