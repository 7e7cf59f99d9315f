//! Error types for selector construction.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors raised while appending fragments to a [`SelectorExpression`](crate::SelectorExpression).
///
/// Every variant is a construction-time mistake by the caller. The expression
/// that produced the error is consumed by the failed call, so construction has
/// to start over from a fresh expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A fragment was appended after a fragment of a higher rank.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The fragment that was rejected.
        fragment: FragmentKind,
        /// Rank of the most recently appended fragment.
        last_rank: u8,
    },

    /// Element, id or pseudo-element was set a second time.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    Duplicate(FragmentKind),

    /// A fragment was appended to an expression already combined from two others.
    #[error("Fragments cannot be appended to a combined selector")]
    Combined(FragmentKind),
}

/// The single error kind surfaced by selector construction.
pub type OrderOrCardinalityError = SelectorError;

pub type Result<T> = std::result::Result<T, SelectorError>;
