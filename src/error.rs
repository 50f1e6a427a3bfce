//! Error types shared by every container in the crate.
//!
//! All bounds and state checks run before any mutation, so a call that
//! returns an error leaves the structure exactly as it was. Nothing here is
//! retried or recovered internally; every failure is surfaced synchronously
//! to the caller.
//!
//! The access bound (`0 <= index < len`) and the insertion bound
//! (`0 <= index <= len`) are deliberately distinct variants: an index equal
//! to the length is a valid insertion point but never a valid element.

use thiserror::Error;

/// Errors produced by the containers in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An element access used an index outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// An insertion used an index outside `0..=len`.
    ///
    /// Inserting at `len` is the tail-append case and is valid; anything
    /// beyond it is not.
    #[error("insertion index {index} out of bounds for length {len}")]
    InsertOutOfBounds {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// A range operation violated `0 <= from <= to <= len`.
    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfBounds {
        /// Inclusive start of the requested window.
        from: usize,
        /// Exclusive end of the requested window.
        to: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// A front/back/pop/peek call was made on a zero-size structure.
    #[error("the container is empty")]
    Empty,

    /// A cursor was asked to step past the end of the list in either
    /// direction.
    #[error("no element remains in that direction")]
    NoSuchElement,

    /// A cursor `remove` or `set` was not immediately preceded by a fresh
    /// `next`/`previous`, or followed an `add`.
    #[error("cursor mutation requires a fresh call to next() or previous()")]
    InvalidCursorState,

    /// A forward index-of lookup did not find the requested value.
    ///
    /// Only the forward lookup fails loudly; the backward lookup reports
    /// absence as `None`.
    #[error("value not found")]
    NotFound,
}

/// A `Result` alias using this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
