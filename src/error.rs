//! Crate error type.
//!
//! Frame encoding itself cannot fail: every builder is a total function
//! over fixed-size buffers. The fallible surface is limited to conversions
//! from untrusted inputs, raw numeric command ids and identity byte slices.

use thiserror::Error;

/// Errors returned by the fallible conversions in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Error {
    /// A numeric command id matched none of the known commands.
    #[error("unrecognized command id {0}")]
    UnknownCommand(u8),

    /// A device identity slice was not exactly five bytes long.
    #[error("device identity needs 5 bytes, got {0}")]
    InvalidIdentity(usize),
}
