//! Constants used across the broadcast protocol implementation.
//!
//! This module defines the fixed frame geometry, markers, and pass keys shared
//! by the HF and Deli16 frame builders.
//!
//! Every value here is part of the wire contract with the device-side decoder.
//! The light gives no feedback of any kind, so a wrong constant does not fail
//! loudly; the frames simply stop being accepted. Treat all of these as
//! protocol data, not tunables.

/// Length (in bytes) of every finished broadcast frame.
///
/// Both the HF and the Deli16 format produce exactly this many bytes,
/// regardless of command. The frames are raw BLE advertisement payloads and
/// fit within the 31-byte legacy advertising data limit.
pub const FRAME_LEN: usize = 26;

/// Length (in bytes) of the HF frame's inner core, before the ASCII prefix
/// and fixed suffix are attached.
pub const HF_CORE_LEN: usize = 16;

/// ASCII prefix prepended to the obfuscated HF core.
pub const HF_PREFIX: [u8; 4] = *b"HFKJ";

/// Fixed suffix appended after the HF core.
pub const HF_SUFFIX: [u8; 6] = [0x10, 0x11, 0x12, 0x13, 0x14, 0x15];

/// Marker written over the parameter bytes of an HF core when pairing.
///
/// The pair command carries no parameter; the device recognizes this fixed
/// three-byte pattern instead, and the parameter-region obfuscation pass is
/// skipped entirely for it.
pub const HF_PAIR_MARKER: [u8; 3] = [0xaa, 0x66, 0x55];

/// Substitution key for the HF parameter-region obfuscation pass
/// (bytes 9..14 of the core).
pub const HF_PARAM_KEY: u8 = 0xaa;

/// Substitution key for the final whole-core HF obfuscation pass.
pub const HF_CORE_KEY: u8 = 86;

/// Length (in bytes) of the Deli16 builder's scratch buffer.
///
/// Only the last 16 bytes of the scratch survive into the finished frame; the
/// leading zeros are still whitened so the outer pass reaches the payload
/// with the key state the device expects.
pub const DELI16_SCRATCH_LEN: usize = 29;

/// Marker bytes at scratch offsets 13..16 of a Deli16 frame
/// (stored bit-reversed on the wire).
pub const DELI16_MARKER: [u8; 3] = [0x71, 0x0f, 0x55];

/// Prefix fed into the reflected CRC ahead of the Deli16 payload, and also
/// embedded (bit-reversed) at scratch offsets 16..19.
pub const DELI16_CRC_PREFIX: [u8; 3] = [0xcc, 0x55, 0xaa];

/// Whitening key for the inner Deli16 pass over scratch bytes 16..29.
pub const DELI16_INNER_KEY: u8 = 63;

/// Whitening key for the outer Deli16 pass over the whole scratch buffer.
pub const DELI16_OUTER_KEY: u8 = 37;

/// Page byte carried in both frame formats.
///
/// The receiver accepts commands on page 3 only; the value is fixed for every
/// command this crate encodes.
pub const PAGE: u8 = 3;

/// Smallest encodable brightness / color-temperature parameter.
pub const PARAM_MIN: u16 = 1;

/// Largest encodable brightness / color-temperature parameter.
pub const PARAM_MAX: u16 = 1000;
