//! HF and Deli16 frame builders.
//!
//! Every command is broadcast twice, in two structurally unrelated 26-byte
//! renditions, so lights running either decoder generation respond to the
//! same transmitter:
//!
//! - **HF**: a 16-byte core (marker, nonce, counter, identity, control code,
//!   page, parameter block, CRC16) run through the keyed substitution pass
//!   from [`crate::cipher`], once over the parameter region and once over the
//!   whole core, then framed by the ASCII `HFKJ` prefix and a fixed suffix.
//! - **Deli16**: an 8-byte XOR-cascade payload plus a reflected CRC16, laid
//!   out in a 29-byte scratch buffer, whitened twice with different keys
//!   ([`crate::whitening`]), and reduced to 16 payload bytes followed by a
//!   fixed ascending filler tail.
//!
//! Both builders are pure functions; the HF nonce byte is an explicit
//! argument so the caller decides where randomness comes from.
//!
//! Pass order is load-bearing everywhere: parameter obfuscation before the
//! CRC, the CRC before the whole-core pass, and the inner whitening pass
//! before the outer one. The device decoder reverses these steps in exactly
//! that order.

#[cfg(not(feature = "std"))]
use heapless::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::cipher;
use crate::command::Command;
#[cfg(not(feature = "std"))]
use crate::consts::FRAME_LEN;
use crate::consts::{
    DELI16_CRC_PREFIX, DELI16_INNER_KEY, DELI16_MARKER, DELI16_OUTER_KEY, DELI16_SCRATCH_LEN,
    HF_CORE_KEY, HF_CORE_LEN, HF_PAIR_MARKER, HF_PARAM_KEY, HF_PREFIX, HF_SUFFIX,
};
use crate::crc::{crc16, crc16_reflected, finalize_reflected};
use crate::identity::DeviceIdentity;
use crate::whitening::whiten;

/// A finished broadcast frame, ready to hand to the radio layer as raw
/// advertisement data.
#[cfg(feature = "std")]
pub type Frame = Vec<u8>;

/// A finished broadcast frame, ready to hand to the radio layer as raw
/// advertisement data.
#[cfg(not(feature = "std"))]
pub type Frame = Vec<u8, FRAME_LEN>;

/// Builds the HF core up to and including the CRC field, before the final
/// whole-core obfuscation pass.
pub(crate) fn hf_core(
    identity: &DeviceIdentity,
    page: u8,
    counter: u16,
    ctrl_code: i8,
    params: &[u8; 3],
    nonce: u8,
) -> [u8; HF_CORE_LEN] {
    let id = identity.bytes();
    let counter_lo = counter as u8;

    let mut core = [0u8; HF_CORE_LEN];
    core[0] = 0xff;
    core[1] = nonce;
    core[2] = counter_lo;
    core[3] = id[0];
    core[4] = id[1] & 0xf0;
    core[7] = ctrl_code as u8;
    core[8] = page;
    core[9] = 0xff;
    core[10] = counter_lo;
    core[11] = params[0];
    core[12] = params[1];
    core[13] = params[2];

    if ctrl_code == Command::Pair.ctrl_code() {
        // Pairing carries no parameter; the receiver matches this marker
        // instead, and the parameter region stays clear of the pass below.
        core[11..14].copy_from_slice(&HF_PAIR_MARKER);
    } else {
        cipher::obfuscate(&mut core, 9, 5, HF_PARAM_KEY);
    }

    let crc = crc16(&core, 0, 13, 0);
    core[14] = crc as u8;
    core[15] = (crc >> 8) as u8;
    core
}

/// Builds the HF rendition of a command.
///
/// `nonce` becomes core byte 1 and seeds the mask of the final obfuscation
/// pass, so frames for the same command normally differ on the air; a fixed
/// nonce makes the output fully deterministic.
pub fn hf_frame(
    identity: &DeviceIdentity,
    page: u8,
    counter: u16,
    ctrl_code: i8,
    params: &[u8; 3],
    nonce: u8,
) -> Frame {
    let mut core = hf_core(identity, page, counter, ctrl_code, params, nonce);
    cipher::obfuscate(&mut core, 0, HF_CORE_LEN, HF_CORE_KEY);

    let mut frame = Frame::new();
    let _ = frame.extend_from_slice(&HF_PREFIX);
    let _ = frame.extend_from_slice(&core);
    let _ = frame.extend_from_slice(&HF_SUFFIX);
    frame
}

/// Builds the Deli16 rendition of a command.
pub fn deli16_frame(
    identity: &DeviceIdentity,
    page: u8,
    counter: u16,
    ctrl_code: i8,
    params: &[u8; 3],
) -> Frame {
    let id = identity.bytes();
    let counter_lo = counter as u8;

    // XOR cascade; `mixed` threads the parameter low byte and counter
    // through the last five positions.
    let mut data = [0u8; 8];
    data[7] = params[0] ^ counter_lo;
    data[6] = params[2] ^ id[0];
    data[5] = id[1] ^ params[2] ^ counter_lo;

    let mixed = params[2] ^ counter_lo;
    data[4] = mixed ^ (ctrl_code as u8);
    data[3] = mixed ^ params[1];
    data[2] = page ^ mixed;
    data[1] = mixed ^ params[0];
    data[0] = mixed ^ id[0];

    // The CRC sees the prefix as-is and the payload bit-reversed.
    let crc = crc16(&DELI16_CRC_PREFIX, 0, DELI16_CRC_PREFIX.len(), 0xffff);
    let crc = finalize_reflected(crc16_reflected(&data, crc));

    let mut scratch = [0u8; DELI16_SCRATCH_LEN];
    scratch[13..16].copy_from_slice(&DELI16_MARKER);
    scratch[16..19].copy_from_slice(&DELI16_CRC_PREFIX);
    scratch[19..27].copy_from_slice(&data);
    for slot in &mut scratch[13..19] {
        *slot = slot.reverse_bits();
    }
    scratch[27] = crc as u8;
    scratch[28] = (crc >> 8) as u8;

    // Inner pass first; the outer pass must run over the already-whitened
    // tail.
    whiten(&mut scratch[16..], 13, DELI16_INNER_KEY);
    whiten(&mut scratch, DELI16_SCRATCH_LEN, DELI16_OUTER_KEY);

    let mut frame = Frame::new();
    let _ = frame.extend_from_slice(&scratch[13..]);
    for filler in 16..26u8 {
        let _ = frame.push(filler);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRAME_LEN, PAGE};

    fn identity() -> DeviceIdentity {
        DeviceIdentity::new([0x11, 0x22, 0x33, 0x44, 0x55])
    }

    #[test]
    fn hf_frame_has_fixed_framing() {
        let frame = hf_frame(&identity(), PAGE, 1, Command::On.ctrl_code(), &[0, 0, 0], 0x42);
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(frame[..4], HF_PREFIX);
        assert_eq!(frame[20..], HF_SUFFIX);
    }

    #[test]
    fn hf_core_crc_covers_the_first_13_bytes() {
        let core = hf_core(
            &identity(),
            PAGE,
            7,
            Command::SetBrightness.ctrl_code(),
            &[0, 0x01, 0xf4],
            0x42,
        );
        let crc = crc16(&core, 0, 13, 0);
        assert_eq!(core[14], crc as u8);
        assert_eq!(core[15], (crc >> 8) as u8);
    }

    #[test]
    fn pair_core_carries_the_fixed_marker() {
        let core = hf_core(&identity(), PAGE, 1, Command::Pair.ctrl_code(), &[0, 0, 0], 0);
        assert_eq!(core[11..14], HF_PAIR_MARKER);
    }

    #[test]
    fn pair_frames_ignore_the_parameter_block() {
        // The marker overwrites the parameter bytes and the parameter-region
        // pass is skipped, so the block must not leak into the frame.
        let a = hf_frame(&identity(), PAGE, 1, Command::Pair.ctrl_code(), &[0, 0, 0], 9);
        let b = hf_frame(&identity(), PAGE, 1, Command::Pair.ctrl_code(), &[9, 9, 9], 9);
        assert_eq!(a, b);
    }

    #[test]
    fn frames_are_deterministic_for_a_fixed_nonce() {
        let code = Command::SetColorTemperature.ctrl_code();
        let a = hf_frame(&identity(), PAGE, 500, code, &[0, 2, 0x30], 0x77);
        let b = hf_frame(&identity(), PAGE, 500, code, &[0, 2, 0x30], 0x77);
        assert_eq!(a, b);

        let a = deli16_frame(&identity(), PAGE, 500, code, &[0, 2, 0x30]);
        let b = deli16_frame(&identity(), PAGE, 500, code, &[0, 2, 0x30]);
        assert_eq!(a, b);
    }

    #[test]
    fn deli16_frame_has_fixed_framing() {
        let frame = deli16_frame(&identity(), PAGE, 1, Command::On.ctrl_code(), &[0, 0, 0]);
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(frame[16..], [16, 17, 18, 19, 20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn deli16_frame_depends_on_the_counter() {
        let code = Command::Off.ctrl_code();
        let a = deli16_frame(&identity(), PAGE, 1, code, &[0, 0, 0]);
        let b = deli16_frame(&identity(), PAGE, 2, code, &[0, 0, 0]);
        assert_ne!(a, b);
    }
}
