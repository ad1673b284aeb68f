//! CCITT CRC16 in the two modes the frame builders need.
//!
//! Both frame formats integrity-check with the same bit-at-a-time CCITT
//! engine (polynomial `0x1021`, MSB first, no table):
//!
//! - The HF format runs it forward over the first 13 core bytes, seeded
//!   with zero.
//! - The Deli16 format seeds it with `0xffff`, feeds a fixed prefix as-is
//!   followed by bit-reversed payload bytes, then inverts and bit/byte
//!   reverses the result, an X-25 style reflected CRC expressed through the
//!   forward engine.
//!
//! The window arguments deliberately tolerate out-of-range requests: the loop
//! stops at the end of the buffer instead of failing, so a frame-layout edit
//! that shrinks a buffer cannot turn the checksum step into a panic.

/// CCITT generator polynomial, MSB-first form.
const POLY: u16 = 0x1021;

/// Computes the CCITT CRC16 over `length` bytes of `data` starting at
/// `start`, beginning from `initial`.
///
/// Each byte is XOR-ed into the high byte of the accumulator, followed by
/// eight shift-and-conditional-XOR steps. A window reaching past the end of
/// `data` is silently truncated at the buffer boundary.
pub fn crc16(data: &[u8], start: usize, length: usize, initial: u16) -> u16 {
    let mut crc = initial;
    for &byte in data.iter().skip(start).take(length) {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Continues a CRC over `data` with every byte bit-reversed before it enters
/// the engine.
///
/// This is the input half of the Deli16 reflected mode; the prefix bytes are
/// fed through [`crc16`] unreversed first, then the payload goes through
/// here.
pub fn crc16_reflected(data: &[u8], initial: u16) -> u16 {
    let mut crc = initial;
    for &byte in data {
        crc = crc16(&[byte.reverse_bits()], 0, 1, crc);
    }
    crc
}

/// Finishes a Deli16 reflected CRC: inverts the accumulator, then
/// bit-reverses each half and swaps them.
pub fn finalize_reflected(crc: u16) -> u16 {
    let inverted = crc ^ 0xffff;
    let lo = (inverted & 0x00ff) as u8;
    let hi = (inverted >> 8) as u8;
    u16::from(lo.reverse_bits()) << 8 | u16::from(hi.reverse_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DELI16_CRC_PREFIX;

    /// LSB-first X-25 implementation (reversed polynomial, init and xorout
    /// `0xffff`), written independently of the MSB-first engine above.
    fn crc16_x25(data: &[u8]) -> u16 {
        let mut crc: u16 = 0xffff;
        for &byte in data {
            crc ^= u16::from(byte);
            for _ in 0..8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ 0x8408 } else { crc >> 1 };
            }
        }
        crc ^ 0xffff
    }

    #[test]
    fn ccitt_check_value() {
        // CRC-16/XMODEM catalog check value.
        assert_eq!(crc16(b"123456789", 0, 9, 0), 0x31c3);
    }

    #[test]
    fn window_truncates_at_buffer_end() {
        let data = [0x12, 0x34, 0x56];
        assert_eq!(crc16(&data, 1, 100, 0), crc16(&data, 1, 2, 0));
        // A window entirely past the end processes nothing.
        assert_eq!(crc16(&data, 3, 4, 0x55aa), 0x55aa);
        assert_eq!(crc16(&data, 0, 0, 0x1234), 0x1234);
    }

    #[test]
    fn x25_reference_check_value() {
        // CRC-16/X-25 catalog check value, pinning the reference itself.
        assert_eq!(crc16_x25(b"123456789"), 0x906e);
    }

    #[test]
    fn reflected_mode_matches_x25() {
        // Feeding the MSB-first engine bit-reversed payload bytes and
        // reflecting the result is the same as an X-25 CRC over the
        // bit-reversed prefix followed by the payload as-is.
        for payload in [[0u8; 8], [1, 2, 3, 4, 5, 6, 7, 8], [0xff; 8]] {
            let crc = crc16(&DELI16_CRC_PREFIX, 0, DELI16_CRC_PREFIX.len(), 0xffff);
            let crc = finalize_reflected(crc16_reflected(&payload, crc));

            let mut reference_input = [0u8; 11];
            for (slot, &byte) in reference_input.iter_mut().zip(DELI16_CRC_PREFIX.iter()) {
                *slot = byte.reverse_bits();
            }
            reference_input[3..].copy_from_slice(&payload);
            assert_eq!(crc, crc16_x25(&reference_input));
        }
    }
}
