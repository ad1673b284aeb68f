//! Fixed-key block transform and the keyed substitution pass built on it.
//!
//! The device derives a 16-byte substitution table by running a TEA-style
//! 32-round block transform over the two halves of a fixed seed, then mixes
//! frame bytes with that table: each byte in the requested window is XOR-ed
//! with a mask picked by the byte at `start + 1`, then bumped by a
//! position-keyed table entry. The scheme is obfuscation, not cryptography —
//! key and seed are constants baked into every device.
//!
//! The table is cheap to rebuild and is recomputed on every pass; no state is
//! cached between calls.

/// 16-character key feeding the block transform.
const BLOCK_KEY: [u8; 16] = *b"!hIflIngCypcal@#";

/// Seed constant whose two encrypted halves form the substitution table.
const TABLE_SEED: [u8; 16] = [
    0x52, 0xea, 0x73, 0xff, 0x49, 0x60, 0xbf, 0x56, 0x42, 0x05, 0x07, 0xe8, 0xd3, 0xa7, 0xb9, 0x9d,
];

const DELTA: u32 = 0x9e37_79b9;
const SUM_INIT: u32 = 0xc6ef_3720;

/// Runs the 32-round block transform over one 8-byte block.
///
/// Words are loaded and stored little-endian; all arithmetic is modulo 2³².
pub fn encrypt_block(block: &[u8; 8]) -> [u8; 8] {
    let mut v0 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
    let mut v1 = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let k0 = u32::from_le_bytes([BLOCK_KEY[0], BLOCK_KEY[1], BLOCK_KEY[2], BLOCK_KEY[3]]);
    let k1 = u32::from_le_bytes([BLOCK_KEY[4], BLOCK_KEY[5], BLOCK_KEY[6], BLOCK_KEY[7]]);
    let k2 = u32::from_le_bytes([BLOCK_KEY[8], BLOCK_KEY[9], BLOCK_KEY[10], BLOCK_KEY[11]]);
    let k3 = u32::from_le_bytes([BLOCK_KEY[12], BLOCK_KEY[13], BLOCK_KEY[14], BLOCK_KEY[15]]);

    let mut sum = SUM_INIT;
    for _ in 0..32 {
        v1 = v1.wrapping_sub(
            (v0 << 4).wrapping_add(k2) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k3),
        );
        v0 = v0.wrapping_sub(
            (v1 << 4).wrapping_add(k0) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k1),
        );
        sum = sum.wrapping_sub(DELTA);
    }

    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&v0.to_le_bytes());
    out[4..].copy_from_slice(&v1.to_le_bytes());
    out
}

/// Derives the 16-byte substitution table from the seed constant.
///
/// The first and second halves of the seed are encrypted separately and
/// concatenated. The result is the same on every call.
pub fn derive_table() -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut half = [0u8; 8];

    half.copy_from_slice(&TABLE_SEED[..8]);
    table[..8].copy_from_slice(&encrypt_block(&half));
    half.copy_from_slice(&TABLE_SEED[8..]);
    table[8..].copy_from_slice(&encrypt_block(&half));
    table
}

/// Applies the keyed substitution pass to `length` bytes of `data` starting
/// at `start`.
///
/// The byte at `start + 1` selects the XOR mask: its low nibble indexes into
/// the high nibble, and the resulting table entry is XOR-ed into every byte
/// of the window before a `(position + key) & 0xf` table entry is added
/// modulo 256.
///
/// The whole pass is a no-op when `start + 1` falls outside the buffer, and
/// individual positions past the end are skipped rather than failing; the
/// window arguments are trusted the same way the CRC window is.
pub fn obfuscate(data: &mut [u8], start: usize, length: usize, key: u8) {
    let table = derive_table();

    let Some(&seed) = data.get(start + 1) else {
        return;
    };
    let index = seed & 0x0f;
    let mask = table[usize::from(((seed >> 4) & 0x0f) ^ index)];

    for offset in 0..length {
        let Some(slot) = data.get_mut(start + offset) else {
            continue;
        };
        let mixed = *slot ^ mask;
        *slot = mixed.wrapping_add(table[(offset + usize::from(key)) & 0x0f]);
    }
}
