//! # hiflying-ble
//!
//! A portable, no_std frame encoder for HiFlying BLE-advertisement smart
//! lights, the ceiling and panel lamps driven by "HF"-era remote apps.
//!
//! These lights never accept a connection. Control is strictly one-way: the
//! transmitter broadcasts obfuscated advertisement payloads, and a light
//! paired to the transmitter's identity acts on the frames it can decode.
//! There is no acknowledgment of any kind.
//!
//! Every command is emitted in two structurally unrelated 26-byte wire
//! formats, covering both receiver firmware generations:
//! - **HF**: keyed substitution obfuscation (a table derived from a fixed
//!   key by a TEA-style block transform) plus a forward CCITT CRC16.
//! - **Deli16**: a reflected CRC16 plus a rotating-key whitening transform.
//!
//! This crate builds those byte sequences and nothing else. Starting and
//! stopping the advertisement, transmit timing, and persisting the rolling
//! counter across restarts are left to the integration.
//!
//! ## Crate features
//! | Feature     | Description |
//! |-------------|-------------|
//! | `std`       | Disables `#![no_std]` support and replaces `heapless::Vec`s with
//! `std::vec::Vec`s |
//! | `defmt-0-3` | Derives `defmt::Format` on the public types |
//! | `log`       | Emits `log` records from the driver |
//!
//! ## Usage
//!
//! The pure entry point takes every input explicitly:
//!
//! ```rust
//! use hiflying_ble::command::{self, Command};
//! use hiflying_ble::identity::DeviceIdentity;
//!
//! let identity = DeviceIdentity::new([0x24, 0x6f, 0x28, 0x01, 0x02]);
//! let frames = command::encode(Command::On, 0, &identity, 1, 0x5a);
//! assert_eq!(frames.hf.len(), 26);
//! assert_eq!(frames.deli16.len(), 26);
//! ```
//!
//! Or let the [`driver`] keep the counter and source the nonce:
//!
//! ```rust
//! use hiflying_ble::driver::HiFlyingDriver;
//! use hiflying_ble::identity::DeviceIdentity;
//! use rand::rngs::mock::StepRng;
//!
//! let identity = DeviceIdentity::from_mac(&[0x24, 0x6f, 0x28, 0x01, 0x02, 0x03], 1);
//! let mut driver = HiFlyingDriver::new(identity, StepRng::new(1, 1));
//! let frames = driver.turn_on();
//! # assert_eq!(frames.hf.len(), 26);
//! ```
//!
//! ## Integration notes
//!
//! - Broadcast both frames of a pair back-to-back as raw advertisement data
//!   (non-connectable undirected advertising); repeat the pair a few times
//!   with a short interval — the link is lossy and open-loop.
//! - Reload a persisted counter with
//!   [`set_counter`](driver::HiFlyingDriver::set_counter) after a restart so
//!   the light keeps accepting commands.
//! - The obfuscation layers match the device-side decoder bit for bit. A
//!   frame the light cannot decode is silently ignored; nothing here is
//!   cryptography, only obfuscation.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
pub use heapless;

pub mod cipher;
pub mod command;
pub mod consts;
pub mod crc;
pub mod driver;
pub mod error;
pub mod frame;
pub mod identity;
pub mod mapping;
pub mod whitening;
