//! Command set and the encoding entry point.
//!
//! Each command maps to a fixed signed control code shared by both frame
//! formats, plus a numeric id for callers that start from raw integers (a
//! config file, a serial protocol). The mapping is compile-time data; nothing
//! registers commands at runtime.
//!
//! [`encode`] is the pure core of the crate: command in, both broadcast
//! frames out. Counter handling and nonce generation stay with the caller,
//! usually the [`crate::driver::HiFlyingDriver`] wrapper.

use crate::consts::{PAGE, PARAM_MAX, PARAM_MIN};
use crate::error::Error;
use crate::frame::{self, Frame};
use crate::identity::DeviceIdentity;

/// High-level commands the light understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Command {
    /// Bind the light to this transmitter's identity.
    Pair,
    /// Turn the light off.
    Off,
    /// Turn the light on.
    On,
    /// Set brightness; parameter range 1..=1000.
    SetBrightness,
    /// Set color temperature; parameter range 1..=1000, warm to cold.
    SetColorTemperature,
}

impl Command {
    /// Signed control code carried in both frame formats.
    pub const fn ctrl_code(self) -> i8 {
        match self {
            Command::Pair => -76,
            Command::Off => -78,
            Command::On => -77,
            Command::SetBrightness => -75,
            Command::SetColorTemperature => -73,
        }
    }

    /// Numeric command id.
    pub const fn id(self) -> u8 {
        match self {
            Command::Pair => 1,
            Command::Off => 2,
            Command::On => 3,
            Command::SetColorTemperature => 11,
            Command::SetBrightness => 12,
        }
    }

    /// Looks a command up by its numeric id.
    pub const fn from_id(id: u8) -> Result<Self, Error> {
        match id {
            1 => Ok(Command::Pair),
            2 => Ok(Command::Off),
            3 => Ok(Command::On),
            11 => Ok(Command::SetColorTemperature),
            12 => Ok(Command::SetBrightness),
            other => Err(Error::UnknownCommand(other)),
        }
    }

    /// Whether this command carries a level parameter.
    pub const fn takes_param(self) -> bool {
        matches!(self, Command::SetBrightness | Command::SetColorTemperature)
    }

    /// Encodes a raw parameter into the 3-byte wire block.
    ///
    /// For [`SetBrightness`](Command::SetBrightness) and
    /// [`SetColorTemperature`](Command::SetColorTemperature) the value is
    /// clamped to [`PARAM_MIN`]..=[`PARAM_MAX`] and stored big-endian in the
    /// last two bytes; every other command sends an all-zero block.
    pub fn param_block(self, param: u16) -> [u8; 3] {
        if self.takes_param() {
            let clamped = param.clamp(PARAM_MIN, PARAM_MAX);
            [0, (clamped >> 8) as u8, clamped as u8]
        } else {
            [0, 0, 0]
        }
    }
}

/// The two wire renditions of a single command, built from identical inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrames {
    /// The HF-format frame.
    pub hf: Frame,
    /// The Deli16-format frame.
    pub deli16: Frame,
}

/// Encodes one command into both broadcast frames.
///
/// This is a pure function: identical arguments produce byte-identical
/// frames, both exactly [`crate::consts::FRAME_LEN`] bytes. The counter is
/// consumed as-is; incrementing it after the broadcast is the caller's
/// responsibility, as is sourcing the HF `nonce` byte.
pub fn encode(
    command: Command,
    param: u16,
    identity: &DeviceIdentity,
    counter: u16,
    nonce: u8,
) -> CommandFrames {
    let params = command.param_block(param);
    let code = command.ctrl_code();
    CommandFrames {
        hf: frame::hf_frame(identity, PAGE, counter, code, &params, nonce),
        deli16: frame::deli16_frame(identity, PAGE, counter, code, &params),
    }
}

/// All commands, for iteration in tests and calibration tools.
pub const COMMANDS: [Command; 5] = [
    Command::Pair,
    Command::Off,
    Command::On,
    Command::SetBrightness,
    Command::SetColorTemperature,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_LEN;

    #[test]
    fn parameters_clamp_to_the_encodable_range() {
        assert_eq!(Command::SetBrightness.param_block(0), [0, 0, 1]);
        assert_eq!(Command::SetBrightness.param_block(5000), [0, 0x03, 0xe8]);
        assert_eq!(Command::SetColorTemperature.param_block(500), [0, 0x01, 0xf4]);
    }

    #[test]
    fn only_level_commands_carry_a_parameter() {
        for command in [Command::Pair, Command::Off, Command::On] {
            assert_eq!(command.param_block(750), [0, 0, 0]);
        }
    }

    #[test]
    fn ids_round_trip() {
        for command in COMMANDS {
            assert_eq!(Command::from_id(command.id()), Ok(command));
        }
        assert_eq!(Command::from_id(0), Err(Error::UnknownCommand(0)));
        assert_eq!(Command::from_id(4), Err(Error::UnknownCommand(4)));
    }

    #[test]
    fn both_frames_are_emitted_for_every_command() {
        let identity = DeviceIdentity::new([0x11, 0x22, 0x33, 0x44, 0x55]);
        for command in COMMANDS {
            let frames = encode(command, 300, &identity, 9, 0x21);
            assert_eq!(frames.hf.len(), FRAME_LEN);
            assert_eq!(frames.deli16.len(), FRAME_LEN);
        }
    }

    #[test]
    fn switch_on_end_to_end() {
        let identity = DeviceIdentity::new([0x11, 0x22, 0x33, 0x44, 0x55]);
        let frames = encode(Command::On, 0, &identity, 1, 0x42);
        assert_eq!(frames.hf[..4], *b"HFKJ");
        assert_eq!(frames.hf[20..], [0x10, 0x11, 0x12, 0x13, 0x14, 0x15]);
        assert_eq!(frames.deli16[16..], [16, 17, 18, 19, 20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn encode_is_deterministic() {
        let identity = DeviceIdentity::new([0xde, 0xad, 0xbe, 0xef, 0x01]);
        let a = encode(Command::SetBrightness, 640, &identity, 77, 0x5a);
        let b = encode(Command::SetBrightness, 640, &identity, 77, 0x5a);
        assert_eq!(a, b);
    }
}
