//! Stateful command driver.
//!
//! [`HiFlyingDriver`] is the convenience layer most integrations want: it
//! owns the device identity, the rolling counter, and a nonce source, and
//! turns each command method into a ready-to-broadcast pair of frames. The
//! counter advances after every encoded command and wraps at 2¹⁶.
//!
//! The driver stops at the byte boundary on purpose. Radio concerns
//! (advertising interval, repeat count, channel map) and counter persistence
//! across restarts belong to the integration; [`counter`](HiFlyingDriver::counter)
//! and [`set_counter`](HiFlyingDriver::set_counter) are the seam for the
//! latter: restore the saved value at startup, save it back after each send.

use rand_core::RngCore;

use crate::command::{self, Command, CommandFrames};
use crate::identity::DeviceIdentity;

/// Encodes light commands while tracking the rolling counter.
///
/// The type parameter supplies the HF frame's nonce byte. Any [`RngCore`]
/// will do: the nonce only decorrelates repeated frames on the air and
/// carries no security weight.
///
/// ## Example
///
/// ```rust
/// use hiflying_ble::driver::HiFlyingDriver;
/// use hiflying_ble::identity::DeviceIdentity;
/// use rand::rngs::mock::StepRng;
///
/// let identity = DeviceIdentity::from_mac(&[0x24, 0x6f, 0x28, 0x01, 0x02, 0x03], 1);
/// let mut driver = HiFlyingDriver::new(identity, StepRng::new(7, 13));
///
/// let frames = driver.pair();
/// // hand frames.hf and frames.deli16 to the radio layer, back-to-back
/// # assert_eq!(frames.hf.len(), 26);
/// # assert_eq!(frames.deli16.len(), 26);
/// ```
#[derive(Debug)]
pub struct HiFlyingDriver<R: RngCore> {
    identity: DeviceIdentity,
    counter: u16,
    rng: R,
}

impl<R: RngCore> HiFlyingDriver<R> {
    /// Creates a driver for one light identity.
    ///
    /// The counter starts at 1; restore a persisted value with
    /// [`set_counter`](Self::set_counter) before the first command.
    pub fn new(identity: DeviceIdentity, rng: R) -> Self {
        Self {
            identity,
            counter: 1,
            rng,
        }
    }

    /// The identity frames are encoded under.
    pub const fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Current rolling counter value.
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// Overwrites the rolling counter, typically with a value loaded from
    /// persistent storage at startup.
    pub fn set_counter(&mut self, counter: u16) {
        self.counter = counter;
    }

    /// Encodes `command` under the current counter, then advances the
    /// counter.
    ///
    /// Broadcast both returned frames back-to-back; which format a given
    /// light decodes depends on its firmware generation, and the other one
    /// is ignored.
    pub fn encode_command(&mut self, command: Command, param: u16) -> CommandFrames {
        let nonce = (self.rng.next_u32() & 0xff) as u8;
        let frames = command::encode(command, param, &self.identity, self.counter, nonce);
        #[cfg(feature = "log")]
        log::debug!(
            "encoded {:?} with param {} (counter: {})",
            command,
            param,
            self.counter
        );
        self.counter = self.counter.wrapping_add(1);
        frames
    }

    /// Frames binding the light to this driver's identity; broadcast them
    /// within the light's pairing window after power-on.
    pub fn pair(&mut self) -> CommandFrames {
        self.encode_command(Command::Pair, 0)
    }

    /// Frames turning the light on.
    pub fn turn_on(&mut self) -> CommandFrames {
        self.encode_command(Command::On, 0)
    }

    /// Frames turning the light off.
    pub fn turn_off(&mut self) -> CommandFrames {
        self.encode_command(Command::Off, 0)
    }

    /// Frames setting brightness; the value is clamped to 1..=1000.
    pub fn set_brightness(&mut self, brightness: u16) -> CommandFrames {
        self.encode_command(Command::SetBrightness, brightness)
    }

    /// Frames setting color temperature; the value is clamped to 1..=1000.
    pub fn set_color_temperature(&mut self, color_temp: u16) -> CommandFrames {
        self.encode_command(Command::SetColorTemperature, color_temp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn driver() -> HiFlyingDriver<StepRng> {
        let identity = DeviceIdentity::new([0x11, 0x22, 0x33, 0x44, 0x55]);
        HiFlyingDriver::new(identity, StepRng::new(0x42, 0))
    }

    #[test]
    fn counter_advances_after_every_command() {
        let mut driver = driver();
        assert_eq!(driver.counter(), 1);
        let _ = driver.turn_on();
        assert_eq!(driver.counter(), 2);
        let _ = driver.set_brightness(500);
        assert_eq!(driver.counter(), 3);
    }

    #[test]
    fn counter_wraps() {
        let mut driver = driver();
        driver.set_counter(u16::MAX);
        let _ = driver.turn_off();
        assert_eq!(driver.counter(), 0);
    }

    #[test]
    fn fixed_rng_and_counter_give_identical_frames() {
        let mut a = driver();
        let mut b = driver();
        assert_eq!(a.set_color_temperature(700), b.set_color_temperature(700));
    }

    #[test]
    fn restored_counter_reproduces_frames() {
        let mut first = driver();
        let frames_a = first.turn_on();

        let mut second = driver();
        second.set_counter(1);
        let frames_b = second.turn_on();
        assert_eq!(frames_a, frames_b);
    }
}
