//! Mapping lighting state onto command parameters.
//!
//! Integrations usually hold a fractional brightness (`0.0..=1.0`) and a
//! color temperature in mireds; the protocol wants `1..=1000`. This module
//! converts between the two and tracks the last pushed state, so a state
//! write turns into the minimal command sequence: an on/off edge first, then
//! a level change when the value moved enough to matter.

use heapless::Vec;
use libm::fabsf;

use crate::command::Command;

/// Coldest supported color temperature (6500 K).
pub const MIN_MIREDS: f32 = 153.0;

/// Warmest supported color temperature (2700 K).
pub const MAX_MIREDS: f32 = 370.0;

/// Converts a fractional brightness (clamped to `0.0..=1.0`) to the wire
/// parameter `1..=1000`.
pub fn brightness_to_param(brightness: f32) -> u16 {
    let clamped = brightness.clamp(0.0, 1.0);
    (clamped * 999.0) as u16 + 1
}

/// Converts a color temperature in mireds (clamped to
/// [`MIN_MIREDS`]..=[`MAX_MIREDS`]) to the wire parameter `1..=1000`.
///
/// Low mireds mean cold light and map to the high end of the range.
pub fn mireds_to_param(mireds: f32) -> u16 {
    let clamped = mireds.clamp(MIN_MIREDS, MAX_MIREDS);
    let normalized = (clamped - MIN_MIREDS) / (MAX_MIREDS - MIN_MIREDS);
    ((1.0 - normalized) * 999.0) as u16 + 1
}

/// Tracks the last state pushed to a light and emits the commands a new
/// state requires.
///
/// The light itself is invisible to the transmitter, so the tracker is the
/// only notion of "current state" there is. It errs on the side of sending:
/// the first update after construction always produces commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    last_brightness: f32,
    last_mireds: f32,
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

impl LightState {
    /// Starts from "off, color temperature unknown".
    pub const fn new() -> Self {
        Self {
            last_brightness: 0.0,
            last_mireds: 0.0,
        }
    }

    /// Commands needed to reach `brightness` (`0.0` meaning off): at most
    /// an on/off edge followed by a level change.
    ///
    /// Level changes smaller than 0.01 are suppressed to keep dimmer
    /// drags from flooding the air with broadcasts.
    pub fn update_brightness(&mut self, brightness: f32) -> Vec<(Command, u16), 2> {
        let mut commands = Vec::new();
        if brightness == 0.0 && self.last_brightness > 0.0 {
            let _ = commands.push((Command::Off, 0));
            self.last_brightness = brightness;
            return commands;
        }
        if brightness > 0.0 && self.last_brightness == 0.0 {
            let _ = commands.push((Command::On, 0));
        }
        if brightness > 0.0 && fabsf(brightness - self.last_brightness) > 0.01 {
            let _ = commands.push((Command::SetBrightness, brightness_to_param(brightness)));
            self.last_brightness = brightness;
        }
        commands
    }

    /// Command needed to reach `mireds`, if it moved by more than one mired.
    pub fn update_color_temperature(&mut self, mireds: f32) -> Option<(Command, u16)> {
        if fabsf(mireds - self.last_mireds) > 1.0 {
            self.last_mireds = mireds;
            Some((Command::SetColorTemperature, mireds_to_param(mireds)))
        } else {
            None
        }
    }
}
