use gilrs::{Button, Event, EventType, Gilrs};
use tracing::{debug, info, warn};

use super::{ExpressionSource, LookPad, PadButton};
use crate::expression::{Direction, Expression};

/// Bluetooth/USB gamepad control.
///
/// D-pad held → look that way; release → back to the previous look or mood.
/// West/East cycle moods, North resets to Normal.
pub struct GamepadSource {
    gilrs: Gilrs,
    pad: LookPad,
}

impl GamepadSource {
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = Gilrs::new()?;

        let mut found = false;
        for (id, gamepad) in gilrs.gamepads() {
            info!("🎮 Connected: {} (ID: {:?}, Power: {:?})", gamepad.name(), id, gamepad.power_info());
            found = true;
        }
        if !found {
            warn!("No gamepad detected. Pair a controller before starting.");
        }

        Ok(Self {
            gilrs,
            pad: LookPad::new(),
        })
    }

    fn map_button(button: Button) -> Option<PadButton> {
        match button {
            Button::DPadLeft => Some(PadButton::Look(Direction::Left)),
            Button::DPadRight => Some(PadButton::Look(Direction::Right)),
            Button::DPadUp => Some(PadButton::Look(Direction::Up)),
            Button::DPadDown => Some(PadButton::Look(Direction::Down)),
            Button::West => Some(PadButton::NextMood),
            Button::East => Some(PadButton::PreviousMood),
            Button::North => Some(PadButton::ResetMood),
            _ => None,
        }
    }
}

impl ExpressionSource for GamepadSource {
    fn name(&self) -> &str {
        "gamepad"
    }

    fn poll(&mut self, _dt: f64) -> Option<Expression> {
        let mut latest = None;
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            debug!("🎮 Event from gamepad {}: {:?}", id, event);
            let change = match event {
                EventType::ButtonPressed(button, _) => {
                    Self::map_button(button).and_then(|b| self.pad.press(b))
                }
                EventType::ButtonReleased(button, _) => {
                    Self::map_button(button).and_then(|b| self.pad.release(b))
                }
                _ => None,
            };
            if change.is_some() {
                latest = change;
            }
        }
        latest
    }
}

pub fn print_control_mapping() {
    info!("🎮 Controls: D-pad = look (hold) | West/East = next/previous mood | North = Normal");
}
