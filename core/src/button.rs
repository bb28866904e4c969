use core::fmt;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// 24-bit RGB color, displayed as `#RRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    const HEX_DIGITS: u32 = 6;

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Picks each of the six hex digits uniformly from the 16 symbols. No contrast or uniqueness guarantees.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = (0..Self::HEX_DIGITS).fold(0, |acc, _| (acc << 4) | rng.random_range(0..16u32));
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// One numbered button on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameButton {
    id: ButtonId,
    color: Color,
    position: Option<Position>,
    label_visible: bool,
    click_armed: bool,
    enabled: bool,
}

impl GameButton {
    pub fn new(id: ButtonId, color: Color) -> Self {
        Self {
            id,
            color,
            position: None,
            label_visible: true,
            click_armed: false,
            enabled: true,
        }
    }

    pub const fn id(&self) -> ButtonId {
        self.id
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// `None` until the first scramble step, the button then sits in the container's normal flow.
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub const fn is_label_visible(&self) -> bool {
        self.label_visible
    }

    /// Number currently written on the button.
    pub const fn label(&self) -> Option<ButtonId> {
        if self.label_visible {
            Some(self.id)
        } else {
            None
        }
    }

    pub fn hide_label(&mut self) {
        self.label_visible = false;
    }

    pub fn show_label(&mut self) {
        self.label_visible = true;
    }

    /// Starts listening for clicks. Returns `false` if the button was already armed.
    pub fn arm_click(&mut self) -> bool {
        !core::mem::replace(&mut self.click_armed, true)
    }

    pub const fn is_click_armed(&self) -> bool {
        self.click_armed
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn accepts_clicks(&self) -> bool {
        self.click_armed && self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rand::rngs::SmallRng;

    #[test]
    fn color_displays_as_six_hex_digits() {
        assert_eq!(Color::from_rgb(0x12, 0xab, 0x0f).to_string(), "#12AB0F");
        assert_eq!(Color::from_rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn random_colors_stay_in_24_bits() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let text = Color::random(&mut rng).to_string();
            assert_eq!(text.len(), 7);
            assert!(text[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn new_button_shows_its_number_and_is_unpositioned() {
        let button = GameButton::new(3, Color::from_rgb(1, 2, 3));

        assert_eq!(button.label(), Some(3));
        assert_eq!(button.position(), None);
        assert!(!button.accepts_clicks());
    }

    #[test]
    fn labels_toggle() {
        let mut button = GameButton::new(2, Color::from_rgb(1, 2, 3));

        button.hide_label();
        assert_eq!(button.label(), None);
        button.show_label();
        assert_eq!(button.label(), Some(2));
    }

    #[test]
    fn arming_twice_is_a_no_op() {
        let mut button = GameButton::new(1, Color::from_rgb(1, 2, 3));

        assert!(button.arm_click());
        assert!(!button.arm_click());
        assert!(button.accepts_clicks());

        button.disable();
        assert!(!button.accepts_clicks());
    }
}
