use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Numeric identity of a button, also the label it shows.
pub type ButtonId = u8;

/// Pixel unit used for positions and element sizes.
pub type Pixels = u32;

pub const MIN_BUTTONS: u8 = 3;
pub const MAX_BUTTONS: u8 = 7;

/// Validated number of buttons in a session, always within `MIN_BUTTONS..=MAX_BUTTONS`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ButtonCount(u8);

impl ButtonCount {
    pub const MIN: Self = Self(MIN_BUTTONS);
    pub const MAX: Self = Self(MAX_BUTTONS);

    pub const fn new(count: u8) -> Result<Self> {
        if count >= MIN_BUTTONS && count <= MAX_BUTTONS {
            Ok(Self(count))
        } else {
            Err(GameError::InvalidCount)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn ids(self) -> impl Iterator<Item = ButtonId> {
        1..=self.0
    }

    /// Reads the count the way a number input is usually read in the browser: leading whitespace is skipped, an
    /// optional sign is honoured and only the leading run of digits counts, so `"5 buttons"` reads as 5.
    pub fn parse_input(input: &str) -> Result<Self> {
        let value = parse_leading_int(input).ok_or(GameError::InvalidCount)?;
        let count: u8 = value.try_into().map_err(|_| GameError::InvalidCount)?;
        Self::new(count)
    }
}

impl Default for ButtonCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for ButtonCount {
    type Error = GameError;

    fn try_from(count: u8) -> Result<Self> {
        Self::new(count)
    }
}

impl From<ButtonCount> for u8 {
    fn from(count: ButtonCount) -> Self {
        count.0
    }
}

impl FromStr for ButtonCount {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_input(s)
    }
}

impl fmt::Display for ButtonCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Width and height of a rendered element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub width: Pixels,
    pub height: Pixels,
}

impl Extent {
    pub const fn new(width: Pixels, height: Pixels) -> Self {
        Self { width, height }
    }

    /// Largest offset at which `inner` still fits inside `self`, per axis.
    pub const fn max_offset(self, inner: Extent) -> (Pixels, Pixels) {
        (
            self.width.saturating_sub(inner.width),
            self.height.saturating_sub(inner.height),
        )
    }
}

/// Absolute position of a button's top-left corner inside its container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: Pixels,
    pub y: Pixels,
}

impl Position {
    pub const fn new(x: Pixels, y: Pixels) -> Self {
        Self { x, y }
    }
}

/// Generation number of a session, bumped every time a new game starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub const FIRST: Self = Self(1);

    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_accepts_counts_in_range() {
        for count in MIN_BUTTONS..=MAX_BUTTONS {
            let input = alloc::format!("{count}");
            assert_eq!(ButtonCount::parse_input(&input).unwrap().get(), count);
        }
    }

    #[test]
    fn parse_input_rejects_out_of_range_and_garbage() {
        for input in ["", "  ", "2", "8", "0", "-3", "abc", "+", "99999999999999999999999"] {
            assert_eq!(
                ButtonCount::parse_input(input),
                Err(GameError::InvalidCount),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_input_reads_leading_digits_only() {
        assert_eq!(ButtonCount::parse_input("  5 buttons").unwrap().get(), 5);
        assert_eq!(ButtonCount::parse_input("+4").unwrap().get(), 4);
        assert_eq!(ButtonCount::parse_input("3.9").unwrap().get(), 3);
    }

    #[test]
    fn max_offset_saturates_when_inner_is_larger() {
        let container = Extent::new(100, 40);
        assert_eq!(container.max_offset(Extent::new(30, 10)), (70, 30));
        assert_eq!(container.max_offset(Extent::new(300, 50)), (0, 0));
    }
}
