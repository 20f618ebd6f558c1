use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pickwalk_core::{DomainError, ValueObject};

/// One storage rack on the floor, identified by a single letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rack {
    A,
    B,
    C,
    /// Reserved for the extension rack; not stocked in the sample catalog.
    D,
}

impl Rack {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Rack::A),
            'b' => Some(Rack::B),
            'c' => Some(Rack::C),
            'd' => Some(Rack::D),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Rack::A => 'a',
            Rack::B => 'b',
            Rack::C => 'c',
            Rack::D => 'd',
        }
    }
}

impl core::fmt::Display for Rack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Storage address of a product: rack letter followed by a slot number (`b3`, `a10`).
///
/// Parsing is case-insensitive and tolerates surrounding whitespace; display is
/// always lowercase. Whether the slot actually exists is a question for the
/// [`FloorLayout`](crate::layout::FloorLayout), not for the code itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode {
    rack: Rack,
    slot: u32,
}

impl LocationCode {
    pub fn new(rack: Rack, slot: u32) -> Result<Self, DomainError> {
        if slot == 0 {
            return Err(DomainError::invalid_location(format!(
                "{rack}0: slot numbers start at 1"
            )));
        }
        Ok(Self { rack, slot })
    }

    /// For tables known to hold non-zero slots.
    pub(crate) const fn from_parts(rack: Rack, slot: u32) -> Self {
        Self { rack, slot }
    }

    pub fn rack(&self) -> Rack {
        self.rack
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl ValueObject for LocationCode {}

impl core::fmt::Display for LocationCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.rack, self.slot)
    }
}

impl FromStr for LocationCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let letter = code
            .chars()
            .next()
            .ok_or_else(|| DomainError::invalid_location("empty location code"))?;
        let rack = Rack::from_letter(letter)
            .ok_or_else(|| DomainError::invalid_location(format!("{code}: unknown rack")))?;

        // Slots may be multi-digit.
        let digits = &code[letter.len_utf8()..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_location(format!(
                "{code}: expected a slot number after the rack letter"
            )));
        }
        let slot = digits
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_location(format!("{code}: {e}")))?;

        LocationCode::new(rack, slot)
    }
}

impl TryFrom<String> for LocationCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LocationCode> for String {
    fn from(value: LocationCode) -> Self {
        value.to_string()
    }
}

/// Rank of a location along the walking route, starting at 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPosition(pub u32);

impl PathPosition {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Number of path steps between two positions.
    pub fn steps_to(self, other: PathPosition) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl ValueObject for PathPosition {}

impl core::fmt::Display for PathPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
