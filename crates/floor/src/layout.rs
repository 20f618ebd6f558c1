//! Floor layout: how the walking route threads through the racks.
//!
//! The route is a single path. Each rack contributes one contiguous run of
//! positions, walked either from slot 1 upwards or from the last slot
//! downwards. The standard floor looks like this:
//!
//! ```text
//!     c1 c2 c3 c4 c5 c6 c7 c8 c9 c10
//!
//! a1    _________________________    b1
//! a2   |                         |   b2
//! ..   |  loading bay            |   ..
//! a10  |_________________________|   b10
//!
//! >> entrance                     >> exit
//! ```
//!
//! Pickers enter next to `a10`, walk up rack a, across rack c and down rack b
//! to the exit, so `a10` is position 0 and `b10` is position 29.

use serde::{Deserialize, Serialize};

use pickwalk_core::{DomainError, DomainResult};

use crate::location::{LocationCode, PathPosition, Rack};

/// Direction a rack is walked in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Walk {
    /// Slot 1 first.
    Ascending,
    /// Highest slot first.
    Descending,
}

/// The stretch of the route covering one rack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackRun {
    pub rack: Rack,
    /// Position of the first slot walked in this rack.
    pub start: u32,
    pub slots: u32,
    pub walk: Walk,
}

impl RackRun {
    pub fn new(rack: Rack, start: u32, slots: u32, walk: Walk) -> Self {
        Self {
            rack,
            start,
            slots,
            walk,
        }
    }

    /// Exclusive end of the run's position range.
    fn end(&self) -> u32 {
        self.start + self.slots
    }

    fn position_of(&self, slot: u32) -> Option<PathPosition> {
        if slot == 0 || slot > self.slots {
            return None;
        }
        let offset = match self.walk {
            Walk::Ascending => slot - 1,
            Walk::Descending => self.slots - slot,
        };
        Some(PathPosition(self.start + offset))
    }

    fn slot_at(&self, position: PathPosition) -> Option<u32> {
        let p = position.value();
        if p < self.start || p >= self.end() {
            return None;
        }
        let offset = p - self.start;
        Some(match self.walk {
            Walk::Ascending => offset + 1,
            Walk::Descending => self.slots - offset,
        })
    }
}

/// Serialized form of a [`FloorLayout`], validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutConfig {
    runs: Vec<RackRun>,
}

/// Validated set of rack runs; the Location Codec.
///
/// Loaded from JSON (`{"runs": [{"rack": "a", "start": 0, "slots": 10,
/// "walk": "descending"}, ...]}`) or taken as [`FloorLayout::standard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutConfig", into = "LayoutConfig")]
pub struct FloorLayout {
    runs: Vec<RackRun>,
}

impl FloorLayout {
    /// Build a layout, rejecting duplicate racks and empty racks. Runs must
    /// tile the route from position 0 with no overlaps and no holes, so that a
    /// fully stocked floor fills every position.
    pub fn new(runs: Vec<RackRun>) -> DomainResult<Self> {
        if runs.is_empty() {
            return Err(DomainError::validation("layout needs at least one rack"));
        }

        for (i, run) in runs.iter().enumerate() {
            if run.slots == 0 {
                return Err(DomainError::validation(format!(
                    "rack {} has no slots",
                    run.rack
                )));
            }
            if run.start.checked_add(run.slots).is_none() {
                return Err(DomainError::validation(format!(
                    "rack {} runs past the last representable position",
                    run.rack
                )));
            }
            if runs[..i].iter().any(|r| r.rack == run.rack) {
                return Err(DomainError::validation(format!(
                    "rack {} is configured twice",
                    run.rack
                )));
            }
        }

        let mut by_start: Vec<&RackRun> = runs.iter().collect();
        by_start.sort_by_key(|r| r.start);
        let mut covered = 0;
        for run in by_start {
            if run.start < covered {
                return Err(DomainError::validation(format!(
                    "rack {} starts at {} inside positions already walked (0-{})",
                    run.rack,
                    run.start,
                    covered - 1
                )));
            }
            if run.start > covered {
                return Err(DomainError::validation(format!(
                    "positions {}-{} before rack {} are not on any rack",
                    covered,
                    run.start - 1,
                    run.rack
                )));
            }
            covered = run.end();
        }

        Ok(Self { runs })
    }

    /// The standard floor: a descending from 0, c and b ascending from 10 and
    /// 20, and the reserved rack d descending from 30 (`d1` is 39).
    pub fn standard() -> Self {
        Self {
            runs: vec![
                RackRun::new(Rack::A, 0, 10, Walk::Descending),
                RackRun::new(Rack::C, 10, 10, Walk::Ascending),
                RackRun::new(Rack::B, 20, 10, Walk::Ascending),
                RackRun::new(Rack::D, 30, 10, Walk::Descending),
            ],
        }
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("floor layout: {e}")))
    }

    pub fn runs(&self) -> &[RackRun] {
        &self.runs
    }

    /// Position of `code` along the walking route.
    pub fn position(&self, code: &LocationCode) -> DomainResult<PathPosition> {
        let run = self
            .runs
            .iter()
            .find(|r| r.rack == code.rack())
            .ok_or_else(|| {
                DomainError::invalid_location(format!(
                    "{code}: rack {} is not on this floor",
                    code.rack()
                ))
            })?;
        run.position_of(code.slot()).ok_or_else(|| {
            DomainError::invalid_location(format!(
                "{code}: rack {} has slots 1-{}",
                run.rack, run.slots
            ))
        })
    }

    /// Inverse of [`FloorLayout::position`]; `None` for positions no rack covers.
    pub fn location_at(&self, position: PathPosition) -> Option<LocationCode> {
        self.runs.iter().find_map(|run| {
            run.slot_at(position)
                .and_then(|slot| LocationCode::new(run.rack, slot).ok())
        })
    }
}

impl Default for FloorLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<LayoutConfig> for FloorLayout {
    type Error = DomainError;

    fn try_from(value: LayoutConfig) -> Result<Self, Self::Error> {
        FloorLayout::new(value.runs)
    }
}

impl From<FloorLayout> for LayoutConfig {
    fn from(value: FloorLayout) -> Self {
        LayoutConfig { runs: value.runs }
    }
}
