//! Guardian Stars and their strength cycle.

use serde::{Deserialize, Serialize};

/// The ten Guardian Stars.
///
/// The first four form one cycle (Sun > Moon > Venus > Mercury > Sun) and
/// the remaining six another (Mars > Jupiter > ... > Neptune > Mars).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardianStar {
    Sun,
    Moon,
    Venus,
    Mercury,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Pluto,
    Neptune,
}

impl GuardianStar {
    pub const ALL: [GuardianStar; 10] = [
        GuardianStar::Sun,
        GuardianStar::Moon,
        GuardianStar::Venus,
        GuardianStar::Mercury,
        GuardianStar::Mars,
        GuardianStar::Jupiter,
        GuardianStar::Saturn,
        GuardianStar::Uranus,
        GuardianStar::Pluto,
        GuardianStar::Neptune,
    ];

    /// The star this one is strong against.
    #[must_use]
    pub const fn strength(self) -> GuardianStar {
        use GuardianStar::*;
        match self {
            Sun => Moon,
            Moon => Venus,
            Venus => Mercury,
            Mercury => Sun,
            Mars => Jupiter,
            Jupiter => Saturn,
            Saturn => Uranus,
            Uranus => Pluto,
            Pluto => Neptune,
            Neptune => Mars,
        }
    }

    /// The star this one is weak against.
    #[must_use]
    pub const fn weakness(self) -> GuardianStar {
        use GuardianStar::*;
        match self {
            Sun => Mercury,
            Moon => Sun,
            Venus => Moon,
            Mercury => Venus,
            Mars => Neptune,
            Jupiter => Mars,
            Saturn => Jupiter,
            Uranus => Saturn,
            Pluto => Uranus,
            Neptune => Pluto,
        }
    }

    #[must_use]
    pub fn is_strong_against(self, opponent: GuardianStar) -> bool {
        self.strength() == opponent
    }

    #[must_use]
    pub fn is_weak_against(self, opponent: GuardianStar) -> bool {
        self.weakness() == opponent
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        use GuardianStar::*;
        match self {
            Sun => "Sun",
            Moon => "Moon",
            Venus => "Venus",
            Mercury => "Mercury",
            Mars => "Mars",
            Jupiter => "Jupiter",
            Saturn => "Saturn",
            Uranus => "Uranus",
            Pluto => "Pluto",
            Neptune => "Neptune",
        }
    }
}

impl std::fmt::Display for GuardianStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
