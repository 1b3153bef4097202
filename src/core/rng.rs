//! Bit-exact model of the game's `rand()`.
//!
//! The game uses a 32-bit linear congruential generator:
//!
//! ```text
//! seed = seed * 0x41C64E6D + 0x3039   (mod 2^32)
//! rand = (seed >> 16) & 0x7FFF
//! ```
//!
//! The seed is `0x55555555` at boot. Every consumer in this crate advances a
//! single [`RngState`] in exactly the order the game does, so one missed or
//! extra draw desynchronizes everything downstream.
//!
//! ## Usage
//!
//! ```
//! use fm_manip::core::RngState;
//!
//! let mut rng = RngState::boot();
//! let first = rng.rand();
//! assert_eq!(first, 27155);
//!
//! // Jumping ahead is identical to stepping
//! let jumped = RngState::boot().advance(1);
//! assert_eq!(jumped, rng);
//! ```

use serde::{Deserialize, Serialize};

/// Seed value the game holds after boot.
pub const BOOT_SEED: u32 = 0x5555_5555;

/// LCG multiplier.
pub const MULTIPLIER: u32 = 0x41C6_4E6D;

/// LCG increment.
pub const INCREMENT: u32 = 0x3039;

/// Modular inverse of [`MULTIPLIER`] mod 2^32, used to step backwards.
pub const INVERSE_MULTIPLIER: u32 = 0xEEB9_EB65;

const OUTPUT_MASK: u32 = 0x7FFF;

/// A point in the game's random stream.
///
/// `seed` is the full 32-bit generator state. `delta` counts generator steps
/// from a reference origin (normally [`BOOT_SEED`]) and is `None` when the
/// state was built from a raw seed whose position is unknown.
///
/// The type is `Copy`: every search task works on its own value and nothing
/// is ever shared mutably.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RngState {
    seed: u32,
    delta: Option<u64>,
}

impl Default for RngState {
    fn default() -> Self {
        Self::boot()
    }
}

impl RngState {
    /// State at console boot: seed `0x55555555`, delta 0.
    #[must_use]
    pub const fn boot() -> Self {
        Self {
            seed: BOOT_SEED,
            delta: Some(0),
        }
    }

    /// State from a raw seed with no known position in the stream.
    #[must_use]
    pub const fn from_seed(seed: u32) -> Self {
        Self { seed, delta: None }
    }

    /// State from a raw seed at a known distance from the origin.
    #[must_use]
    pub const fn with_delta(seed: u32, delta: u64) -> Self {
        Self {
            seed,
            delta: Some(delta),
        }
    }

    /// Raw 32-bit generator state.
    #[must_use]
    pub const fn seed(self) -> u32 {
        self.seed
    }

    /// The seed reinterpreted as a signed 32-bit integer.
    #[must_use]
    pub const fn seed_signed(self) -> i32 {
        self.seed as i32
    }

    /// Steps taken since the origin, if known.
    #[must_use]
    pub const fn delta(self) -> Option<u64> {
        self.delta
    }

    /// Same seed with the step counter dropped.
    #[must_use]
    pub const fn without_delta(self) -> Self {
        Self::from_seed(self.seed)
    }

    /// Take one step and return the output together with the new state.
    #[must_use]
    pub const fn next(self) -> (u32, RngState) {
        let seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        let delta = match self.delta {
            Some(d) => Some(d.wrapping_add(1)),
            None => None,
        };
        ((seed >> 16) & OUTPUT_MASK, RngState { seed, delta })
    }

    /// Step in place and return the output, like the game's `rand()`.
    #[inline]
    pub fn rand(&mut self) -> u32 {
        let (out, next) = self.next();
        *self = next;
        out
    }

    /// The state one step earlier.
    ///
    /// The delta is lost when stepping back past the origin.
    #[must_use]
    pub const fn prev(self) -> RngState {
        let seed = self
            .seed
            .wrapping_sub(INCREMENT)
            .wrapping_mul(INVERSE_MULTIPLIER);
        let delta = match self.delta {
            Some(d) => d.checked_sub(1),
            None => None,
        };
        RngState { seed, delta }
    }

    /// Apply `n` steps at once.
    ///
    /// Composes the affine step map by repeated squaring, so the cost is
    /// O(log n) while the result equals `n` sequential calls to [`Self::next`].
    #[must_use]
    pub fn advance(self, n: u64) -> RngState {
        let mut acc_mult: u32 = 1;
        let mut acc_plus: u32 = 0;
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = INCREMENT;
        let mut remaining = n;

        while remaining > 0 {
            if remaining & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            remaining >>= 1;
        }

        RngState {
            seed: acc_mult.wrapping_mul(self.seed).wrapping_add(acc_plus),
            delta: self.delta.map(|d| d.wrapping_add(n)),
        }
    }
}

impl std::fmt::Display for RngState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.delta {
            Some(d) => write!(f, "{:#010X} (delta {})", self.seed, d),
            None => write!(f, "{:#010X}", self.seed),
        }
    }
}
