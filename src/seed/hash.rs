//! Fast non-cryptographic 53-bit hash turning capture payloads into seeds
//!
//! Two 32-bit lanes absorb every input unit with distinct odd multipliers and
//! are cross-mixed at the end. The high lane contributes 21 bits and the low
//! lane 32 bits, so every seed fits losslessly in an `f64` mantissa.

/// Initial value of the low lane
const LOW_LANE_INIT: u32 = 0xdead_beef;
/// Initial value of the high lane
const HIGH_LANE_INIT: u32 = 0x41c6_ce57;
/// Per-unit multiplier of the low lane
const LOW_LANE_MULTIPLIER: u32 = 2_654_435_761;
/// Per-unit multiplier of the high lane
const HIGH_LANE_MULTIPLIER: u32 = 1_597_334_677;
/// First finalization multiplier
const MIX_MULTIPLIER_A: u32 = 2_246_822_507;
/// Second finalization multiplier
const MIX_MULTIPLIER_B: u32 = 3_266_489_909;
/// Bits kept from the high lane
const HIGH_LANE_MASK: u32 = 0x1f_ffff;

/// Largest seed the hash can produce (`2^53 - 1`)
pub const MAX_SEED: u64 = (1 << 53) - 1;

/// Streaming state of the two-lane hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cyrb53 {
    low: u32,
    high: u32,
}

impl Default for Cyrb53 {
    fn default() -> Self {
        Self::with_salt(0)
    }
}

impl Cyrb53 {
    /// Create a hasher with the given salt folded into both lanes
    pub const fn with_salt(salt: u32) -> Self {
        Self {
            low: LOW_LANE_INIT ^ salt,
            high: HIGH_LANE_INIT ^ salt,
        }
    }

    /// Absorb one input unit (a byte or a UTF-16 code unit)
    pub const fn write_unit(&mut self, unit: u32) {
        self.low = (self.low ^ unit).wrapping_mul(LOW_LANE_MULTIPLIER);
        self.high = (self.high ^ unit).wrapping_mul(HIGH_LANE_MULTIPLIER);
    }

    /// Absorb every unit of an iterator
    pub fn write_units<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = u32>,
    {
        for unit in units {
            self.write_unit(unit);
        }
    }

    /// Mix both lanes and combine them into a 53-bit seed
    pub const fn finish(self) -> u64 {
        let mut low = self.low;
        let mut high = self.high;

        low = (low ^ (low >> 16)).wrapping_mul(MIX_MULTIPLIER_A);
        low ^= (high ^ (high >> 13)).wrapping_mul(MIX_MULTIPLIER_B);
        high = (high ^ (high >> 16)).wrapping_mul(MIX_MULTIPLIER_A);
        high ^= (low ^ (low >> 13)).wrapping_mul(MIX_MULTIPLIER_B);

        (((high & HIGH_LANE_MASK) as u64) << 32) | low as u64
    }
}

/// Derive a seed from raw bytes, one unit per byte
pub fn derive_seed(input: &[u8]) -> u64 {
    derive_seed_salted(input, 0)
}

/// Derive a seed from raw bytes with an explicit salt
pub fn derive_seed_salted(input: &[u8], salt: u32) -> u64 {
    let mut hasher = Cyrb53::with_salt(salt);
    hasher.write_units(input.iter().map(|&byte| u32::from(byte)));
    hasher.finish()
}

/// Derive a seed from a text token, one unit per UTF-16 code unit
///
/// ASCII tokens (including base64 payloads) hash exactly like their bytes.
pub fn derive_seed_str(input: &str) -> u64 {
    let mut hasher = Cyrb53::default();
    hasher.write_units(input.encode_utf16().map(u32::from));
    hasher.finish()
}
