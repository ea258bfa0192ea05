use std::fmt;

use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable};

use crate::crypto::Digest;

/// The secret bit selecting which pad the receiver gets.
///
/// There's deliberately no way to turn this back into a `bool`: the only
/// things you can do with it are constant time selections.
#[derive(Clone, Copy)]
pub struct ChoiceBit(Choice);

impl ChoiceBit {
    /// Sample a uniformly random choice.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self(Choice::from((rng.next_u32() & 1) as u8))
    }

    /// Select `zero` if the bit is 0, and `one` otherwise.
    pub fn select<T: ConditionallySelectable>(&self, zero: &T, one: &T) -> T {
        T::conditional_select(zero, one, self.0)
    }

    /// Compute `base ^ (bit * masked)`.
    pub fn mask_xor(&self, base: &Digest, masked: &Digest) -> Digest {
        *base ^ self.select(&Digest::default(), masked)
    }
}

impl From<Choice> for ChoiceBit {
    fn from(choice: Choice) -> Self {
        Self(choice)
    }
}

impl From<bool> for ChoiceBit {
    fn from(bit: bool) -> Self {
        Self(Choice::from(u8::from(bit)))
    }
}

impl fmt::Debug for ChoiceBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChoiceBit(<secret>)")
    }
}
