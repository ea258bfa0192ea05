use std::ops::BitXor;

use ck_meow::Meow;
use magikitten::Transcript;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::constants::{DIGEST_LABEL, SECURITY_BYTES};

/// A string of exactly [SECURITY_BYTES] bytes.
///
/// This is used for the pads the random OT produces, as well as for
/// all of the commitments, challenges and responses exchanged along the way.
///
/// Equality is checked in constant time.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Digest([u8; SECURITY_BYTES]);

impl Digest {
    pub fn from_bytes(bytes: [u8; SECURITY_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; SECURITY_BYTES] {
        self.0
    }

    /// Read a digest out of a transcript, under a given label.
    pub(crate) fn challenge(transcript: &mut Transcript, label: &'static [u8]) -> Self {
        let mut out = [0u8; SECURITY_BYTES];
        transcript.challenge(label).fill_bytes(&mut out);
        Self(out)
    }

    /// Hash this digest, producing a new one.
    pub fn hash(&self) -> Self {
        let mut meow = Meow::new(DIGEST_LABEL);
        meow.ad(&self.0, false);

        let mut out = [0u8; SECURITY_BYTES];
        meow.prf(&mut out, false);

        Self(out)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BitXor for Digest {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        for (l, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *l ^= r;
        }
        self
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for Digest {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u8; SECURITY_BYTES];
        for (o, (a_i, b_i)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *o = u8::conditional_select(a_i, b_i, choice);
        }
        Self(out)
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_and_fresh() {
        let d = Digest::from_bytes([7u8; SECURITY_BYTES]);
        assert_eq!(d.hash(), d.hash());
        assert_ne!(d.hash(), d);
        assert_ne!(d.hash(), d.hash().hash());
    }

    #[test]
    fn test_xor_cancels() {
        let a = Digest::from_bytes([0x5Au8; SECURITY_BYTES]).hash();
        let b = a.hash();
        assert_eq!((a ^ b) ^ b, a);
        assert_eq!(a ^ a, Digest::default());
    }

    #[test]
    fn test_conditional_select() {
        let a = Digest::from_bytes([1u8; SECURITY_BYTES]);
        let b = Digest::from_bytes([2u8; SECURITY_BYTES]);
        assert_eq!(Digest::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(Digest::conditional_select(&a, &b, Choice::from(1)), b);
    }

    #[test]
    fn test_challenge_depends_on_transcript() {
        let base = Transcript::new(b"test");
        let d0 = Digest::challenge(&mut base.forked(b"fork", &[0]), b"label");
        let d0_again = Digest::challenge(&mut base.forked(b"fork", &[0]), b"label");
        let d1 = Digest::challenge(&mut base.forked(b"fork", &[1]), b"label");
        assert_eq!(d0, d0_again);
        assert_ne!(d0, d1);
    }
}
