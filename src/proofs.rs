/// Schnorr proofs of knowledge of a discrete logarithm.
pub mod dlog;
