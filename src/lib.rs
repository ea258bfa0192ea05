//! This crate implements a random oblivious transfer (OT) with a reusable setup.
//!
//! This is a building block for threshold ECDSA protocols, which need many
//! OTs between each pair of parties, e.g. to multiply secret shared values.
//!
//! # Warning
//!
//! This is experimental cryptographic software, unless you're a cat with
//! a megaphone on top of a giant Moogle I would exercise caution.
//!
//! - This library has not undergone any form of audit.
//!
//! # Design
//!
//! In a random OT, a sender ends up with two random pads, and a receiver ends up
//! with one of them, chosen by a secret bit. The sender doesn't learn which pad
//! the receiver got, and the receiver doesn't learn the other pad.
//!
//! The expensive part of the protocol is a setup, where the sender publishes
//! a public key along with a proof that it knows the matching secret key.
//! This setup can then be used for an arbitrary number of cheap executions,
//! each of which transfers a single pad.
//!
//! The flow is:
//!
//! - The sender runs [random_ot::setup_send], and sends the message to the receiver.
//! - The receiver checks it with [random_ot::setup_receive].
//! - For each execution, both parties agree on a unique nonce, and create a
//! [random_ot::Receiver] and a [random_ot::Sender], which then exchange four messages.
//!
//! It's important that nonces are **never** reused for the same setup.
//!
//! ## API Design
//!
//! Each party in an execution is represented by a state machine, with one type
//! per stage. Each round consumes the current stage, along with a message from
//! the other party, and produces the next stage along with a message to send:
//! ```ignore
//! let (receiver, msg) = receiver.round1(&mut OsRng);
//! let (sender, msg) = sender.round1(&msg);
//! let (receiver, msg) = receiver.round2(&msg);
//! let (msg, sender_output) = sender.round2(&msg)?;
//! let receiver_output = receiver.round3(&msg)?;
//! ```
//! Delivering these messages is left to you, and they can be converted
//! to and from bytes with [random_ot::WireMessage].
//!
//! The receiver's choice is a [random_ot::ChoiceBit], which is only ever
//! used through constant time operations.
//!
//! # Generic Curves
//!
//! The library has support for generic curves.
//!
//! The support for generic curves is done through a custom `CSCurve` trait,
//! which can be easily implemented for any curve from the
//! RustCrypto [elliptic-curves](https://github.com/RustCrypto/elliptic-curves)
//! suite of libraries.
//!
//! This crate also provides implementations of some existing curves behind features,
//! as per the following table:
//!
//! | Curve | Feature |
//! |-------|---------|
//! |Secp256k1|`k256`|
//! |P-256|`p256`|
mod compat;
pub mod constants;
mod crypto;
mod proofs;
pub mod random_ot;
mod serde;

pub use compat::{CSCurve, SerializablePoint};
pub use crypto::Digest;
