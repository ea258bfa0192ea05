//! Random oblivious transfer, with a setup that can be reused.
//!
//! In a random OT, the sender ends up with two random pads, `rand0` and `rand1`,
//! and the receiver ends up with `rand_c`, where `c` is a secret choice bit.
//! The sender learns nothing about `c`, and the receiver learns nothing about the
//! other pad.
//!
//! The protocol has two phases. First, a setup is run once:
//!
//! - the sender runs [setup_send], sending a public key `B = b * G` along with a proof of knowledge of `b`,
//! - the receiver runs [setup_receive], checking that proof.
//!
//! The results of the setup can then be shared between any number of executions.
//! Each execution is a handshake of four messages:
//!
//! ```ignore
//! Receiver::round1 -> Sender::round1 -> ReceiverRound1::round2 -> SenderRound1::round2 -> ReceiverRound2::round3
//! ```
//!
//! Each state is consumed by the next round, so rounds can't be run out of order,
//! and a failed execution can't be resumed. A new execution needs a new nonce.
use magikitten::Transcript;
use thiserror::Error;

use crate::{
    compat::{CSCurve, SerializablePoint},
    constants::{
        ENCODED_CHOICE_LABEL, EXECUTION_LABEL, PAD_LABEL, PUBLIC_KEY_LABEL, SHARED_POINT_LABEL,
    },
    crypto::Digest,
    serde::encode,
};

mod choice;
mod messages;
mod receiver;
mod sender;
mod setup;

pub use choice::ChoiceBit;
pub use messages::{
    ReceiveRound1Message, ReceiveRound2Message, SendRound1Message, SendRound2Message,
    SetupSendMessage, WireMessage,
};
pub use receiver::{Receiver, ReceiverRound1, ReceiverRound2};
pub use sender::{RandomOtSendOutput, Sender, SenderRound1};
pub use setup::{setup_receive, setup_send, SetupReceiveResult, SetupSendResult};

/// Represents an error which can happen during a random OT.
///
/// None of these can be recovered from: the execution needs to be restarted
/// from scratch.
#[derive(Debug, Error)]
pub enum RandomOtError {
    /// The proof for the sender's public key failed to verify.
    #[error("proof of the sender's public key is invalid")]
    ProofInvalid,
    /// The sender's openings don't match the challenge it sent.
    #[error("openings do not match the sender's challenge")]
    ChallengeMismatch,
    /// The sender's opening for our choice doesn't match our pad.
    #[error("opening does not match the receiver's pad")]
    DecommitmentMismatch,
    /// The receiver's response doesn't match the expected commitment.
    #[error("invalid response from the receiver")]
    InvalidResponse,
    /// Some message could not be decoded.
    #[error("failed to decode message: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

/// Fork a transcript for a single execution.
fn execution_transcript<C: CSCurve>(
    transcript: &Transcript,
    nonce: &[u8],
    big_b: &C::ProjectivePoint,
) -> Transcript {
    let mut out = transcript.forked(EXECUTION_LABEL, nonce);
    out.message(
        PUBLIC_KEY_LABEL,
        &encode(&SerializablePoint::<C>::from_projective(big_b)),
    );
    out
}

/// Derive a pad from the receiver's point, and the point shared with the sender.
///
/// This doesn't modify the execution transcript, so both pads can be derived from it.
fn derive_pad<C: CSCurve>(
    transcript: &Transcript,
    big_a: &SerializablePoint<C>,
    shared: &C::ProjectivePoint,
) -> Digest {
    let mut transcript = transcript.forked(ENCODED_CHOICE_LABEL, &encode(big_a));
    transcript.message(
        SHARED_POINT_LABEL,
        &encode(&SerializablePoint::<C>::from_projective(shared)),
    );
    Digest::challenge(&mut transcript, PAD_LABEL)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use k256::Secp256k1;
    use rand_core::OsRng;

    use super::*;

    fn setups() -> (
        Transcript,
        Arc<SetupSendResult<Secp256k1>>,
        Arc<SetupReceiveResult<Secp256k1>>,
    ) {
        let transcript = Transcript::new(b"test random ot");
        let (msg, send) = setup_send(&mut OsRng, &mut transcript.forked(b"setup", &[]));
        let receive = setup_receive(&mut transcript.forked(b"setup", &[]), &msg).unwrap();
        (transcript, Arc::new(send), Arc::new(receive))
    }

    /// Run the first two messages, returning the states before the openings.
    fn run_until_openings(choice: bool) -> (ReceiverRound1, SenderRound1, SendRound1Message) {
        let (transcript, send, receive) = setups();
        let receiver = Receiver::new(&transcript, b"nonce", choice.into(), receive);
        let sender = Sender::new(&transcript, b"nonce", send);

        let (receiver, msg) = receiver.round1(&mut OsRng);
        let (sender, msg) = sender.round1(&msg);
        (receiver, sender, msg)
    }

    #[test]
    fn test_honest_response_is_accepted() {
        for choice in [false, true] {
            let (receiver, sender, msg) = run_until_openings(choice);
            let (_, msg) = receiver.round2(&msg);
            assert!(sender.round2(&msg).is_ok());
        }
    }

    #[test]
    fn test_tampered_challenge_is_detected() {
        for choice in [false, true] {
            let (receiver, sender, mut msg) = run_until_openings(choice);
            let mut bytes = msg.challenge.bytes();
            bytes[5] ^= 0x01;
            msg.challenge = Digest::from_bytes(bytes);

            let (receiver, _) = receiver.round2(&msg);
            let res = receiver.round3(&sender.openings());
            assert!(matches!(res, Err(RandomOtError::ChallengeMismatch)));
        }
    }

    #[test]
    fn test_tampered_opening_is_detected() {
        for choice in [false, true] {
            let (receiver, sender, msg) = run_until_openings(choice);
            let (receiver, _) = receiver.round2(&msg);

            let mut openings = sender.openings();
            let mut bytes = openings.decommit0.bytes();
            bytes[0] ^= 0x80;
            openings.decommit0 = Digest::from_bytes(bytes);

            let res = receiver.round3(&openings);
            assert!(matches!(res, Err(RandomOtError::ChallengeMismatch)));
        }
    }

    #[test]
    fn test_swapped_openings_are_detected() {
        for choice in [false, true] {
            let (receiver, sender, msg) = run_until_openings(choice);
            let (receiver, _) = receiver.round2(&msg);

            let honest = sender.openings();
            let swapped = SendRound2Message {
                decommit0: honest.decommit1,
                decommit1: honest.decommit0,
            };

            let res = receiver.round3(&swapped);
            assert!(matches!(res, Err(RandomOtError::DecommitmentMismatch)));
        }
    }

    #[test]
    fn test_tampered_response_is_detected() {
        for choice in [false, true] {
            let (receiver, sender, msg) = run_until_openings(choice);
            let (_, mut msg) = receiver.round2(&msg);
            let mut bytes = msg.response.bytes();
            bytes[31] ^= 0x10;
            msg.response = Digest::from_bytes(bytes);

            let res = sender.round2(&msg);
            assert!(matches!(res, Err(RandomOtError::InvalidResponse)));
        }
    }

    #[test]
    fn test_nonce_separates_executions() {
        let (transcript, send, receive) = setups();
        let receiver = Receiver::new(&transcript, b"nonce 0", true.into(), receive);
        let sender = Sender::new(&transcript, b"nonce 1", send);

        let (receiver, msg) = receiver.round1(&mut OsRng);
        let (sender, msg) = sender.round1(&msg);
        let (_, msg) = receiver.round2(&msg);
        let res = sender.round2(&msg);
        assert!(matches!(res, Err(RandomOtError::InvalidResponse)));
    }
}
