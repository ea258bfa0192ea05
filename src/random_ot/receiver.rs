use std::sync::Arc;

use elliptic_curve::{Field, Group};
use magikitten::Transcript;
use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use tracing::{error, instrument};

use crate::{compat::CSCurve, crypto::Digest};

use super::{
    derive_pad, execution_transcript, ChoiceBit, RandomOtError, ReceiveRound1Message,
    ReceiveRound2Message, SendRound1Message, SendRound2Message, SetupReceiveResult,
};

/// The receiver of a single random OT execution, before anything was sent.
pub struct Receiver<C: CSCurve> {
    transcript: Transcript,
    choice: ChoiceBit,
    setup: Arc<SetupReceiveResult<C>>,
}

/// The receiver after sending the first message.
pub struct ReceiverRound1 {
    choice: ChoiceBit,
    rand_choice: Digest,
}

/// The receiver after answering the sender's challenge.
pub struct ReceiverRound2 {
    choice: ChoiceBit,
    rand_choice: Digest,
    challenge: Digest,
    double_hash: Digest,
}

impl<C: CSCurve> Receiver<C> {
    /// Prepare the receiver for a single execution.
    ///
    /// The nonce has to be unique for each execution sharing the same setup
    /// and transcript, and agreed upon with the sender.
    pub fn new(
        transcript: &Transcript,
        nonce: &[u8],
        choice: ChoiceBit,
        setup: Arc<SetupReceiveResult<C>>,
    ) -> Self {
        let transcript = execution_transcript::<C>(transcript, nonce, setup.public_point());
        Self {
            transcript,
            choice,
            setup,
        }
    }

    /// Start the execution, producing the first message.
    #[instrument(level = "debug", skip_all)]
    pub fn round1(
        self,
        rng: &mut impl CryptoRngCore,
    ) -> (ReceiverRound1, ReceiveRound1Message<C>) {
        // A = a * G + choice * B
        // randChoice = H(A, a * B)
        let big_b = self.setup.public_point();
        let a = C::Scalar::random(rng);
        let choice_scalar = self.choice.select(&C::Scalar::ZERO, &C::Scalar::ONE);
        let big_a = C::ProjectivePoint::generator() * a + *big_b * choice_scalar;

        let msg = ReceiveRound1Message::<C>::new(&big_a);
        let rand_choice = derive_pad::<C>(&self.transcript, &msg.big_a, &(*big_b * a));

        let next = ReceiverRound1 {
            choice: self.choice,
            rand_choice,
        };
        (next, msg)
    }
}

impl ReceiverRound1 {
    /// Answer the sender's challenge.
    ///
    /// The response is `H(H(randChoice)) ^ (choice * challenge)`, which is
    /// `H(H(rand0))` for an honest sender, whatever the choice.
    #[instrument(level = "debug", skip_all)]
    pub fn round2(self, msg: &SendRound1Message) -> (ReceiverRound2, ReceiveRound2Message) {
        let double_hash = self.rand_choice.hash().hash();
        let response = self.choice.mask_xor(&double_hash, &msg.challenge);

        let next = ReceiverRound2 {
            choice: self.choice,
            rand_choice: self.rand_choice,
            challenge: msg.challenge,
            double_hash,
        };
        (next, ReceiveRound2Message { response })
    }
}

impl ReceiverRound2 {
    /// Check the sender's openings, and return the pad matching our choice.
    #[instrument(skip_all, err(Debug))]
    pub fn round3(self, msg: &SendRound2Message) -> Result<Digest, RandomOtError> {
        let h_decommit0 = msg.decommit0.hash();
        let h_decommit1 = msg.decommit1.hash();

        let actual_challenge = h_decommit0 ^ h_decommit1;
        if !bool::from(actual_challenge.ct_eq(&self.challenge)) {
            error!("openings do not match the challenge");
            return Err(RandomOtError::ChallengeMismatch);
        }

        let h_decommit_choice = self.choice.select(&h_decommit0, &h_decommit1);
        if !bool::from(h_decommit_choice.ct_eq(&self.double_hash)) {
            error!("opening for our choice does not match our pad");
            return Err(RandomOtError::DecommitmentMismatch);
        }

        Ok(self.rand_choice)
    }
}
