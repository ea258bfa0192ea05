use std::sync::Arc;

use magikitten::Transcript;
use subtle::ConstantTimeEq;
use tracing::{error, instrument};

use crate::{compat::CSCurve, crypto::Digest};

use super::{
    derive_pad, execution_transcript, RandomOtError, ReceiveRound1Message, ReceiveRound2Message,
    SendRound1Message, SendRound2Message, SetupSendResult,
};

/// The sender of a single random OT execution, before anything was received.
pub struct Sender<C: CSCurve> {
    transcript: Transcript,
    setup: Arc<SetupSendResult<C>>,
}

/// The sender after issuing its challenge.
pub struct SenderRound1 {
    rand0: Digest,
    rand1: Digest,
    decommit0: Digest,
    decommit1: Digest,
    h_decommit0: Digest,
}

/// The output of the sender: both of the pads.
///
/// The receiver gets exactly one of these, without us learning which.
#[derive(Debug, Clone, Copy)]
pub struct RandomOtSendOutput {
    pub rand0: Digest,
    pub rand1: Digest,
}

impl<C: CSCurve> Sender<C> {
    /// Prepare the sender for a single execution.
    ///
    /// The nonce has to be unique for each execution sharing the same setup
    /// and transcript, and agreed upon with the receiver.
    pub fn new(transcript: &Transcript, nonce: &[u8], setup: Arc<SetupSendResult<C>>) -> Self {
        let transcript = execution_transcript::<C>(transcript, nonce, setup.public_point());
        Self { transcript, setup }
    }

    /// Derive both pads from the receiver's point, and commit to them.
    #[instrument(level = "debug", skip_all)]
    pub fn round1(self, msg: &ReceiveRound1Message<C>) -> (SenderRound1, SendRound1Message) {
        // rand0 = H(A, b * A)
        // rand1 = H(A, b * (A - B))
        let b = self.setup.secret_key();
        let big_b = self.setup.public_point();
        let big_a = msg.big_a.to_projective();

        let rand0 = derive_pad::<C>(&self.transcript, &msg.big_a, &(big_a * b));
        let rand1 = derive_pad::<C>(&self.transcript, &msg.big_a, &((big_a - *big_b) * b));

        let decommit0 = rand0.hash();
        let decommit1 = rand1.hash();
        let h_decommit0 = decommit0.hash();
        let challenge = decommit1.hash() ^ h_decommit0;

        let next = SenderRound1 {
            rand0,
            rand1,
            decommit0,
            decommit1,
            h_decommit0,
        };
        (next, SendRound1Message { challenge })
    }
}

impl SenderRound1 {
    /// Check the receiver's response, then open both commitments.
    #[instrument(skip_all, err(Debug))]
    pub fn round2(
        self,
        msg: &ReceiveRound2Message,
    ) -> Result<(SendRound2Message, RandomOtSendOutput), RandomOtError> {
        if !bool::from(msg.response.ct_eq(&self.h_decommit0)) {
            error!("response does not match our commitment");
            return Err(RandomOtError::InvalidResponse);
        }

        let msg = SendRound2Message {
            decommit0: self.decommit0,
            decommit1: self.decommit1,
        };
        let out = RandomOtSendOutput {
            rand0: self.rand0,
            rand1: self.rand1,
        };
        Ok((msg, out))
    }

    /// The openings, sent regardless of the response.
    #[cfg(test)]
    pub(crate) fn openings(&self) -> SendRound2Message {
        SendRound2Message {
            decommit0: self.decommit0,
            decommit1: self.decommit1,
        }
    }
}
