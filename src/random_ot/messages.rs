use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    compat::{CSCurve, SerializablePoint},
    crypto::Digest,
    proofs::dlog,
    serde::{decode, encode},
};

use super::RandomOtError;

/// A message which can be put on the wire.
///
/// Messages are encoded with MessagePack. Byte strings have a fixed length,
/// so a message with a short or long field fails to decode.
pub trait WireMessage: Serialize + DeserializeOwned {
    fn to_bytes(&self) -> Vec<u8> {
        encode(self)
    }

    fn from_bytes(data: &[u8]) -> Result<Self, RandomOtError> {
        Ok(decode(data)?)
    }
}

/// The message the sender produces during setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "C: CSCurve")]
pub struct SetupSendMessage<C: CSCurve> {
    pub(crate) big_b: SerializablePoint<C>,
    pub(crate) proof: dlog::Proof<C>,
}

impl<C: CSCurve> SetupSendMessage<C> {
    /// The public key the sender will use for every execution.
    pub fn public_key(&self) -> C::AffinePoint {
        self.big_b.to_projective().into()
    }
}

/// The first message of an execution, from the receiver to the sender.
///
/// This contains `A = a * G + choice * B`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(bound = "C: CSCurve")]
pub struct ReceiveRound1Message<C: CSCurve> {
    pub big_a: SerializablePoint<C>,
}

impl<C: CSCurve> ReceiveRound1Message<C> {
    pub(crate) fn new(big_a: &C::ProjectivePoint) -> Self {
        Self {
            big_a: SerializablePoint::from_projective(big_a),
        }
    }
}

/// The sender's challenge, `H(H(rand1)) ^ H(H(rand0))`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SendRound1Message {
    pub challenge: Digest,
}

/// The receiver's response to the challenge, which should be `H(H(rand0))`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReceiveRound2Message {
    pub response: Digest,
}

/// The sender's openings, `H(rand0)` and `H(rand1)`.
///
/// This is the last message of an execution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SendRound2Message {
    pub decommit0: Digest,
    pub decommit1: Digest,
}

impl<C: CSCurve> WireMessage for SetupSendMessage<C> {}
impl<C: CSCurve> WireMessage for ReceiveRound1Message<C> {}
impl WireMessage for SendRound1Message {}
impl WireMessage for ReceiveRound2Message {}
impl WireMessage for SendRound2Message {}
