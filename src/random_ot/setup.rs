use elliptic_curve::{Field, Group};
use magikitten::Transcript;
use rand_core::CryptoRngCore;
use tracing::{error, instrument};

use crate::{
    compat::{CSCurve, SerializablePoint},
    constants::SETUP_LABEL,
    proofs::dlog,
};

use super::{RandomOtError, SetupSendMessage};

/// The result of the setup, for the sender.
///
/// This holds the long term secret key, and can be shared between any number
/// of executions, usually behind an `Arc`.
pub struct SetupSendResult<C: CSCurve> {
    b: C::Scalar,
    big_b: C::ProjectivePoint,
}

impl<C: CSCurve> SetupSendResult<C> {
    pub fn public_key(&self) -> C::AffinePoint {
        self.big_b.into()
    }

    pub(crate) fn secret_key(&self) -> &C::Scalar {
        &self.b
    }

    pub(crate) fn public_point(&self) -> &C::ProjectivePoint {
        &self.big_b
    }
}

/// The result of the setup, for the receiver.
///
/// This holds the sender's verified public key.
#[derive(Debug, Clone)]
pub struct SetupReceiveResult<C: CSCurve> {
    big_b: C::ProjectivePoint,
}

impl<C: CSCurve> SetupReceiveResult<C> {
    pub fn public_key(&self) -> C::AffinePoint {
        self.big_b.into()
    }

    pub(crate) fn public_point(&self) -> &C::ProjectivePoint {
        &self.big_b
    }
}

/// Run the sender's side of the setup.
///
/// The transcript ties the setup to whatever context it's run in; the
/// receiver needs a transcript in the same state.
pub fn setup_send<C: CSCurve>(
    rng: &mut impl CryptoRngCore,
    transcript: &mut Transcript,
) -> (SetupSendMessage<C>, SetupSendResult<C>) {
    transcript.message(SETUP_LABEL, C::NAME);

    let b = C::Scalar::random(&mut *rng);
    let big_b = C::ProjectivePoint::generator() * b;

    let proof = dlog::prove(
        rng,
        transcript,
        dlog::Statement::<C> { public: &big_b },
        dlog::Witness { x: &b },
    );

    let msg = SetupSendMessage {
        big_b: SerializablePoint::from_projective(&big_b),
        proof,
    };
    (msg, SetupSendResult { b, big_b })
}

/// Run the receiver's side of the setup, checking the sender's proof.
#[instrument(skip_all, err(Debug))]
pub fn setup_receive<C: CSCurve>(
    transcript: &mut Transcript,
    msg: &SetupSendMessage<C>,
) -> Result<SetupReceiveResult<C>, RandomOtError> {
    transcript.message(SETUP_LABEL, C::NAME);

    let big_b = msg.big_b.to_projective();
    if bool::from(big_b.is_identity()) {
        error!("sender public key is the identity");
        return Err(RandomOtError::ProofInvalid);
    }

    let statement = dlog::Statement::<C> { public: &big_b };
    if !dlog::verify(transcript, statement, &msg.proof) {
        error!("proof of the sender's secret key failed to verify");
        return Err(RandomOtError::ProofInvalid);
    }

    Ok(SetupReceiveResult { big_b })
}
