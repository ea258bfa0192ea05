/// The security parameter we use for the random OT, in bits.
pub const SECURITY_PARAMETER: usize = 256;
/// The security parameter in bytes, which is the length of every digest and pad.
pub const SECURITY_BYTES: usize = (SECURITY_PARAMETER + 8 - 1) / 8;

/// Label binding the setup proof to this protocol.
pub(crate) const SETUP_LABEL: &[u8] = b"cait-sith-rot v0.1.0 setup";
/// Label used when forking a transcript for a single execution.
pub(crate) const EXECUTION_LABEL: &[u8] = b"cait-sith-rot v0.1.0 execution";
/// Label for absorbing the sender's public key into an execution transcript.
pub(crate) const PUBLIC_KEY_LABEL: &[u8] = b"sender public key";
/// Label for absorbing the receiver's point when deriving a pad.
pub(crate) const ENCODED_CHOICE_LABEL: &[u8] = b"encoded choice";
/// Label for absorbing the shared point when deriving a pad.
pub(crate) const SHARED_POINT_LABEL: &[u8] = b"shared point";
/// Label for squeezing a pad out of the transcript.
pub(crate) const PAD_LABEL: &[u8] = b"pad";
/// Domain separator for the digests used by the commitments.
pub(crate) const DIGEST_LABEL: &[u8] = b"cait-sith-rot v0.1.0 digest";
