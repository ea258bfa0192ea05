use elliptic_curve::ScalarPrimitive;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

use crate::compat::CSCurve;

/// Encode an arbitrary serializable value into a vec.
pub fn encode<T: Serialize + ?Sized>(val: &T) -> Vec<u8> {
    rmp_serde::encode::to_vec(val).expect("failed to encode value")
}

/// Decode a value produced by [encode].
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::decode::from_slice(data)
}

/// Serialize a single projective point.
pub fn serialize_projective_point<C: CSCurve, S: Serializer>(
    data: &C::ProjectivePoint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    C::serialize_point(&(*data).into(), serializer)
}

/// Serialize a scalar, as its canonical big endian encoding.
pub fn serialize_scalar<C: CSCurve, S: Serializer>(
    data: &C::Scalar,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let primitive: ScalarPrimitive<C> = (*data).into();
    primitive.serialize(serializer)
}

/// Deserialize a scalar, rejecting values which aren't reduced.
pub fn deserialize_scalar<'de, C: CSCurve, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<C::Scalar, D::Error> {
    ScalarPrimitive::<C>::deserialize(deserializer).map(C::Scalar::from)
}
