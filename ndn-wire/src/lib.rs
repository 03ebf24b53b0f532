//! NDN-TLV wire codec for Data packets, CertificateV2 and EncryptedContent.
//!
//! Decoding is strict: every child element is tag-checked in grammar order
//! and anything left over is an error. Encoding always re-serializes from
//! the current field values.

pub mod certificate;
pub mod encrypted_content;
pub mod name;
pub mod packets;
pub mod signature;
pub mod tlv;

#[cfg(test)]
mod strategies;
#[cfg(test)]
mod test_vectors;

pub use certificate::CertificateV2;
pub use encrypted_content::{EncryptAlgorithmType, EncryptedContent};
pub use name::{ComponentClass, ComponentType, Name, NameComponent, NameParseError};
pub use packets::{tlv_types, ContentType, Data, MetaInfo, ValidationConfig, ValidationError};
pub use signature::{parse_iso_timestamp, to_iso_string, KeyLocator, Signature, SignatureType, ValidityPeriod};
pub use tlv::{TlvElement, TlvError, TlvReader};
