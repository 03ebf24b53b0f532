use crate::name::Name;
use crate::packets::tlv_types;
use crate::tlv::{encode_non_negative_integer, encode_tlv_sequence, TlvElement, TlvError, TlvReader};
use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of NotBefore/NotAfter values, e.g. `20150814T223739`
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
const ISO_TIMESTAMP_LENGTH: usize = 15;

/// Signature types supported by the NDN protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureType {
    /// SHA256 digest only (no signature)
    DigestSha256,
    /// SHA256 with RSA signature
    Sha256WithRsa,
    /// SHA256 with ECDSA signature
    Sha256WithEcdsa,
    /// HMAC with SHA256
    HmacWithSha256,
}

impl SignatureType {
    pub fn code(self) -> u64 {
        match self {
            SignatureType::DigestSha256 => 0,
            SignatureType::Sha256WithRsa => 1,
            SignatureType::Sha256WithEcdsa => 3,
            SignatureType::HmacWithSha256 => 4,
        }
    }
}

impl TryFrom<u64> for SignatureType {
    type Error = TlvError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SignatureType::DigestSha256),
            1 => Ok(SignatureType::Sha256WithRsa),
            3 => Ok(SignatureType::Sha256WithEcdsa),
            4 => Ok(SignatureType::HmacWithSha256),
            other => Err(TlvError::MalformedStructure(format!(
                "unknown signature type {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignatureType::DigestSha256 => "DigestSha256",
            SignatureType::Sha256WithRsa => "SignatureSha256WithRsa",
            SignatureType::Sha256WithEcdsa => "SignatureSha256WithEcdsa",
            SignatureType::HmacWithSha256 => "SignatureHmacWithSha256",
        };
        f.write_str(name)
    }
}

/// Key locator for signatures and encrypted content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyLocator {
    #[default]
    None,
    KeyName(Name),
    KeyDigest(Vec<u8>),
}

impl KeyLocator {
    pub fn is_none(&self) -> bool {
        matches!(self, KeyLocator::None)
    }

    pub fn key_name(&self) -> Option<&Name> {
        match self {
            KeyLocator::KeyName(name) => Some(name),
            _ => None,
        }
    }

    pub fn key_digest(&self) -> Option<&[u8]> {
        match self {
            KeyLocator::KeyDigest(digest) => Some(digest),
            _ => None,
        }
    }

    /// The KeyLocator TLV, or `None` for the `None` variant
    fn element(&self) -> Option<TlvElement> {
        let value = match self {
            KeyLocator::None => return None,
            KeyLocator::KeyName(name) => name.encode(),
            KeyLocator::KeyDigest(digest) => TlvElement::new(tlv_types::KEY_DIGEST, digest.clone()).encode(),
        };
        Some(TlvElement::new(tlv_types::KEY_LOCATOR, value))
    }

    /// Encode as a KeyLocator TLV. `None` has no encoding.
    pub fn to_element(&self) -> Result<TlvElement, TlvError> {
        self.element().ok_or(TlvError::MissingField("key locator"))
    }

    /// Decode the value of a KeyLocator TLV: exactly one Name or KeyDigest
    pub fn decode_value(value: &[u8]) -> Result<Self, TlvError> {
        let mut reader = TlvReader::new(value);
        let key_locator = match reader.peek_type()? {
            None => {
                return Err(TlvError::MalformedStructure(
                    "KeyLocator has no Name or KeyDigest".to_string(),
                ))
            }
            Some(tlv_types::NAME) => {
                KeyLocator::KeyName(Name::decode_value(reader.read_expected(tlv_types::NAME)?)?)
            }
            Some(tlv_types::KEY_DIGEST) => {
                KeyLocator::KeyDigest(reader.read_expected(tlv_types::KEY_DIGEST)?.to_vec())
            }
            Some(actual) => {
                return Err(TlvError::UnexpectedType {
                    expected: tlv_types::NAME,
                    actual,
                })
            }
        };
        reader.finish()?;
        Ok(key_locator)
    }
}

/// Parse a `YYYYMMDDTHHMMSS` timestamp
pub fn parse_iso_timestamp(text: &str) -> Result<NaiveDateTime, TlvError> {
    let well_formed = text.len() == ISO_TIMESTAMP_LENGTH
        && text
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 8 { b == b'T' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(TlvError::InvalidTimestamp(text.to_string()));
    }
    NaiveDateTime::parse_from_str(text, ISO_TIMESTAMP_FORMAT)
        .map_err(|e| TlvError::InvalidTimestamp(format!("{}: {}", text, e)))
}

/// Format a timestamp as `YYYYMMDDTHHMMSS`, dropping fractional seconds
pub fn to_iso_string(time: &NaiveDateTime) -> String {
    time.format(ISO_TIMESTAMP_FORMAT).to_string()
}

fn floor_to_second(time: NaiveDateTime) -> NaiveDateTime {
    time - TimeDelta::nanoseconds(time.nanosecond() as i64)
}

fn ceil_to_second(time: NaiveDateTime) -> Result<NaiveDateTime, TlvError> {
    let floored = floor_to_second(time);
    if floored == time {
        return Ok(time);
    }
    floored
        .checked_add_signed(TimeDelta::seconds(1))
        .ok_or_else(|| TlvError::InvalidTimestamp(format!("{} cannot be rounded up", time)))
}

/// Only years 0 to 9999 fit the four-digit year of the wire format
fn check_encodable(time: NaiveDateTime) -> Result<NaiveDateTime, TlvError> {
    if (0..=9999).contains(&time.year()) {
        Ok(time)
    } else {
        Err(TlvError::InvalidTimestamp(format!(
            "{} is outside years 0000 to 9999",
            time
        )))
    }
}

/// Inclusive window during which a certificate is valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValidityWindow")]
pub struct ValidityPeriod {
    not_before: NaiveDateTime,
    not_after: NaiveDateTime,
}

#[derive(Deserialize)]
struct ValidityWindow {
    not_before: NaiveDateTime,
    not_after: NaiveDateTime,
}

impl TryFrom<ValidityWindow> for ValidityPeriod {
    type Error = TlvError;

    fn try_from(window: ValidityWindow) -> Result<Self, Self::Error> {
        Self::new(window.not_before, window.not_after)
    }
}

impl ValidityPeriod {
    /// Whole-second precision only: `not_before` is rounded up and
    /// `not_after` rounded down. Both bounds must fall in years 0 to 9999.
    pub fn new(not_before: NaiveDateTime, not_after: NaiveDateTime) -> Result<Self, TlvError> {
        Ok(Self {
            not_before: check_encodable(ceil_to_second(not_before)?)?,
            not_after: check_encodable(floor_to_second(not_after))?,
        })
    }

    pub fn not_before(&self) -> NaiveDateTime {
        self.not_before
    }

    pub fn not_after(&self) -> NaiveDateTime {
        self.not_after
    }

    /// `not_before <= time <= not_after`
    pub fn is_valid(&self, time: NaiveDateTime) -> bool {
        self.not_before <= time && time <= self.not_after
    }

    pub fn to_element(&self) -> TlvElement {
        let value = encode_tlv_sequence(&[
            TlvElement::new(tlv_types::NOT_BEFORE, to_iso_string(&self.not_before).into_bytes()),
            TlvElement::new(tlv_types::NOT_AFTER, to_iso_string(&self.not_after).into_bytes()),
        ]);
        TlvElement::new(tlv_types::VALIDITY_PERIOD, value)
    }

    /// Decode the value of a ValidityPeriod TLV: NotBefore then NotAfter
    pub fn decode_value(value: &[u8]) -> Result<Self, TlvError> {
        let mut reader = TlvReader::new(value);
        let not_before = decode_timestamp(reader.read_expected(tlv_types::NOT_BEFORE)?)?;
        let not_after = decode_timestamp(reader.read_expected(tlv_types::NOT_AFTER)?)?;
        reader.finish()?;
        Ok(Self {
            not_before,
            not_after,
        })
    }
}

fn decode_timestamp(value: &[u8]) -> Result<NaiveDateTime, TlvError> {
    let text = std::str::from_utf8(value)
        .map_err(|_| TlvError::InvalidTimestamp(format!("non-ASCII bytes {:02X?}", value)))?;
    parse_iso_timestamp(text)
}

/// SignatureInfo fields together with the SignatureValue bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub signature_type: SignatureType,
    pub key_locator: KeyLocator,
    pub validity_period: Option<ValidityPeriod>,
    pub value: Vec<u8>,
}

impl Signature {
    /// Create a new signature with specified type
    pub fn new(signature_type: SignatureType) -> Self {
        Self {
            signature_type,
            key_locator: KeyLocator::None,
            validity_period: None,
            value: Vec::new(),
        }
    }

    /// Set the key locator for this signature
    pub fn with_key_locator(mut self, key_locator: KeyLocator) -> Self {
        self.key_locator = key_locator;
        self
    }

    pub fn with_validity_period(mut self, validity_period: ValidityPeriod) -> Self {
        self.validity_period = Some(validity_period);
        self
    }

    /// Set the signature value
    pub fn with_value(mut self, value: Vec<u8>) -> Self {
        self.value = value;
        self
    }

    /// SignatureInfo TLV: SignatureType, KeyLocator?, ValidityPeriod?
    pub fn info_element(&self) -> TlvElement {
        let mut elements = vec![TlvElement::new(
            tlv_types::SIGNATURE_TYPE,
            encode_non_negative_integer(self.signature_type.code()),
        )];

        // A `None` locator is simply absent from SignatureInfo
        if let Some(key_locator) = self.key_locator.element() {
            elements.push(key_locator);
        }

        if let Some(validity_period) = &self.validity_period {
            elements.push(validity_period.to_element());
        }

        TlvElement::new(tlv_types::SIGNATURE_INFO, encode_tlv_sequence(&elements))
    }

    pub fn value_element(&self) -> TlvElement {
        TlvElement::new(tlv_types::SIGNATURE_VALUE, self.value.clone())
    }

    /// Decode the value of a SignatureInfo TLV. The returned signature has
    /// an empty `value`; the caller fills it from SignatureValue.
    pub fn decode_info(value: &[u8]) -> Result<Self, TlvError> {
        let mut reader = TlvReader::new(value);
        let signature_type = SignatureType::try_from(reader.read_non_negative_integer(tlv_types::SIGNATURE_TYPE)?)?;
        let key_locator = reader
            .read_optional(tlv_types::KEY_LOCATOR)?
            .map(KeyLocator::decode_value)
            .transpose()?
            .unwrap_or_default();
        let validity_period = reader
            .read_optional(tlv_types::VALIDITY_PERIOD)?
            .map(ValidityPeriod::decode_value)
            .transpose()?;
        reader.finish()?;

        Ok(Self {
            signature_type,
            key_locator,
            validity_period,
            value: Vec::new(),
        })
    }
}
