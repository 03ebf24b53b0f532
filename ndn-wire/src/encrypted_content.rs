use crate::packets::tlv_types;
use crate::signature::KeyLocator;
use crate::tlv::{encode_non_negative_integer, encode_tlv_sequence, TlvElement, TlvError, TlvReader};
use log::debug;
use serde::{Deserialize, Serialize};

/// Algorithm used to produce an encrypted payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncryptAlgorithmType {
    AesEcb,
    AesCbc,
    RsaPkcs,
    RsaOaep,
}

impl EncryptAlgorithmType {
    pub fn code(self) -> u64 {
        match self {
            EncryptAlgorithmType::AesEcb => 0,
            EncryptAlgorithmType::AesCbc => 1,
            EncryptAlgorithmType::RsaPkcs => 2,
            EncryptAlgorithmType::RsaOaep => 3,
        }
    }
}

impl TryFrom<u64> for EncryptAlgorithmType {
    type Error = TlvError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EncryptAlgorithmType::AesEcb),
            1 => Ok(EncryptAlgorithmType::AesCbc),
            2 => Ok(EncryptAlgorithmType::RsaPkcs),
            3 => Ok(EncryptAlgorithmType::RsaOaep),
            other => Err(TlvError::MalformedStructure(format!(
                "unknown encryption algorithm {}",
                other
            ))),
        }
    }
}

/// Payload encrypted under a named or digested key.
///
/// Wire layout, in this exact order:
/// `EncryptedContent { KeyLocator, EncryptedAlgorithm, InitialVector?, EncryptedPayload }`
///
/// A fresh value has every field unset; unset differs from present-but-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedContent {
    algorithm_type: Option<EncryptAlgorithmType>,
    key_locator: KeyLocator,
    initial_vector: Option<Vec<u8>>,
    payload: Option<Vec<u8>>,
}

impl EncryptedContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm_type(&self) -> Option<EncryptAlgorithmType> {
        self.algorithm_type
    }

    pub fn set_algorithm_type(&mut self, algorithm_type: EncryptAlgorithmType) -> &mut Self {
        self.algorithm_type = Some(algorithm_type);
        self
    }

    pub fn key_locator(&self) -> &KeyLocator {
        &self.key_locator
    }

    pub fn set_key_locator(&mut self, key_locator: KeyLocator) -> &mut Self {
        self.key_locator = key_locator;
        self
    }

    pub fn initial_vector(&self) -> Option<&[u8]> {
        self.initial_vector.as_deref()
    }

    pub fn set_initial_vector(&mut self, initial_vector: Vec<u8>) -> &mut Self {
        self.initial_vector = Some(initial_vector);
        self
    }

    pub fn clear_initial_vector(&mut self) -> &mut Self {
        self.initial_vector = None;
        self
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn set_payload(&mut self, payload: Vec<u8>) -> &mut Self {
        self.payload = Some(payload);
        self
    }

    /// Encode to wire format. Algorithm, key locator and payload are
    /// mandatory; the InitialVector element is left out when unset.
    pub fn encode(&self) -> Result<Vec<u8>, TlvError> {
        let algorithm_type = self.algorithm_type.ok_or(TlvError::MissingField("algorithm type"))?;
        let payload = self.payload.as_ref().ok_or(TlvError::MissingField("payload"))?;

        let mut elements = vec![
            self.key_locator.to_element()?,
            TlvElement::new(
                tlv_types::ENCRYPTION_ALGORITHM,
                encode_non_negative_integer(algorithm_type.code()),
            ),
        ];
        if let Some(initial_vector) = &self.initial_vector {
            elements.push(TlvElement::new(tlv_types::INITIAL_VECTOR, initial_vector.clone()));
        }
        elements.push(TlvElement::new(tlv_types::ENCRYPTED_PAYLOAD, payload.clone()));

        Ok(TlvElement::new(tlv_types::ENCRYPTED_CONTENT, encode_tlv_sequence(&elements)).encode())
    }

    /// Decode from wire format, returning the content and bytes consumed
    pub fn decode(data: &[u8]) -> Result<(Self, usize), TlvError> {
        let mut outer = TlvReader::new(data);
        let value = outer.read_expected(tlv_types::ENCRYPTED_CONTENT)?;
        let consumed = outer.offset();

        if value.is_empty() {
            return Err(TlvError::MalformedStructure(
                "EncryptedContent has no children".to_string(),
            ));
        }

        let mut reader = TlvReader::new(value);
        let key_locator = KeyLocator::decode_value(reader.read_expected(tlv_types::KEY_LOCATOR)?)?;
        let algorithm_type =
            EncryptAlgorithmType::try_from(reader.read_non_negative_integer(tlv_types::ENCRYPTION_ALGORITHM)?)?;
        let initial_vector = reader.read_optional(tlv_types::INITIAL_VECTOR)?.map(<[u8]>::to_vec);
        let payload = reader.read_expected(tlv_types::ENCRYPTED_PAYLOAD)?.to_vec();
        reader.finish()?;

        debug!(
            "Decoded EncryptedContent ({:?}, {} byte payload)",
            algorithm_type,
            payload.len()
        );

        Ok((
            Self {
                algorithm_type: Some(algorithm_type),
                key_locator,
                initial_vector,
                payload: Some(payload),
            },
            consumed,
        ))
    }
}
