use crate::name::{ComponentType, Name, NameComponent};
use crate::signature::Signature;
use crate::tlv::{
    encode_non_negative_integer, encode_tlv_sequence, TlvElement, TlvError, TlvReader,
};
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::Duration;

/// TLV Type constants for NDN packets
pub mod tlv_types {
    pub const DATA: u64 = 0x06;
    pub const NAME: u64 = 0x07;
    pub const NAME_COMPONENT: u64 = 0x08;
    pub const IMPLICIT_SHA256_DIGEST_COMPONENT: u64 = 0x01;
    pub const PARAMETERS_SHA256_DIGEST_COMPONENT: u64 = 0x02;
    pub const META_INFO: u64 = 0x14;
    pub const CONTENT: u64 = 0x15;
    pub const SIGNATURE_INFO: u64 = 0x16;
    pub const SIGNATURE_VALUE: u64 = 0x17;
    pub const CONTENT_TYPE: u64 = 0x18;
    pub const FRESHNESS_PERIOD: u64 = 0x19;
    pub const FINAL_BLOCK_ID: u64 = 0x1A;
    pub const SIGNATURE_TYPE: u64 = 0x1B;
    pub const KEY_LOCATOR: u64 = 0x1C;
    pub const KEY_DIGEST: u64 = 0x1D;
    /// Written as FD 00 FD on the wire
    pub const VALIDITY_PERIOD: u64 = 0xFD;
    pub const NOT_BEFORE: u64 = 0xFE;
    pub const NOT_AFTER: u64 = 0xFF;

    pub const ENCRYPTED_CONTENT: u64 = 0x82;
    pub const ENCRYPTION_ALGORITHM: u64 = 0x83;
    pub const ENCRYPTED_PAYLOAD: u64 = 0x84;
    pub const INITIAL_VECTOR: u64 = 0x85;
}

/// Content type for Data packets.
///
/// Codes 0 to 3 always use their named variant: `from_code`, serde and the
/// MetaInfo setters turn `Other(2)` into `Key` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum ContentType {
    #[default]
    Blob,
    Link,
    Key,
    Nack,
    Other(u64),
}

impl ContentType {
    pub fn code(self) -> u64 {
        match self {
            ContentType::Blob => 0,
            ContentType::Link => 1,
            ContentType::Key => 2,
            ContentType::Nack => 3,
            ContentType::Other(code) => code,
        }
    }

    pub fn from_code(code: u64) -> Self {
        match code {
            0 => ContentType::Blob,
            1 => ContentType::Link,
            2 => ContentType::Key,
            3 => ContentType::Nack,
            other => ContentType::Other(other),
        }
    }

    /// The named variant for known codes, `self` otherwise
    pub fn canonical(self) -> Self {
        Self::from_code(self.code())
    }
}

impl From<u64> for ContentType {
    fn from(code: u64) -> Self {
        Self::from_code(code)
    }
}

impl From<ContentType> for u64 {
    fn from(content_type: ContentType) -> Self {
        content_type.code()
    }
}

/// MetaInfo for Data packets.
///
/// FreshnessPeriod is kept in whole milliseconds, the unit it has on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaInfo {
    content_type: ContentType,
    freshness_period_ms: Option<u64>,
    final_block_id: Option<NameComponent>,
}

impl MetaInfo {
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn set_content_type(&mut self, content_type: ContentType) -> &mut Self {
        self.content_type = content_type.canonical();
        self
    }

    pub fn freshness_period(&self) -> Option<Duration> {
        self.freshness_period_ms.map(Duration::from_millis)
    }

    /// Sub-millisecond precision is dropped; periods beyond `u64::MAX`
    /// milliseconds saturate.
    pub fn set_freshness_period(&mut self, freshness_period: Duration) -> &mut Self {
        self.freshness_period_ms = Some(u64::try_from(freshness_period.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn final_block_id(&self) -> Option<&NameComponent> {
        self.final_block_id.as_ref()
    }

    pub fn set_final_block_id(&mut self, final_block_id: NameComponent) -> &mut Self {
        self.final_block_id = Some(final_block_id);
        self
    }

    /// Encode MetaInfo to TLV format. ContentType is left out when it is
    /// the default `Blob`.
    pub fn to_element(&self) -> TlvElement {
        let mut elements = Vec::new();

        if self.content_type != ContentType::default() {
            elements.push(TlvElement::new(
                tlv_types::CONTENT_TYPE,
                encode_non_negative_integer(self.content_type.code()),
            ));
        }

        if let Some(freshness_ms) = self.freshness_period_ms {
            elements.push(TlvElement::new(
                tlv_types::FRESHNESS_PERIOD,
                encode_non_negative_integer(freshness_ms),
            ));
        }

        if let Some(final_block_id) = &self.final_block_id {
            elements.push(TlvElement::new(tlv_types::FINAL_BLOCK_ID, final_block_id.encode()));
        }

        TlvElement::new(tlv_types::META_INFO, encode_tlv_sequence(&elements))
    }

    /// Decode MetaInfo from the value of a MetaInfo TLV
    pub fn decode_value(value: &[u8]) -> Result<Self, TlvError> {
        let mut reader = TlvReader::new(value);
        let mut meta_info = MetaInfo::default();

        if let Some(code) = reader.read_optional_non_negative_integer(tlv_types::CONTENT_TYPE)? {
            meta_info.content_type = ContentType::from_code(code);
        }
        meta_info.freshness_period_ms = reader.read_optional_non_negative_integer(tlv_types::FRESHNESS_PERIOD)?;
        if let Some(block_id) = reader.read_optional(tlv_types::FINAL_BLOCK_ID)? {
            let (component, consumed) = NameComponent::decode(block_id)?;
            if consumed != block_id.len() {
                return Err(TlvError::MalformedStructure(
                    "FinalBlockId must hold exactly one name component".to_string(),
                ));
            }
            meta_info.final_block_id = Some(component);
        }
        reader.finish()?;

        Ok(meta_info)
    }
}

/// Data packet structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    pub name: Name,
    pub meta_info: MetaInfo,
    pub content: Vec<u8>,
    pub signature: Option<Signature>,
}

impl Data {
    /// Create a new Data packet with the given name and content
    pub fn new(name: Name, content: Vec<u8>) -> Self {
        Self {
            name,
            meta_info: MetaInfo::default(),
            content,
            signature: None,
        }
    }

    /// Set the MetaInfo for this Data packet
    pub fn with_meta_info(mut self, meta_info: MetaInfo) -> Self {
        self.meta_info = meta_info;
        self
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.meta_info.set_content_type(content_type);
        self
    }

    /// Set the freshness period
    pub fn with_freshness_period(mut self, freshness_period: Duration) -> Self {
        self.meta_info.set_freshness_period(freshness_period);
        self
    }

    /// Set the signature info and value
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Encode Data packet to TLV wire format.
    ///
    /// MetaInfo and Content are always written; a Data packet without a
    /// signature cannot be encoded.
    pub fn encode(&self) -> Result<Vec<u8>, TlvError> {
        let signature = self.signature.as_ref().ok_or(TlvError::MissingField("signature"))?;

        let elements = vec![
            self.name.to_element(),
            self.meta_info.to_element(),
            TlvElement::new(tlv_types::CONTENT, self.content.clone()),
            signature.info_element(),
            signature.value_element(),
        ];

        let data_content = encode_tlv_sequence(&elements);
        Ok(TlvElement::new(tlv_types::DATA, data_content).encode())
    }

    /// Decode Data packet from TLV wire format.
    ///
    /// Children are read in packet order: Name, MetaInfo?, Content?,
    /// SignatureInfo, SignatureValue. Anything else is rejected.
    pub fn decode(data: &[u8]) -> Result<(Self, usize), TlvError> {
        let mut outer = TlvReader::new(data);
        let value = outer.read_expected(tlv_types::DATA)?;
        let consumed = outer.offset();

        let mut reader = TlvReader::new(value);
        let name = Name::decode_value(reader.read_expected(tlv_types::NAME)?)?;
        let meta_info = reader
            .read_optional(tlv_types::META_INFO)?
            .map(MetaInfo::decode_value)
            .transpose()?
            .unwrap_or_default();
        let content = reader
            .read_optional(tlv_types::CONTENT)?
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        let mut signature = Signature::decode_info(reader.read_expected(tlv_types::SIGNATURE_INFO)?)?;
        signature.value = reader.read_expected(tlv_types::SIGNATURE_VALUE)?.to_vec();
        reader.finish()?;

        debug!("Decoded Data {} ({} bytes)", name, consumed);

        Ok((
            Data {
                name,
                meta_info,
                content,
                signature: Some(signature),
            },
            consumed,
        ))
    }

    /// The name with an implicit SHA-256 digest component of the full
    /// encoding appended
    pub fn full_name(&self) -> Result<Name, TlvError> {
        let digest = Sha256::digest(self.encode()?);
        let mut full_name = self.name.clone();
        full_name.push(NameComponent::with_type(
            digest.to_vec(),
            ComponentType::ImplicitSha256Digest,
        ));
        Ok(full_name)
    }
}

// Validation functions for packet integrity

/// Validation errors for packets
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty name is not allowed")]
    EmptyName,
    #[error("Name too deep: {depth} components (max: {max})")]
    NameTooDeep { depth: usize, max: usize },
    #[error("Name component too large: {size} bytes (max: {max})")]
    NameComponentTooLarge { size: usize, max: usize },
    #[error("Content too large: {size} bytes (max: {max})")]
    ContentTooLarge { size: usize, max: usize },
    #[error("Signature is missing")]
    MissingSignature,
}

/// Validation configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub max_name_components: usize,
    pub max_component_size: usize,
    pub max_content_size: usize,
    pub require_signature: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_components: 32,
            max_component_size: 8192,
            max_content_size: 8800,
            require_signature: true,
        }
    }
}

impl Name {
    /// Validate the name structure
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.len() > config.max_name_components {
            return Err(ValidationError::NameTooDeep {
                depth: self.len(),
                max: config.max_name_components,
            });
        }

        if let Some(component) = self
            .components
            .iter()
            .find(|c| c.len() > config.max_component_size)
        {
            return Err(ValidationError::NameComponentTooLarge {
                size: component.len(),
                max: config.max_component_size,
            });
        }

        Ok(())
    }
}

impl Data {
    /// Validate the Data packet against configured limits
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), ValidationError> {
        self.name.validate(config)?;

        if self.content.len() > config.max_content_size {
            return Err(ValidationError::ContentTooLarge {
                size: self.content.len(),
                max: config.max_content_size,
            });
        }

        if config.require_signature && self.signature.is_none() {
            return Err(ValidationError::MissingSignature);
        }

        Ok(())
    }

    pub fn is_valid(&self, config: &ValidationConfig) -> bool {
        self.validate(config).is_ok()
    }
}
