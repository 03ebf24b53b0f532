use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::packets::tlv_types;
use crate::tlv::{encode_non_negative_integer, TlvElement, TlvError, TlvReader};

/// Leading octet of a version marker component
pub const VERSION_MARKER: u8 = 0xFD;

const IMPLICIT_DIGEST_PREFIX: &str = "sha256digest=";
const PARAMETERS_DIGEST_PREFIX: &str = "params-sha256=";
const DIGEST_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    Generic,
    ImplicitSha256Digest,
    ParametersSha256Digest,
}

impl ComponentType {
    pub fn code(self) -> u64 {
        match self {
            ComponentType::Generic => tlv_types::NAME_COMPONENT,
            ComponentType::ImplicitSha256Digest => tlv_types::IMPLICIT_SHA256_DIGEST_COMPONENT,
            ComponentType::ParametersSha256Digest => tlv_types::PARAMETERS_SHA256_DIGEST_COMPONENT,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            tlv_types::NAME_COMPONENT => Some(ComponentType::Generic),
            tlv_types::IMPLICIT_SHA256_DIGEST_COMPONENT => Some(ComponentType::ImplicitSha256Digest),
            tlv_types::PARAMETERS_SHA256_DIGEST_COMPONENT => Some(ComponentType::ParametersSha256Digest),
            _ => None,
        }
    }
}

/// Semantic reading of a component's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentClass {
    Plain,
    /// 0xFD marker followed by a big-endian version/timestamp
    MarkedVersion(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameComponent {
    pub value: Vec<u8>,
    pub component_type: ComponentType,
}

impl NameComponent {
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            component_type: ComponentType::Generic,
        }
    }

    pub fn with_type(value: Vec<u8>, component_type: ComponentType) -> Self {
        Self {
            value,
            component_type,
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }

    /// Version marker component: 0xFD followed by the NonNegativeInteger
    /// encoding of `version`
    pub fn from_version(version: u64) -> Self {
        let mut value = vec![VERSION_MARKER];
        value.extend(encode_non_negative_integer(version));
        Self::new(value)
    }

    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.value)
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_type(&self, component_type: ComponentType) -> bool {
        self.component_type == component_type
    }

    /// Inspect the first value byte for the version marker. The remainder
    /// must fit in a u64 to count as a version.
    pub fn classify(&self) -> ComponentClass {
        if self.component_type != ComponentType::Generic {
            return ComponentClass::Plain;
        }
        match self.value.split_first() {
            Some((&VERSION_MARKER, rest)) if !rest.is_empty() && rest.len() <= 8 => {
                let version = rest.iter().fold(0u64, |acc, byte| (acc << 8) | *byte as u64);
                ComponentClass::MarkedVersion(version)
            }
            _ => ComponentClass::Plain,
        }
    }

    pub fn to_version(&self) -> Option<u64> {
        match self.classify() {
            ComponentClass::MarkedVersion(version) => Some(version),
            ComponentClass::Plain => None,
        }
    }

    pub fn to_element(&self) -> TlvElement {
        TlvElement::new(self.component_type.code(), self.value.clone())
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_element().encode()
    }

    /// Build a component from a decoded child of a Name
    pub fn from_element(type_: u64, value: &[u8]) -> Result<Self, TlvError> {
        let component_type = ComponentType::from_code(type_).ok_or(TlvError::UnexpectedType {
            expected: tlv_types::NAME_COMPONENT,
            actual: type_,
        })?;
        if component_type != ComponentType::Generic && value.len() != DIGEST_LENGTH {
            return Err(TlvError::MalformedStructure(format!(
                "digest component must be {} bytes, got {}",
                DIGEST_LENGTH,
                value.len()
            )));
        }
        Ok(Self::with_type(value.to_vec(), component_type))
    }

    /// Decode a single component TLV from the start of `data`
    pub fn decode(data: &[u8]) -> Result<(Self, usize), TlvError> {
        let mut reader = TlvReader::new(data);
        let (type_, value) = reader.read_element()?;
        Ok((Self::from_element(type_, value)?, reader.offset()))
    }

    fn write_escaped(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.component_type {
            ComponentType::ImplicitSha256Digest => {
                return write!(f, "{}{}", IMPLICIT_DIGEST_PREFIX, hex::encode(&self.value));
            }
            ComponentType::ParametersSha256Digest => {
                return write!(f, "{}{}", PARAMETERS_DIGEST_PREFIX, hex::encode(&self.value));
            }
            ComponentType::Generic => {}
        }

        if self.value.iter().all(|b| *b == b'.') {
            // "", ".", ".." are reserved in URIs, so pad every all-period value
            f.write_str("...")?;
        }
        for byte in &self.value {
            if byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.' | b'_') {
                write!(f, "{}", *byte as char)?;
            } else {
                write!(f, "%{:02X}", byte)?;
            }
        }
        Ok(())
    }

    /// Parse one URI segment (already split on '/')
    pub fn from_escaped(segment: &str) -> Result<Self, NameParseError> {
        if let Some(digest) = segment.strip_prefix(IMPLICIT_DIGEST_PREFIX) {
            return Self::parse_digest(digest, ComponentType::ImplicitSha256Digest);
        }
        if let Some(digest) = segment.strip_prefix(PARAMETERS_DIGEST_PREFIX) {
            return Self::parse_digest(digest, ComponentType::ParametersSha256Digest);
        }

        let value = percent_decode(segment)?;
        if !value.is_empty() && value.iter().all(|b| *b == b'.') {
            if value.len() < 3 {
                return Err(NameParseError::InvalidComponent(segment.to_string()));
            }
            return Ok(Self::new(value[3..].to_vec()));
        }
        Ok(Self::new(value))
    }

    fn parse_digest(digest: &str, component_type: ComponentType) -> Result<Self, NameParseError> {
        let value = hex::decode(digest).map_err(|_| NameParseError::InvalidComponent(digest.to_string()))?;
        if value.len() != DIGEST_LENGTH {
            return Err(NameParseError::InvalidComponent(digest.to_string()));
        }
        Ok(Self::with_type(value, component_type))
    }
}

impl fmt::Display for NameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_escaped(f)
    }
}

fn percent_decode(segment: &str) -> Result<Vec<u8>, NameParseError> {
    let bytes = segment.as_bytes();
    let mut value = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| NameParseError::InvalidEscape(segment.to_string()))?;
            value.push(hex);
            i += 3;
        } else {
            value.push(bytes[i]);
            i += 1;
        }
    }

    Ok(value)
}

/// Hierarchical NDN name: an ordered sequence of components
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub components: Vec<NameComponent>,
}

impl Name {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Parse the URI form, e.g. `/ndn/site1/KEY/%FD%00%01`
    pub fn from_uri(uri: &str) -> Result<Self, NameParseError> {
        let uri = uri.trim();
        let path = uri.strip_prefix("ndn:").unwrap_or(uri);
        if path.starts_with("//") {
            return Err(NameParseError::InvalidFormat(uri.to_string()));
        }

        let components = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(NameComponent::from_escaped)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }

    pub fn push(&mut self, component: NameComponent) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Append a generic component built from a string
    pub fn append_str(&mut self, component: &str) -> &mut Self {
        self.push(NameComponent::from_str(component))
    }

    pub fn append_version(&mut self, version: u64) -> &mut Self {
        self.push(NameComponent::from_version(version))
    }

    pub fn append_name(&mut self, name: &Name) -> &mut Self {
        self.components.extend(name.components.iter().cloned());
        self
    }

    pub fn get(&self, index: usize) -> Option<&NameComponent> {
        self.components.get(index)
    }

    pub fn last(&self) -> Option<&NameComponent> {
        self.components.last()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// First `count` components; a negative count drops that many from the end
    pub fn get_prefix(&self, count: isize) -> Name {
        let end = if count < 0 {
            self.len().saturating_sub(count.unsigned_abs())
        } else {
            std::cmp::min(count as usize, self.len())
        };
        Name {
            components: self.components[..end].to_vec(),
        }
    }

    /// Up to `count` components starting at `start`
    pub fn get_sub_name(&self, start: usize, count: usize) -> Name {
        Name {
            components: self.components.iter().skip(start).take(count).cloned().collect(),
        }
    }

    pub fn is_prefix_of(&self, other: &Name) -> bool {
        self.len() <= other.len() && self.components.iter().zip(&other.components).all(|(a, b)| a == b)
    }

    pub fn to_uri(&self) -> String {
        self.to_string()
    }

    /// Encode name to TLV format
    pub fn encode(&self) -> Vec<u8> {
        self.to_element().encode()
    }

    pub fn to_element(&self) -> TlvElement {
        let mut components_tlv = Vec::new();
        for component in &self.components {
            component.to_element().encode_to(&mut components_tlv);
        }
        TlvElement::new(tlv_types::NAME, components_tlv)
    }

    /// Decode name from TLV format
    pub fn decode(data: &[u8]) -> Result<(Self, usize), TlvError> {
        let mut reader = TlvReader::new(data);
        let value = reader.read_expected(tlv_types::NAME)?;
        Ok((Self::decode_value(value)?, reader.offset()))
    }

    /// Decode the children of a Name TLV whose header is already consumed
    pub fn decode_value(value: &[u8]) -> Result<Self, TlvError> {
        let mut reader = TlvReader::new(value);
        let mut name = Name::new();
        while !reader.is_exhausted() {
            let (type_, component) = reader.read_element()?;
            name.components.push(NameComponent::from_element(type_, component)?);
        }
        Ok(name)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("/");
        }
        for component in &self.components {
            f.write_str("/")?;
            component.write_escaped(f)?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::from_uri(s)
    }
}

impl From<Vec<NameComponent>> for Name {
    fn from(components: Vec<NameComponent>) -> Self {
        Self { components }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameParseError {
    #[error("Invalid name format: {0}")]
    InvalidFormat(String),
    #[error("Invalid name component: {0}")]
    InvalidComponent(String),
    #[error("Invalid percent escape in: {0}")]
    InvalidEscape(String),
}
