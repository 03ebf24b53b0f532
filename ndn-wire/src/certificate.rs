use crate::name::{Name, NameComponent};
use crate::packets::{ContentType, Data, MetaInfo};
use crate::signature::{to_iso_string, KeyLocator, Signature, ValidityPeriod};
use crate::tlv::TlvError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDateTime;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal component marking the key part of a certificate name
pub const KEY_COMPONENT: &[u8] = b"KEY";

/// `<identity>/KEY/<key-id>/<issuer-id>/<version>`
const KEY_COMPONENT_OFFSET: usize = 4;
const MIN_CERT_NAME_LENGTH: usize = 4;

const BASE64_LINE_WIDTH: usize = 64;

/// A Data packet carrying a public key, named
/// `<identity>/KEY/<key-id>/<issuer-id>/<version>`.
///
/// The name structure is checked whenever a name enters the certificate,
/// so the accessors below never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Data", into = "Data")]
pub struct CertificateV2 {
    data: Data,
}

impl CertificateV2 {
    /// Empty certificate with ContentType `Key`, ready for the setters
    pub fn new(name: Name) -> Result<Self, TlvError> {
        check_cert_name(&name)?;
        Ok(Self {
            data: Data::new(name, Vec::new()).with_content_type(ContentType::Key),
        })
    }

    /// Wrap an already-decoded Data packet
    pub fn from_data(data: Data) -> Result<Self, TlvError> {
        check_cert_name(&data.name)?;
        if data.meta_info.content_type() != ContentType::Key {
            warn!(
                "Rejected certificate {}: content type {:?}",
                data.name, data.meta_info.content_type()
            );
            return Err(TlvError::MalformedStructure(format!(
                "certificate content type must be Key, got {:?}",
                data.meta_info.content_type()
            )));
        }
        Ok(Self { data })
    }

    /// Decode a certificate from its Data wire encoding
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize), TlvError> {
        let (data, consumed) = Data::decode(bytes)?;
        let certificate = Self::from_data(data)?;
        debug!("Decoded certificate {}", certificate.name());
        Ok((certificate, consumed))
    }

    pub fn encode(&self) -> Result<Vec<u8>, TlvError> {
        self.data.encode()
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn into_data(self) -> Data {
        self.data
    }

    pub fn name(&self) -> &Name {
        &self.data.name
    }

    /// Replace the name; the previous name is kept if the new one is
    /// not a certificate name.
    pub fn set_name(&mut self, name: Name) -> Result<&mut Self, TlvError> {
        check_cert_name(&name)?;
        self.data.name = name;
        Ok(self)
    }

    pub fn meta_info(&self) -> &MetaInfo {
        &self.data.meta_info
    }

    pub fn meta_info_mut(&mut self) -> &mut MetaInfo {
        &mut self.data.meta_info
    }

    pub fn set_content(&mut self, content: Vec<u8>) -> &mut Self {
        self.data.content = content;
        self
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.data.signature.as_ref()
    }

    pub fn set_signature(&mut self, signature: Signature) -> &mut Self {
        self.data.signature = Some(signature);
        self
    }

    /// The public key bits, verbatim from Content
    pub fn public_key(&self) -> &[u8] {
        &self.data.content
    }

    pub fn identity(&self) -> Name {
        self.name().get_prefix(-(KEY_COMPONENT_OFFSET as isize))
    }

    pub fn key_name(&self) -> Name {
        self.name().get_prefix(-2)
    }

    pub fn key_id(&self) -> &NameComponent {
        self.component_from_end(3)
    }

    pub fn issuer_id(&self) -> &NameComponent {
        self.component_from_end(2)
    }

    pub fn version_component(&self) -> &NameComponent {
        self.component_from_end(1)
    }

    /// Value of the version marker in the last component, if it has one
    pub fn version(&self) -> Option<u64> {
        self.version_component().to_version()
    }

    fn component_from_end(&self, back: usize) -> &NameComponent {
        let components = &self.name().components;
        &components[components.len() - back]
    }

    pub fn validity_period(&self) -> Option<&ValidityPeriod> {
        self.signature().and_then(|signature| signature.validity_period.as_ref())
    }

    /// Whether `time` falls inside the validity period, bounds included.
    /// A certificate without a validity period cannot be checked.
    pub fn is_valid(&self, time: NaiveDateTime) -> Result<bool, TlvError> {
        self.validity_period()
            .map(|period| period.is_valid(time))
            .ok_or(TlvError::MissingField("validity period"))
    }

    pub fn is_valid_name(name: &Name) -> bool {
        name.len() >= MIN_CERT_NAME_LENGTH
            && name
                .get(name.len() - KEY_COMPONENT_OFFSET)
                .is_some_and(|component| component.value == KEY_COMPONENT)
    }

    pub fn extract_identity_from_cert_name(name: &Name) -> Result<Name, TlvError> {
        check_cert_name(name)?;
        Ok(name.get_prefix(-(KEY_COMPONENT_OFFSET as isize)))
    }

    pub fn extract_key_name_from_cert_name(name: &Name) -> Result<Name, TlvError> {
        check_cert_name(name)?;
        Ok(name.get_prefix(-2))
    }
}

impl TryFrom<Data> for CertificateV2 {
    type Error = TlvError;

    fn try_from(data: Data) -> Result<Self, Self::Error> {
        Self::from_data(data)
    }
}

impl From<CertificateV2> for Data {
    fn from(certificate: CertificateV2) -> Self {
        certificate.data
    }
}

fn check_cert_name(name: &Name) -> Result<(), TlvError> {
    if CertificateV2::is_valid_name(name) {
        return Ok(());
    }
    warn!("Rejected certificate name {}", name);
    Err(TlvError::MalformedStructure(format!(
        "{} is not a certificate name",
        name
    )))
}

impl fmt::Display for CertificateV2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Certificate name:")?;
        writeln!(f, "  {}", self.name())?;

        if let Some(period) = self.validity_period() {
            writeln!(f, "Validity:")?;
            writeln!(f, "  NotBefore: {}", to_iso_string(&period.not_before()))?;
            writeln!(f, "  NotAfter: {}", to_iso_string(&period.not_after()))?;
        }

        writeln!(f, "Public key bits:")?;
        let encoded = STANDARD.encode(self.public_key());
        for line in encoded.as_bytes().chunks(BASE64_LINE_WIDTH) {
            writeln!(f, "{}", String::from_utf8_lossy(line))?;
        }

        if let Some(signature) = self.signature() {
            writeln!(f, "Signature Information:")?;
            writeln!(f, "  Signature Type: {}", signature.signature_type)?;
            match &signature.key_locator {
                KeyLocator::KeyName(name) => {
                    let self_signed = if *name == self.key_name() { "Self-Signed " } else { "" };
                    writeln!(f, "  Key Locator: {}Name={}", self_signed, name)?;
                }
                KeyLocator::KeyDigest(digest) => {
                    writeln!(f, "  Key Locator: KeyDigest={}", hex::encode(digest))?;
                }
                KeyLocator::None => {}
            }
        }

        Ok(())
    }
}
