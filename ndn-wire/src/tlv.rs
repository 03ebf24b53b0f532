use std::convert::TryFrom;

/// TLV (Type-Length-Value) codec for NDN wire encoding
///
/// Wire format:
/// - Type: variable-width number (1, 3, 5 or 9 bytes)
/// - Length: variable-width number (1, 3, 5 or 9 bytes)
/// - Value: `length` bytes
///
/// Both numbers use the same rule: a first octet below 0xFD is the number
/// itself, 0xFD/0xFE/0xFF announce a 2/4/8-byte big-endian number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvElement {
    pub type_: u64,
    pub value: Vec<u8>,
}

/// Errors that can occur during TLV encoding/decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TlvError {
    #[error("Buffer exhausted: need {needed} bytes, {available} available")]
    BufferExhausted { needed: usize, available: usize },
    #[error("Unexpected TLV type: expected {expected:#x}, got {actual:#x}")]
    UnexpectedType { expected: u64, actual: u64 },
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Missing mandatory field: {0}")]
    MissingField(&'static str),
}

impl TlvError {
    /// True for the errors produced by malformed input, as opposed to misuse
    /// of an in-memory object.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, TlvError::MissingField(_))
    }
}

const VAR_NUMBER_2: u8 = 0xFD;
const VAR_NUMBER_4: u8 = 0xFE;
const VAR_NUMBER_8: u8 = 0xFF;

/// Decoded TLV header: the element's type, its value length, and where the
/// value starts in the buffer it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    pub type_: u64,
    pub length: usize,
    pub value_offset: usize,
}

impl TlvHeader {
    /// Offset one past the last value byte
    pub fn end(&self) -> usize {
        self.value_offset + self.length
    }
}

impl TlvElement {
    /// Create a new TLV element
    pub fn new(type_: u64, value: Vec<u8>) -> Self {
        Self { type_, value }
    }

    /// Get the total encoded length of this TLV element
    pub fn encoded_length(&self) -> usize {
        header_size(self.type_, self.value.len()) + self.value.len()
    }

    /// Encode this TLV element to bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.encoded_length());
        self.encode_to(&mut buffer);
        buffer
    }

    /// Append the encoding of this TLV element to `buffer`
    pub fn encode_to(&self, buffer: &mut Vec<u8>) {
        write_var_number(self.type_, buffer);
        write_var_number(self.value.len() as u64, buffer);
        buffer.extend_from_slice(&self.value);
    }

    /// Decode a TLV element from the start of `data`, returning it together
    /// with the number of bytes consumed
    pub fn decode(data: &[u8]) -> Result<(Self, usize), TlvError> {
        let header = read_header(data, 0)?;
        let value = data[header.value_offset..header.end()].to_vec();
        Ok((TlvElement::new(header.type_, value), header.end()))
    }
}

/// Number of bytes `write_var_number` emits for `number`
pub fn var_number_size(number: u64) -> usize {
    if number < VAR_NUMBER_2 as u64 {
        1
    } else if number <= u16::MAX as u64 {
        3
    } else if number <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Append `number` using the shortest variable-width form
pub fn write_var_number(number: u64, buffer: &mut Vec<u8>) {
    if number < VAR_NUMBER_2 as u64 {
        buffer.push(number as u8);
    } else if number <= u16::MAX as u64 {
        buffer.push(VAR_NUMBER_2);
        buffer.extend_from_slice(&(number as u16).to_be_bytes());
    } else if number <= u32::MAX as u64 {
        buffer.push(VAR_NUMBER_4);
        buffer.extend_from_slice(&(number as u32).to_be_bytes());
    } else {
        buffer.push(VAR_NUMBER_8);
        buffer.extend_from_slice(&number.to_be_bytes());
    }
}

/// Read a variable-width number at `offset`, returning the number and the
/// offset just past it
pub fn read_var_number(data: &[u8], offset: usize) -> Result<(u64, usize), TlvError> {
    let first_byte = *data.get(offset).ok_or(TlvError::BufferExhausted {
        needed: 1,
        available: 0,
    })?;
    let start = offset + 1;

    let width = match first_byte {
        VAR_NUMBER_2 => 2,
        VAR_NUMBER_4 => 4,
        VAR_NUMBER_8 => 8,
        _ => return Ok((first_byte as u64, start)),
    };

    let available = data.len() - start;
    if available < width {
        return Err(TlvError::BufferExhausted {
            needed: width,
            available,
        });
    }

    let number = data[start..start + width]
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | *byte as u64);
    Ok((number, start + width))
}

/// Size of the type and length fields for an element of the given type and
/// value length
pub fn header_size(type_: u64, length: usize) -> usize {
    var_number_size(type_) + var_number_size(length as u64)
}

/// Encode the type and length fields of an element, minimal width
pub fn write_header(type_: u64, length: usize) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(header_size(type_, length));
    write_var_number(type_, &mut buffer);
    write_var_number(length as u64, &mut buffer);
    buffer
}

/// Read the header of the element starting at `offset`.
///
/// Fails when the header is truncated, when TLV-TYPE is the reserved value
/// zero, or when the declared length runs past the end of `data`.
pub fn read_header(data: &[u8], offset: usize) -> Result<TlvHeader, TlvError> {
    let (type_, after_type) = read_var_number(data, offset)?;
    if type_ == 0 {
        return Err(TlvError::MalformedStructure(format!(
            "reserved TLV-TYPE 0 at offset {}",
            offset
        )));
    }

    let (length, value_offset) = read_var_number(data, after_type)?;
    let available = data.len() - value_offset;
    let length = usize::try_from(length).map_err(|_| TlvError::BufferExhausted {
        needed: usize::MAX,
        available,
    })?;
    if length > available {
        return Err(TlvError::BufferExhausted {
            needed: length,
            available,
        });
    }

    Ok(TlvHeader {
        type_,
        length,
        value_offset,
    })
}

/// Read the header at `offset` and check that its type is `expected`.
/// Returns the value length and the value offset.
pub fn expect_type(data: &[u8], offset: usize, expected: u64) -> Result<(usize, usize), TlvError> {
    let header = read_header(data, offset)?;
    if header.type_ != expected {
        return Err(TlvError::UnexpectedType {
            expected,
            actual: header.type_,
        });
    }
    Ok((header.length, header.value_offset))
}

/// Encode a NonNegativeInteger value: 1, 2, 4 or 8 bytes, big-endian,
/// shortest form
pub fn encode_non_negative_integer(value: u64) -> Vec<u8> {
    if value <= u8::MAX as u64 {
        vec![value as u8]
    } else if value <= u16::MAX as u64 {
        (value as u16).to_be_bytes().to_vec()
    } else if value <= u32::MAX as u64 {
        (value as u32).to_be_bytes().to_vec()
    } else {
        value.to_be_bytes().to_vec()
    }
}

/// Decode a NonNegativeInteger value
pub fn decode_non_negative_integer(value: &[u8]) -> Result<u64, TlvError> {
    match value.len() {
        1 | 2 | 4 | 8 => Ok(value
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | *byte as u64)),
        len => Err(TlvError::MalformedStructure(format!(
            "NonNegativeInteger must be 1, 2, 4 or 8 bytes, got {}",
            len
        ))),
    }
}

/// Encode multiple TLV elements into a single buffer
pub fn encode_tlv_sequence(elements: &[TlvElement]) -> Vec<u8> {
    let total_size = elements.iter().map(|e| e.encoded_length()).sum();
    let mut buffer = Vec::with_capacity(total_size);

    for element in elements {
        element.encode_to(&mut buffer);
    }

    buffer
}

/// Decode multiple TLV elements from a buffer
pub fn decode_tlv_sequence(data: &[u8]) -> Result<Vec<TlvElement>, TlvError> {
    let mut elements = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let (element, consumed) = TlvElement::decode(&data[offset..])?;
        elements.push(element);
        offset += consumed;
    }

    Ok(elements)
}

/// Sequential reader over the children of a composite element.
///
/// Children must appear in grammar order: callers pull each field with
/// [`TlvReader::read_expected`] or [`TlvReader::read_optional`] and finish
/// with [`TlvReader::finish`], which rejects anything left over.
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> TlvReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Type of the next child, or `None` at the end of the range
    pub fn peek_type(&self) -> Result<Option<u64>, TlvError> {
        if self.is_exhausted() {
            return Ok(None);
        }
        read_var_number(self.data, self.offset).map(|(type_, _)| Some(type_))
    }

    /// Read the next child whatever its type
    pub fn read_element(&mut self) -> Result<(u64, &'a [u8]), TlvError> {
        let header = read_header(self.data, self.offset)?;
        self.offset = header.end();
        Ok((header.type_, &self.data[header.value_offset..header.end()]))
    }

    /// Read the next child, which must have type `expected`
    pub fn read_expected(&mut self, expected: u64) -> Result<&'a [u8], TlvError> {
        if self.is_exhausted() {
            return Err(TlvError::MalformedStructure(format!(
                "missing mandatory element of type {:#x}",
                expected
            )));
        }
        let (length, value_offset) = expect_type(self.data, self.offset, expected)?;
        self.offset = value_offset + length;
        Ok(&self.data[value_offset..value_offset + length])
    }

    /// Read the next child if it has type `expected`, leaving the reader
    /// untouched otherwise
    pub fn read_optional(&mut self, expected: u64) -> Result<Option<&'a [u8]>, TlvError> {
        match self.peek_type()? {
            Some(type_) if type_ == expected => self.read_expected(expected).map(Some),
            _ => Ok(None),
        }
    }

    /// Read a mandatory NonNegativeInteger child
    pub fn read_non_negative_integer(&mut self, expected: u64) -> Result<u64, TlvError> {
        decode_non_negative_integer(self.read_expected(expected)?)
    }

    /// Read an optional NonNegativeInteger child
    pub fn read_optional_non_negative_integer(&mut self, expected: u64) -> Result<Option<u64>, TlvError> {
        self.read_optional(expected)?
            .map(decode_non_negative_integer)
            .transpose()
    }

    /// Check that every child has been consumed
    pub fn finish(self) -> Result<(), TlvError> {
        match self.peek_type()? {
            None => Ok(()),
            Some(type_) => Err(TlvError::MalformedStructure(format!(
                "unexpected element of type {:#x} at offset {}",
                type_, self.offset
            ))),
        }
    }
}
