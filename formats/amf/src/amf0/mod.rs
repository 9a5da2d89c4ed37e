//!@see: [Action Message Format -- AMF 0](https://rtmp.veriskope.com/pdf/amf0-file-format-specification.pdf).
//!
//! Only the marker subset exchanged by RTMP command and data messages is
//! modelled: number, boolean, string, null, anonymous object and ECMA array.

use std::io::Cursor;

use indexmap::IndexMap;
use utils::bytes::writable_to_bytes;

pub use self::codec::Amf0ValueCodec;
pub use self::reader::Reader;
pub use self::writer::Writer;
use crate::errors::{AmfError, AmfResult};

mod codec;
mod reader;
mod writer;

/// @see: 2.1 Types Overview
pub mod amf0_marker {
    pub const NUMBER: u8 = 0x00;
    pub const BOOLEAN: u8 = 0x01;
    pub const STRING: u8 = 0x02;
    pub const OBJECT: u8 = 0x03;
    pub const NULL: u8 = 0x05;
    pub const ECMA_ARRAY: u8 = 0x08;
    pub const OBJECT_END: u8 = 0x09;
}

/// Largest byte length the 16-bit length prefix of strings and keys can carry.
pub const MAX_STRING_LENGTH: usize = u16::MAX as usize;

/// Key/value pairs of an object or ECMA array, in insertion order.
///
/// Inserting an existing key replaces its value in place, so when a body
/// repeats a key the later occurrence wins.
pub type Properties = IndexMap<String, Value>;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Number = amf0_marker::NUMBER,
    Boolean = amf0_marker::BOOLEAN,
    String = amf0_marker::STRING,
    Object = amf0_marker::OBJECT,
    Null = amf0_marker::NULL,
    EcmaArray = amf0_marker::ECMA_ARRAY,
}

impl Kind {
    pub fn marker(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Kind {
    type Error = AmfError;
    fn try_from(marker: u8) -> Result<Self, Self::Error> {
        match marker {
            amf0_marker::NUMBER => Ok(Kind::Number),
            amf0_marker::BOOLEAN => Ok(Kind::Boolean),
            amf0_marker::STRING => Ok(Kind::String),
            amf0_marker::OBJECT => Ok(Kind::Object),
            amf0_marker::NULL => Ok(Kind::Null),
            amf0_marker::ECMA_ARRAY => Ok(Kind::EcmaArray),
            _ => Err(AmfError::Unsupported { marker }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// @see: 2.2 Number Type
    Number(f64),
    /// @see: 2.3 Boolean Type
    Boolean(bool),
    /// @see: 2.4 String Type
    String(String),
    /// @see: 2.5 Object Type
    Object(Properties),
    /// @see: 2.7 null Type
    Null,
    /// @see: 2.10 ECMA Array Type
    EcmaArray(Properties),
}

impl Value {
    /// Builds the empty value of `kind`: zero, false, the empty string,
    /// null, or a map without entries.
    pub fn from_kind(kind: Kind) -> Self {
        match kind {
            Kind::Number => Value::Number(0.0),
            Kind::Boolean => Value::Boolean(false),
            Kind::String => Value::String(String::new()),
            Kind::Object => Value::Object(Properties::new()),
            Kind::Null => Value::Null,
            Kind::EcmaArray => Value::EcmaArray(Properties::new()),
        }
    }

    pub fn ecma_array(entries: Properties) -> Self {
        Value::EcmaArray(entries)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Number(_) => Kind::Number,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
            Value::Object(_) => Kind::Object,
            Value::Null => Kind::Null,
            Value::EcmaArray(_) => Kind::EcmaArray,
        }
    }

    /// Decodes the first value held by `buf`; trailing bytes are ignored.
    pub fn read_from<R: AsRef<[u8]>>(buf: R) -> AmfResult<Self> {
        Reader::new(buf).read()
    }

    pub fn write_to_vec(&self) -> AmfResult<Vec<u8>> {
        writable_to_bytes(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn try_as_f64(&self) -> Option<f64> {
        match *self {
            Value::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn try_as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn try_as_str(&self) -> Option<&str> {
        match *self {
            Value::String(ref str) => Some(str),
            _ => None,
        }
    }

    pub fn try_as_object(&self) -> Option<&Properties> {
        match *self {
            Value::Object(ref entries) => Some(entries),
            _ => None,
        }
    }

    pub fn try_as_ecma_array(&self) -> Option<&Properties> {
        match *self {
            Value::EcmaArray(ref entries) => Some(entries),
            _ => None,
        }
    }

    /// Entries of either an object or an ECMA array.
    pub fn try_as_properties(&self) -> Option<&Properties> {
        match *self {
            Value::Object(ref entries) | Value::EcmaArray(ref entries) => Some(entries),
            _ => None,
        }
    }

    pub fn try_as_properties_mut(&mut self) -> Option<&mut Properties> {
        match *self {
            Value::Object(ref mut entries) | Value::EcmaArray(ref mut entries) => Some(entries),
            _ => None,
        }
    }

    pub fn try_into_properties(self) -> Result<Properties, Self> {
        match self {
            Value::Object(entries) | Value::EcmaArray(entries) => Ok(entries),
            _ => Err(self),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

/// A bare map always becomes an anonymous object, use [`Value::ecma_array`]
/// for the array flavour.
impl From<Properties> for Value {
    fn from(value: Properties) -> Self {
        Value::Object(value)
    }
}

impl From<Kind> for Value {
    fn from(value: Kind) -> Self {
        Value::from_kind(value)
    }
}

/// Reads the next complete value, or `None` if the buffer ends before it does.
impl<R: AsRef<[u8]>> utils::traits::reader::TryReadFrom<R> for Value {
    type Error = AmfError;
    fn try_read_from(reader: &mut Cursor<R>) -> Result<Option<Self>, Self::Error> {
        let mut cursor = Cursor::new(reader.get_ref().as_ref());
        cursor.set_position(reader.position());
        let mut inner = Reader::from_cursor(cursor);
        match inner.read() {
            Ok(value) => {
                let position = inner.position();
                reader.set_position(position);
                Ok(Some(value))
            }
            Err(AmfError::Truncated { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Makes a `String` value.
pub fn string<T>(t: T) -> Value
where
    String: From<T>,
{
    Value::String(From::from(t))
}

/// Makes a `Number` value.
pub fn number<T>(t: T) -> Value
where
    f64: From<T>,
{
    Value::Number(From::from(t))
}

/// Makes a `Boolean` value.
pub fn bool<T>(t: T) -> Value
where
    bool: From<T>,
{
    Value::Boolean(From::from(t))
}

pub fn null() -> Value {
    Value::Null
}

/// Makes an anonymous `Object` value.
pub fn object<I, K>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, Value)>,
    String: From<K>,
{
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (From::from(k), v))
            .collect(),
    )
}

/// Makes an `ECMAArray` value.
pub fn ecma_array<I, K>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, Value)>,
    String: From<K>,
{
    Value::EcmaArray(
        entries
            .into_iter()
            .map(|(k, v)| (From::from(k), v))
            .collect(),
    )
}
