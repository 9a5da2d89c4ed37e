use std::io;

use crate::errors::{AmfError, AmfResult};

use byteorder::{BigEndian, WriteBytesExt};
use utils::traits::writer::WriteTo;

use super::{MAX_STRING_LENGTH, Properties, Value, amf0_marker};

impl<W: io::Write> WriteTo<W> for Value {
    type Error = AmfError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        Writer::new(writer).write(self)
    }
}

/// Appends encoded values to an output sink.
///
/// Strings and keys longer than [`MAX_STRING_LENGTH`] bytes are rejected.
/// The whole value is checked first, so a rejected value leaves nothing
/// of itself in the sink.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W> {
    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: io::Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write(&mut self, value: &Value) -> AmfResult<()> {
        check_value_lengths(value)?;
        self.write_inner(value)
    }

    fn write_inner(&mut self, value: &Value) -> AmfResult<()> {
        match value {
            Value::Number(n) => self.write_number(*n),
            Value::Boolean(b) => self.write_boolean(*b),
            Value::String(s) => self.write_string(s),
            Value::Object(entries) => self.write_object_inner(entries),
            Value::Null => self.write_null(),
            Value::EcmaArray(entries) => self.write_ecma_array_inner(entries),
        }
    }

    pub fn write_number(&mut self, v: f64) -> AmfResult<()> {
        self.inner.write_u8(amf0_marker::NUMBER)?;
        self.inner.write_f64::<BigEndian>(v)?;
        Ok(())
    }

    pub fn write_boolean(&mut self, v: bool) -> AmfResult<()> {
        self.inner.write_u8(amf0_marker::BOOLEAN)?;
        self.inner.write_u8(v as u8)?;
        Ok(())
    }

    /// Writes an untagged, length prefixed property name.
    pub fn write_key(&mut self, v: &str) -> AmfResult<()> {
        check_length(v)?;
        self.inner.write_u16::<BigEndian>(v.len() as u16)?;
        self.inner.write_all(v.as_bytes())?;
        Ok(())
    }

    pub fn write_string(&mut self, v: &str) -> AmfResult<()> {
        check_length(v)?;
        self.inner.write_u8(amf0_marker::STRING)?;
        self.write_key(v)
    }

    pub fn write_null(&mut self) -> AmfResult<()> {
        self.inner.write_u8(amf0_marker::NULL)?;
        Ok(())
    }

    fn write_pairs_inner(&mut self, entries: &Properties) -> AmfResult<()> {
        for (key, value) in entries {
            self.write_key(key)?;
            self.write_inner(value)?;
        }
        self.write_key("")?;
        self.inner.write_u8(amf0_marker::OBJECT_END)?;
        Ok(())
    }

    pub fn write_object(&mut self, entries: &Properties) -> AmfResult<()> {
        check_pair_lengths(entries)?;
        self.write_object_inner(entries)
    }

    fn write_object_inner(&mut self, entries: &Properties) -> AmfResult<()> {
        self.inner.write_u8(amf0_marker::OBJECT)?;
        self.write_pairs_inner(entries)
    }

    pub fn write_ecma_array(&mut self, entries: &Properties) -> AmfResult<()> {
        check_pair_lengths(entries)?;
        self.write_ecma_array_inner(entries)
    }

    fn write_ecma_array_inner(&mut self, entries: &Properties) -> AmfResult<()> {
        self.inner.write_u8(amf0_marker::ECMA_ARRAY)?;
        // length hint, peers read the entries from the body
        self.inner.write_u32::<BigEndian>(0)?;
        self.write_pairs_inner(entries)
    }
}

fn check_length(v: &str) -> AmfResult<()> {
    if v.len() > MAX_STRING_LENGTH {
        return Err(AmfError::StringTooLong { length: v.len() });
    }
    Ok(())
}

fn check_value_lengths(value: &Value) -> AmfResult<()> {
    match value {
        Value::String(s) => check_length(s),
        Value::Object(entries) | Value::EcmaArray(entries) => check_pair_lengths(entries),
        Value::Number(_) | Value::Boolean(_) | Value::Null => Ok(()),
    }
}

fn check_pair_lengths(entries: &Properties) -> AmfResult<()> {
    for (key, value) in entries {
        check_length(key)?;
        check_value_lengths(value)?;
    }
    Ok(())
}
