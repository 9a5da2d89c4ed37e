use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::errors::{AmfError, AmfResult};

use super::{Kind, Properties, Value, amf0_marker};

/// Progress through the key/value pairs of an object or ECMA array body.
#[derive(Debug)]
enum BodyState {
    ExpectKeyOrEnd,
    ExpectValue(String),
    Done,
}

/// Decodes values from a buffer that is already fully in memory.
///
/// Every read checks the remaining length first, so a short buffer always
/// surfaces as [`AmfError::Truncated`]. The cursor only ever moves forward.
#[derive(Debug)]
pub struct Reader<R> {
    inner: Cursor<R>,
}

impl<R> Reader<R> {
    /// Unwraps this `Reader`, returning the underlying buffer.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Get the reference to the underlying buffer.
    pub fn inner(&self) -> &R {
        self.inner.get_ref()
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl<R> Reader<R>
where
    R: AsRef<[u8]>,
{
    pub fn new(inner: R) -> Self {
        Self::from_cursor(Cursor::new(inner))
    }

    /// Continues reading from wherever `inner` is positioned.
    pub fn from_cursor(inner: Cursor<R>) -> Self {
        Self { inner }
    }

    pub fn remaining(&self) -> usize {
        let len = self.inner.get_ref().as_ref().len() as u64;
        len.saturating_sub(self.inner.position()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure_remaining(&self, needed: usize) -> AmfResult<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(AmfError::Truncated { needed, remaining });
        }
        Ok(())
    }

    pub fn peek_u8(&self) -> AmfResult<u8> {
        self.ensure_remaining(1)?;
        let position = self.inner.position() as usize;
        self.inner
            .get_ref()
            .as_ref()
            .get(position)
            .copied()
            .ok_or(AmfError::Truncated {
                needed: 1,
                remaining: 0,
            })
    }

    pub fn read_u8(&mut self) -> AmfResult<u8> {
        self.ensure_remaining(1)?;
        Ok(self.inner.read_u8()?)
    }

    /// Consumes the marker only if it is the expected one.
    fn expect_marker(&mut self, expected: u8) -> AmfResult<()> {
        let found = self.peek_u8()?;
        if found != expected {
            return Err(AmfError::UnexpectedMarker { expected, found });
        }
        self.inner.set_position(self.inner.position() + 1);
        Ok(())
    }

    /// Decodes one value of any supported kind.
    ///
    /// An unknown marker fails with [`AmfError::Unsupported`] and leaves the
    /// cursor on the marker byte.
    pub fn read(&mut self) -> AmfResult<Value> {
        let marker = self.peek_u8()?;
        match Kind::try_from(marker)? {
            Kind::Number => self.read_number().map(Value::Number),
            Kind::Boolean => self.read_boolean().map(Value::Boolean),
            Kind::String => self.read_string().map(Value::String),
            Kind::Object => self.read_object().map(Value::Object),
            Kind::Null => self.read_null().map(|_| Value::Null),
            Kind::EcmaArray => self.read_ecma_array().map(Value::EcmaArray),
        }
    }

    /// Decodes consecutive values until the buffer is exhausted.
    pub fn read_all(&mut self) -> AmfResult<Vec<Value>> {
        let mut result = Vec::new();
        while !self.is_empty() {
            result.push(self.read()?);
        }
        Ok(result)
    }

    pub fn read_number(&mut self) -> AmfResult<f64> {
        self.expect_marker(amf0_marker::NUMBER)?;
        self.ensure_remaining(8)?;
        Ok(self.inner.read_f64::<BigEndian>()?)
    }

    pub fn read_boolean(&mut self) -> AmfResult<bool> {
        self.expect_marker(amf0_marker::BOOLEAN)?;
        Ok(self.read_u8()? != 0)
    }

    fn read_utf8_inner(&mut self, len: usize) -> AmfResult<String> {
        self.ensure_remaining(len)?;
        let mut buffer = vec![0; len];
        self.inner.read_exact(&mut buffer)?;
        let result = String::from_utf8(buffer)?;
        Ok(result)
    }

    /// Reads an untagged, length prefixed property name.
    pub fn read_key(&mut self) -> AmfResult<String> {
        self.ensure_remaining(2)?;
        let len = self.inner.read_u16::<BigEndian>()?;
        self.read_utf8_inner(len as usize)
    }

    pub fn read_string(&mut self) -> AmfResult<String> {
        self.expect_marker(amf0_marker::STRING)?;
        self.read_key()
    }

    pub fn read_null(&mut self) -> AmfResult<()> {
        self.expect_marker(amf0_marker::NULL)
    }

    pub fn read_object(&mut self) -> AmfResult<Properties> {
        self.expect_marker(amf0_marker::OBJECT)?;
        self.read_properties_inner()
    }

    pub fn read_ecma_array(&mut self) -> AmfResult<Properties> {
        self.expect_marker(amf0_marker::ECMA_ARRAY)?;
        self.ensure_remaining(4)?;
        // the length hint is informational, the body decides the entries
        let _len = self.inner.read_u32::<BigEndian>()?;
        self.read_properties_inner()
    }

    fn read_properties_inner(&mut self) -> AmfResult<Properties> {
        let mut result = Properties::new();
        let mut state = BodyState::ExpectKeyOrEnd;
        loop {
            state = match state {
                BodyState::ExpectKeyOrEnd => {
                    let key = self.read_key()?;
                    if key.is_empty() {
                        BodyState::Done
                    } else {
                        BodyState::ExpectValue(key)
                    }
                }
                BodyState::ExpectValue(key) => {
                    let value = self.read()?;
                    result.insert(key, value);
                    BodyState::ExpectKeyOrEnd
                }
                BodyState::Done => break,
            };
        }
        match self.read_u8()? {
            amf0_marker::OBJECT_END => Ok(result),
            found => Err(AmfError::MissingObjectEnd { found }),
        }
    }
}
