use std::io::Cursor;

use crate::errors::AmfError;
use tokio_util::{
    bytes::{Buf, BufMut, BytesMut},
    codec::{Decoder, Encoder},
};
use utils::traits::reader::TryReadFrom;

use super::{Value, Writer};

/// Frames single values on a byte stream.
///
/// A value is only decoded once all of its bytes are buffered; until then
/// `decode` yields `None` and leaves the buffer untouched.
#[derive(Debug, Default)]
pub struct Amf0ValueCodec;

impl Decoder for Amf0ValueCodec {
    type Error = AmfError;
    type Item = Value;
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        let mut cursor = Cursor::new(&src[..]);
        let value = Value::try_read_from(&mut cursor);
        let consumed = cursor.position() as usize;
        match value {
            Ok(Some(value)) => {
                src.advance(consumed);
                tracing::trace!("decoded amf0 {:?}, {} bytes", value.kind(), consumed);
                Ok(Some(value))
            }
            Ok(None) => {
                tracing::trace!("incomplete amf0 value, {} bytes buffered", src.len());
                Ok(None)
            }
            Err(err) => {
                tracing::trace!("amf0 decode failed: {}", err);
                Err(err)
            }
        }
    }
}

impl Encoder<Value> for Amf0ValueCodec {
    type Error = AmfError;
    fn encode(&mut self, item: Value, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let start = dst.len();
        let res = Writer::new((&mut *dst).writer()).write(&item);
        if let Err(err) = res {
            dst.truncate(start);
            tracing::trace!("amf0 encode failed: {}", err);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::{
        bytes::BytesMut,
        codec::{Decoder, Encoder},
    };

    use super::Amf0ValueCodec;
    use crate::{
        amf0::{self, MAX_STRING_LENGTH, Value},
        errors::AmfError,
    };

    #[test]
    fn decode_waits_for_complete_value() {
        let data = include_bytes!("../../test_data/amf0-command.bin");
        let mut codec = Amf0ValueCodec;
        let mut buf = BytesMut::new();
        assert!(codec.decode(&mut buf).unwrap().is_none());

        // feed the stream in small pieces, values come out once complete
        let mut values = Vec::new();
        for chunk in data.chunks(3) {
            buf.extend_from_slice(chunk);
            while let Some(value) = codec.decode(&mut buf).unwrap() {
                values.push(value);
            }
        }
        assert!(buf.is_empty());
        assert_eq!(
            values,
            vec![
                amf0::string("connect"),
                amf0::number(1),
                amf0::object([
                    ("app", amf0::string("live")),
                    ("tcUrl", amf0::string("rtmp://localhost/live")),
                ]),
                Value::Null,
            ]
        );
    }

    #[test]
    fn decode_leaves_partial_value() {
        let data = include_bytes!("../../test_data/amf0-object.bin");
        let mut codec = Amf0ValueCodec;
        let mut buf = BytesMut::from(&data[..data.len() - 1]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), data.len() - 1);
    }

    #[test]
    fn decode_error() {
        let mut codec = Amf0ValueCodec;
        let mut buf = BytesMut::from(&[0xFFu8, 0x05][..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(AmfError::Unsupported { marker: 0xFF })
        ));
    }

    #[test]
    fn encode() {
        let mut codec = Amf0ValueCodec;
        let mut buf = BytesMut::new();
        codec.encode(Value::Number(3.5), &mut buf).unwrap();
        codec.encode(Value::Null, &mut buf).unwrap();
        assert_eq!(
            &buf[..],
            &[0x00, 0x40, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05]
        );
    }

    #[test]
    fn failed_encode_keeps_stream_intact() {
        let mut codec = Amf0ValueCodec;
        let mut buf = BytesMut::new();
        codec.encode(amf0::bool(true), &mut buf).unwrap();
        let too_long = amf0::object([("a", amf0::string("x".repeat(MAX_STRING_LENGTH + 1)))]);
        assert!(matches!(
            codec.encode(too_long, &mut buf),
            Err(AmfError::StringTooLong { length: 65536 })
        ));
        codec.encode(Value::Null, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x01, 0x05]);

        assert_eq!(codec.decode(&mut buf).unwrap(), Some(amf0::bool(true)));
        assert_eq!(codec.decode(&mut buf).unwrap(), Some(Value::Null));
        assert!(buf.is_empty());
    }
}
