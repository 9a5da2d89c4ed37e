use std::io::Cursor;

/// Reads a value from a resident buffer, yielding `None` while the buffer
/// does not yet hold a complete value. The cursor only advances when a
/// value is returned.
pub trait TryReadFrom<R: AsRef<[u8]>>: Sized {
    type Error;
    fn try_read_from(reader: &mut Cursor<R>) -> Result<Option<Self>, Self::Error>;
}
