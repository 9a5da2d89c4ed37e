use crate::traits::writer::WriteTo;
use std::fmt::Write;

pub fn hex_to_bytes(s: &str) -> Option<Vec<u8>> {
    if s.len().is_multiple_of(2) {
        (0..s.len())
            .step_by(2)
            .map(|i| {
                s.get(i..i + 2)
                    .and_then(|sub| u8::from_str_radix(sub, 16).ok())
            })
            .collect()
    } else {
        None
    }
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

pub fn writable_to_bytes<E, T: WriteTo<Vec<u8>, Error = E>>(writable: &T) -> Result<Vec<u8>, E> {
    let mut bytes = vec![];
    writable.write_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::{bytes_to_hex, hex_to_bytes};

    #[test]
    fn hex() {
        assert_eq!(bytes_to_hex(&[0x03, 0x00, 0x00, 0x09]), "03000009");
        assert_eq!(hex_to_bytes("03000009"), Some(vec![0x03, 0x00, 0x00, 0x09]));
        assert_eq!(hex_to_bytes("0300000"), None);
        assert_eq!(hex_to_bytes("zz"), None);
    }
}
