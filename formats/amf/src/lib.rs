pub mod amf0;
pub mod errors;

pub use amf0::{Kind, Properties, Value};

/// Typed field lookup on decoded objects, e.g. the command object of an
/// RTMP `connect`.
pub trait AmfComplexObject {
    fn extract_bool_field(&self, key: &str) -> Option<bool>;
    fn extract_number_field(&self, key: &str) -> Option<f64>;
    fn extract_string_field(&self, key: &str) -> Option<String>;
    fn extract_object_field(&self, key: &str) -> Option<&Properties>;
}

impl AmfComplexObject for Properties {
    fn extract_bool_field(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::try_as_bool)
    }

    fn extract_number_field(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::try_as_f64)
    }

    fn extract_string_field(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(Value::try_as_str)
            .map(|s| s.to_string())
    }

    fn extract_object_field(&self, key: &str) -> Option<&Properties> {
        self.get(key).and_then(Value::try_as_properties)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AmfComplexObject, Value, amf0};

    #[test]
    fn extract_fields() {
        let command = Value::read_from(include_bytes!("../test_data/amf0-nested.bin")).unwrap();
        let entries = command.try_as_object().unwrap();

        assert_eq!(entries.extract_string_field("app"), Some("live".to_string()));
        assert_eq!(entries.extract_number_field("app"), None);
        assert_eq!(entries.extract_string_field("missing"), None);

        let meta = entries.extract_object_field("meta").unwrap();
        assert_eq!(meta.extract_number_field("width"), Some(1920.0));
        assert_eq!(
            meta.extract_object_field("inner")
                .and_then(|inner| inner.extract_bool_field("deep")),
            Some(false)
        );
        assert_eq!(
            meta.get("inner"),
            Some(&amf0::object([("deep", amf0::bool(false))]))
        );
    }
}
