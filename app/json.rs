use amf_formats::{Properties, Value, amf0};
use serde_json::{Map, Number};

pub(crate) fn to_json(value: &Value) -> serde_json::Value {
    match value {
        // json has no representation for nan and infinities
        Value::Number(n) => Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Null => serde_json::Value::Null,
        Value::Object(entries) | Value::EcmaArray(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect::<Map<_, _>>(),
        ),
    }
}

/// JSON arrays have no AMF0 counterpart here, they become ECMA arrays keyed
/// by index.
pub(crate) fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => amf0::ecma_array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), from_json(item))),
        ),
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), from_json(value)))
                .collect::<Properties>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use amf_formats::{Value, amf0};
    use serde_json::json;

    use super::{from_json, to_json};

    #[test]
    fn from_json_value() {
        let value = from_json(&json!({
            "app": "live",
            "fpad": false,
            "audioCodecs": 3575,
            "tags": ["a", "b"],
            "extra": null,
        }));
        assert_eq!(
            value,
            amf0::object([
                ("app", amf0::string("live")),
                ("fpad", amf0::bool(false)),
                ("audioCodecs", amf0::number(3575)),
                (
                    "tags",
                    amf0::ecma_array([("0", amf0::string("a")), ("1", amf0::string("b"))])
                ),
                ("extra", Value::Null),
            ])
        );
    }

    #[test]
    fn to_json_value() {
        let value = amf0::ecma_array([
            ("duration", amf0::number(0)),
            ("encoder", amf0::string("Lavf")),
            ("nan", amf0::number(f64::NAN)),
            ("stereo", amf0::bool(true)),
        ]);
        assert_eq!(
            to_json(&value),
            json!({
                "duration": 0.0,
                "encoder": "Lavf",
                "nan": null,
                "stereo": true,
            })
        );
    }

    #[test]
    fn keys_keep_document_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zed": 1, "app": "live", "meta": {"width": 2, "height": 1}}"#)
                .unwrap();
        let value = from_json(&json);
        let entries = value.try_as_object().unwrap();
        assert_eq!(entries.keys().collect::<Vec<_>>(), ["zed", "app", "meta"]);
        assert_eq!(
            &value.write_to_vec().unwrap()[..6],
            &[0x03, 0x00, 0x03, b'z', b'e', b'd']
        );

        let back = to_json(&value);
        assert_eq!(
            back.as_object().unwrap().keys().collect::<Vec<_>>(),
            ["zed", "app", "meta"]
        );
        assert_eq!(
            serde_json::to_string(&back["meta"]).unwrap(),
            r#"{"width":2.0,"height":1.0}"#
        );
    }
}
