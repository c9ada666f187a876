//! Schema-driven translation between records and their flat JSON wire shape.

use serde_json::Value;

use storefront_core::{FieldKind, FieldValue, Record, RecordData, Schema};

use crate::error::GatewayError;

pub(crate) fn decode_collection(
    schema: &Schema,
    value: Value,
) -> Result<Vec<Record>, GatewayError> {
    let Value::Array(items) = value else {
        return Err(malformed("expected a JSON array"));
    };
    items.iter().map(|item| decode_record(schema, item)).collect()
}

pub(crate) fn decode_record(schema: &Schema, value: &Value) -> Result<Record, GatewayError> {
    let Value::Object(object) = value else {
        return Err(malformed("expected a JSON object"));
    };

    // Backends disagree on id representation; both spellings are accepted
    // and normalized to the opaque string form.
    let id = match object.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(malformed("record is missing its id")),
    };

    let mut data = RecordData::new();
    for field in schema.fields {
        let raw = object.get(field.name).ok_or_else(|| {
            malformed(&format!("record {id} is missing field '{}'", field.name))
        })?;
        let value = match field.kind {
            FieldKind::Text => match raw {
                Value::String(text) => FieldValue::Text(text.clone()),
                _ => {
                    return Err(malformed(&format!(
                        "field '{}' of record {id} is not a string",
                        field.name
                    )))
                }
            },
            FieldKind::Money => match raw.as_f64() {
                Some(amount) => FieldValue::Number(amount),
                None => {
                    return Err(malformed(&format!(
                        "field '{}' of record {id} is not a number",
                        field.name
                    )))
                }
            },
        };
        data.insert(field.name, value);
    }

    Ok(Record { id, data })
}

/// Flat JSON body for create/update: text verbatim, money as a JSON number.
/// The id is never part of the body; the backend owns it.
pub(crate) fn encode_data(schema: &Schema, data: &RecordData) -> Value {
    let mut body = serde_json::Map::new();
    for field in schema.fields {
        if let Some(value) = data.get(field.name) {
            let json = match value {
                FieldValue::Text(text) => Value::String(text.clone()),
                FieldValue::Number(amount) => serde_json::Number::from_f64(*amount)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
            };
            body.insert(field.name.to_string(), json);
        }
    }
    Value::Object(body)
}

fn malformed(detail: &str) -> GatewayError {
    GatewayError::Network(format!("malformed response: {detail}"))
}
