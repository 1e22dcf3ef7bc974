//! Field naming between the JSON wire format and storage.
//!
//! Storage and the repository layer only know canonical field names. The
//! wire format exposes some fields under a different name, and inbound
//! payloads may use either. Inbound resolution happens once, at the
//! boundary, through [`FIELD_ALIASES`].

use serde_json::{Map, Value};

use crate::error::CoreError;

/// One canonical field and the external names that map onto it.
#[derive(Debug, Clone, Copy)]
pub struct FieldAlias {
    /// Name used by storage, models and repositories.
    pub canonical: &'static str,
    /// Additional names accepted on input besides `canonical`.
    pub accepted: &'static [&'static str],
}

/// Wire name of the 3D asset path field. Responses use it as well.
pub const MODEL_3D_PATH_WIRE: &str = "_3d_model_path";

pub const FIELD_ALIASES: &[FieldAlias] = &[FieldAlias {
    canonical: "model_3d_path",
    accepted: &[MODEL_3D_PATH_WIRE],
}];

/// Rewrite accepted aliases in `fields` to their canonical names.
///
/// If both the canonical name and an alias are present they must carry the
/// same value; the alias is then dropped. Differing values are rejected.
pub fn canonicalize_fields(fields: &mut Map<String, Value>) -> Result<(), CoreError> {
    for alias in FIELD_ALIASES {
        for accepted in alias.accepted {
            let Some(value) = fields.remove(*accepted) else {
                continue;
            };
            match fields.get(alias.canonical) {
                Some(existing) if *existing != value => {
                    return Err(CoreError::Validation(format!(
                        "'{accepted}' and '{}' carry different values",
                        alias.canonical
                    )));
                }
                Some(_) => {}
                None => {
                    fields.insert(alias.canonical.to_string(), value);
                }
            }
        }
    }
    Ok(())
}

/// Canonicalize a whole JSON value, which must be an object.
pub fn canonicalize(value: Value) -> Result<Value, CoreError> {
    match value {
        Value::Object(mut fields) => {
            canonicalize_fields(&mut fields)?;
            Ok(Value::Object(fields))
        }
        other => Err(CoreError::Validation(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
