//! Encoding of loosely typed input.
//!
//! `serde_json::Value` stands in for values whose shape is only known at
//! runtime. The mapping is:
//!
//! - `null` is [`RespValue::Null`]
//! - a string is textual content, [`RespValue::SimpleString`]
//! - a number is [`RespValue::Integer`] when it is whole
//! - an array is [`RespValue::Array`] when every element maps
//! - `{"error": "<message>"}` is [`RespValue::Error`]
//!
//! Anything else (booleans, other objects) is rejected with
//! [`EncodeError::InvalidInput`]. The whole structure is validated with
//! [`is_resp_value`] before anything is converted or written, so one bad
//! element rejects the whole value.

use bytes::Bytes;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::encode::RespEncoder;
use crate::encode::StringMode;
use crate::error::EncodeError;
use crate::types::RespValue;

/// Key of the single-entry object that carries an error message.
pub const ERROR_KEY: &str = "error";

/// Check whether `value` maps to a RESP value.
pub fn is_resp_value(value: &Value) -> bool {
	match value {
		Value::Null | Value::String(_) | Value::Number(_) => true,
		Value::Array(items) => items.iter().all(is_resp_value),
		Value::Object(map) => error_message(map).is_some(),
		Value::Bool(_) => false,
	}
}

/// Validate, convert and encode `value`.
pub fn encode_json(value: &Value, mode: StringMode) -> Result<Bytes, EncodeError> {
	let resp = RespValue::try_from(value)?;
	resp.encode_with(mode)
}

impl TryFrom<&Value> for RespValue {
	type Error = EncodeError;

	/// The whole structure is checked before any number is converted, so a
	/// shape error anywhere wins over an integer error.
	fn try_from(value: &Value) -> Result<Self, EncodeError> {
		if !is_resp_value(value) {
			return Err(invalid_input(value));
		}
		convert(value)
	}
}

impl TryFrom<Value> for RespValue {
	type Error = EncodeError;

	fn try_from(value: Value) -> Result<Self, EncodeError> {
		RespValue::try_from(&value)
	}
}

fn convert(value: &Value) -> Result<RespValue, EncodeError> {
	match value {
		Value::Null => Ok(RespValue::Null),
		Value::String(s) => Ok(RespValue::from(s.as_str())),
		Value::Number(n) => number_to_integer(n),
		Value::Array(items) => items
			.iter()
			.map(convert)
			.collect::<Result<Vec<_>, _>>()
			.map(RespValue::Array),
		Value::Object(map) => match error_message(map) {
			Some(message) => Ok(RespValue::error(message.to_owned())),
			None => Err(invalid_input(value)),
		},
		Value::Bool(_) => Err(invalid_input(value)),
	}
}

fn number_to_integer(n: &Number) -> Result<RespValue, EncodeError> {
	if let Some(i) = n.as_i64() {
		return Ok(RespValue::Integer(i));
	}
	match n.as_f64() {
		// u64 beyond i64::MAX lands here too and is rejected as out of range
		Some(f) if n.as_u64().is_none() => RespValue::number(f),
		_ => Err(EncodeError::InvalidInteger(n.to_string())),
	}
}

fn error_message(map: &Map<String, Value>) -> Option<&str> {
	if map.len() != 1 {
		return None;
	}
	map.get(ERROR_KEY).and_then(Value::as_str)
}

fn invalid_input(value: &Value) -> EncodeError {
	let kind = match value {
		Value::Bool(_) => "boolean",
		Value::Object(_) => "object",
		Value::Array(_) => "array with an invalid element",
		_ => "value",
	};
	log::debug!("rejecting {kind} that has no RESP representation: {value}");
	EncodeError::InvalidInput(format!("{kind} is not a RESP value"))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use serde_json::json;

	use super::*;

	#[rstest]
	#[case(json!(null), true)]
	#[case(json!("PING"), true)]
	#[case(json!(42), true)]
	#[case(json!(3.5), true)]
	#[case(json!([]), true)]
	#[case(json!(["a", [1, null]]), true)]
	#[case(json!({"error": "no such key"}), true)]
	#[case(json!(true), false)]
	#[case(json!({}), false)]
	#[case(json!({"error": 1}), false)]
	#[case(json!({"error": "x", "code": 1}), false)]
	#[case(json!(["ok", {}]), false)]
	#[case(json!([[["deep", false]]]), false)]
	fn test_is_resp_value(#[case] input: Value, #[case] expected: bool) {
		assert_eq!(is_resp_value(&input), expected);
	}

	#[test]
	fn test_convert_nested() {
		let value = json!(["SET", "key", 10, null, {"error": "ERR"}]);
		let resp = RespValue::try_from(&value).unwrap();
		assert_eq!(
			resp,
			RespValue::array(vec![
				RespValue::simple_string("SET"),
				RespValue::simple_string("key"),
				RespValue::integer(10),
				RespValue::null(),
				RespValue::error("ERR"),
			])
		);
	}

	#[rstest]
	#[case(json!(42.0), 42)]
	#[case(json!(-1), -1)]
	#[case(json!(i64::MAX), i64::MAX)]
	fn test_convert_whole_numbers(#[case] input: Value, #[case] expected: i64) {
		assert_eq!(RespValue::try_from(input), Ok(RespValue::Integer(expected)));
	}

	#[rstest]
	#[case(json!(3.5))]
	#[case(json!(u64::MAX))]
	#[case(json!(-0.5))]
	fn test_convert_invalid_numbers(#[case] input: Value) {
		assert!(matches!(
			RespValue::try_from(&input),
			Err(EncodeError::InvalidInteger(_))
		));
	}

	#[test]
	fn test_invalid_element_rejects_whole_array() {
		let value = json!(["ok", {}]);
		assert!(matches!(
			encode_json(&value, StringMode::Simple),
			Err(EncodeError::InvalidInput(_))
		));
	}

	#[rstest]
	#[case(json!([3.5, {}]))]
	#[case(json!([2.5, [1, true]]))]
	#[case(json!([u64::MAX, "ok", {"error": 1}]))]
	fn test_shape_error_wins_over_integer_error(#[case] input: Value) {
		assert!(matches!(
			encode_json(&input, StringMode::Simple),
			Err(EncodeError::InvalidInput(_))
		));
		assert!(matches!(
			RespValue::try_from(&input),
			Err(EncodeError::InvalidInput(_))
		));
	}

	#[test]
	fn test_encode_json_bulk() {
		let value = json!(["GET", "key"]);
		let encoded = encode_json(&value, StringMode::Bulk).unwrap();
		assert_eq!(encoded, b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n".as_slice());
	}
}
