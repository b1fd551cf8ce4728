//! RESP data types and value representation.

use bytes::Bytes;

use crate::error::EncodeError;

/// Represents a RESP2 protocol value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RespValue {
	/// Null: `$-1\r\n`
	Null,

	/// Simple string: `+OK\r\n`
	///
	/// Holds textual content. Encoded with [`StringMode::Bulk`] it is written
	/// as a bulk string instead.
	///
	/// [`StringMode::Bulk`]: crate::StringMode::Bulk
	SimpleString(Bytes),

	/// Bulk string: `$6\r\nfoobar\r\n`
	BulkString(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Error: `-ERR message\r\n`
	Error(Bytes),

	/// Array: `*2\r\n+foo\r\n+bar\r\n`
	Array(Vec<RespValue>),

	/// Null array: `*-1\r\n`
	NullArray,
}

impl RespValue {
	/// Check if the value is an error
	pub fn is_error(&self) -> bool {
		matches!(self, RespValue::Error(_))
	}

	/// Check if the value is null (either form)
	pub fn is_null(&self) -> bool {
		matches!(self, RespValue::Null | RespValue::NullArray)
	}

	/// Try to convert to a string slice
	pub fn as_str(&self) -> Option<&str> {
		match self {
			RespValue::SimpleString(s) | RespValue::BulkString(s) | RespValue::Error(s) => {
				std::str::from_utf8(s).ok()
			}
			_ => None,
		}
	}

	/// Try to convert to bytes
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(b) | RespValue::BulkString(b) => Some(b),
			_ => None,
		}
	}

	/// Try to convert to integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			RespValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Try to convert to array
	pub fn as_array(&self) -> Option<&[RespValue]> {
		match self {
			RespValue::Array(a) => Some(a),
			_ => None,
		}
	}

	/// Try to consume and convert to Vec<RespValue>
	pub fn into_vec(self) -> Option<Vec<RespValue>> {
		match self {
			RespValue::Array(a) => Some(a),
			_ => None,
		}
	}

	// Convenience constructors

	/// Create a simple string value
	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		RespValue::SimpleString(s.into())
	}

	/// Create a bulk string value
	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		RespValue::BulkString(s.into())
	}

	/// Create an error value
	pub fn error(e: impl Into<Bytes>) -> Self {
		RespValue::Error(e.into())
	}

	/// Create an error value carrying the message of `err`
	pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
		RespValue::Error(Bytes::from(err.to_string()))
	}

	/// Create an integer value
	pub fn integer(i: i64) -> Self {
		RespValue::Integer(i)
	}

	/// Create an integer value from a floating point number.
	///
	/// Fails with [`EncodeError::InvalidInteger`] unless `n` is a whole number
	/// that fits in an `i64`.
	pub fn number(n: f64) -> Result<Self, EncodeError> {
		// i64::MAX as f64 rounds up to 2^63, which is already out of range
		if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
			Ok(RespValue::Integer(n as i64))
		} else {
			Err(EncodeError::InvalidInteger(n.to_string()))
		}
	}

	/// Create an array value from an iterator
	pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Array(items.into_iter().collect())
	}

	/// Create a null value
	pub fn null() -> Self {
		RespValue::Null
	}

	/// Create a null array value
	pub fn null_array() -> Self {
		RespValue::NullArray
	}
}

// Text is textual content; raw bytes are binary-safe bulk payloads.
impl From<&str> for RespValue {
	fn from(s: &str) -> Self {
		RespValue::SimpleString(Bytes::copy_from_slice(s.as_bytes()))
	}
}

impl From<String> for RespValue {
	fn from(s: String) -> Self {
		RespValue::SimpleString(Bytes::from(s))
	}
}

impl From<&[u8]> for RespValue {
	fn from(b: &[u8]) -> Self {
		RespValue::BulkString(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for RespValue {
	fn from(v: Vec<u8>) -> Self {
		RespValue::BulkString(Bytes::from(v))
	}
}

impl From<Bytes> for RespValue {
	fn from(b: Bytes) -> Self {
		RespValue::BulkString(b)
	}
}

impl From<i64> for RespValue {
	fn from(i: i64) -> Self {
		RespValue::Integer(i)
	}
}

impl From<i32> for RespValue {
	fn from(i: i32) -> Self {
		RespValue::Integer(i64::from(i))
	}
}

impl TryFrom<f64> for RespValue {
	type Error = EncodeError;

	fn try_from(n: f64) -> Result<Self, EncodeError> {
		RespValue::number(n)
	}
}

impl<T: Into<RespValue>> From<Vec<T>> for RespValue {
	fn from(v: Vec<T>) -> Self {
		RespValue::Array(v.into_iter().map(|x| x.into()).collect())
	}
}

impl<T: Into<RespValue>> From<Option<T>> for RespValue {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => RespValue::Null,
		}
	}
}
