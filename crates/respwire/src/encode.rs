//! RESP2 encoder for serializing values to bytes.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::EncodeError;
use crate::types::RespValue;
use crate::utils::*;

/// How textual values (`SimpleString`) are written on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StringMode {
	/// `+text\r\n`
	#[default]
	Simple,
	/// `$len\r\ntext\r\n`
	Bulk,
}

impl From<bool> for StringMode {
	fn from(use_bulk_string: bool) -> Self {
		if use_bulk_string {
			StringMode::Bulk
		} else {
			StringMode::Simple
		}
	}
}

/// Trait for encoding RESP values.
pub trait RespEncoder {
	/// Append the encoding of `self` to `buf`.
	///
	/// On error `buf` is left exactly as it was on entry.
	fn encode_to(&self, buf: &mut BytesMut, mode: StringMode) -> Result<(), EncodeError>;

	fn encode_with(&self, mode: StringMode) -> Result<Bytes, EncodeError> {
		let mut buf = BytesMut::new();
		self.encode_to(&mut buf, mode)?;
		Ok(buf.freeze())
	}

	fn encode(&self) -> Result<Bytes, EncodeError> {
		self.encode_with(StringMode::Simple)
	}
}

impl RespEncoder for RespValue {
	fn encode_to(&self, buf: &mut BytesMut, mode: StringMode) -> Result<(), EncodeError> {
		let start = buf.len();
		encode_value(buf, self, mode).inspect_err(|_| buf.truncate(start))
	}
}

/// Encode `value` into a fresh buffer.
pub fn encode(value: &RespValue, mode: StringMode) -> Result<Bytes, EncodeError> {
	value.encode_with(mode)
}

/// Encode `value` as a bulk string whatever the mode; `None` is the null bulk
/// string.
pub fn encode_bulk_string(value: Option<&[u8]>) -> Bytes {
	let mut buf = BytesMut::new();
	match value {
		Some(s) => put_bulk_string(&mut buf, s),
		None => buf.put_slice(NULL_BULK_STRING),
	}
	buf.freeze()
}

fn encode_value(buf: &mut BytesMut, value: &RespValue, mode: StringMode) -> Result<(), EncodeError> {
	match value {
		RespValue::Null => buf.put_slice(NULL_BULK_STRING),
		RespValue::SimpleString(s) => match mode {
			StringMode::Simple => put_line(buf, SIMPLE_STRING, s, "simple string")?,
			StringMode::Bulk => put_bulk_string(buf, s),
		},
		RespValue::BulkString(s) => put_bulk_string(buf, s),
		RespValue::Integer(i) => put_integer(buf, *i),
		RespValue::Error(e) => put_line(buf, ERROR, e, "error message")?,
		RespValue::Array(arr) => {
			put_length(buf, ARRAY, arr.len());
			for item in arr {
				encode_value(buf, item, mode)?;
			}
		}
		RespValue::NullArray => buf.put_slice(NULL_ARRAY),
	}
	Ok(())
}

/// Single-line value: marker, payload, CRLF.
#[inline]
fn put_line(buf: &mut BytesMut, marker: u8, s: &[u8], what: &str) -> Result<(), EncodeError> {
	if let Some(pos) = find_line_break(s) {
		return Err(EncodeError::ProtocolViolation(format!(
			"{what} contains CR or LF at byte {pos}"
		)));
	}
	buf.put_u8(marker);
	buf.put_slice(s);
	buf.put_slice(CRLF);
	Ok(())
}

#[inline]
fn put_integer(buf: &mut BytesMut, i: i64) {
	buf.put_u8(INTEGER);
	buf.put_slice(i.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn put_length(buf: &mut BytesMut, marker: u8, length: usize) {
	buf.put_u8(marker);
	buf.put_slice(length.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn put_bulk_string(buf: &mut BytesMut, s: &[u8]) {
	put_length(buf, BULK_STRING, s.len());
	buf.put_slice(s);
	buf.put_slice(CRLF);
}
