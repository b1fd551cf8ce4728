//! Wire constants and byte helpers shared by the encoder.

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers for RESP2
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Null bulk string, the single wire form of `Null`.
pub const NULL_BULK_STRING: &[u8] = b"$-1\r\n";

/// Null array.
pub const NULL_ARRAY: &[u8] = b"*-1\r\n";

/// Position of the first CR or LF in `buf`, if any.
#[inline]
pub fn find_line_break(buf: &[u8]) -> Option<usize> {
	memchr::memchr2(b'\r', b'\n', buf)
}
