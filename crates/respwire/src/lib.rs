//! # respwire - RESP2 value encoder
//!
//! Turns in-memory values into the exact bytes a RESP2 (Redis Serialization
//! Protocol) peer expects on the wire.
//!
//! ## Features
//!
//! - **Closed value model**: [`RespValue`] covers null, simple and bulk
//!   strings, integers, errors, arrays and the null array
//! - **String mode**: textual values go out as simple or bulk strings
//! - **All-or-nothing**: a failed encode never leaves a partial frame behind
//! - **Dynamic input**: `serde_json::Value` is validated and encoded through
//!   [`encode_json`]
//!
//! ## Example
//!
//! ```rust
//! use respwire::RespEncoder;
//! use respwire::RespValue;
//! use respwire::StringMode;
//!
//! let cmd = RespValue::array(vec!["GET".into(), "key".into()]);
//! let encoded = cmd.encode_with(StringMode::Bulk).unwrap();
//! assert_eq!(&encoded[..], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
//! ```

mod encode;
mod error;
mod json;
mod types;
mod utils;

pub use encode::RespEncoder;
pub use encode::StringMode;
pub use encode::encode;
pub use encode::encode_bulk_string;
pub use error::EncodeError;
pub use json::ERROR_KEY;
pub use json::encode_json;
pub use json::is_resp_value;
pub use types::RespValue;
