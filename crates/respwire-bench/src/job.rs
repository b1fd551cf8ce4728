use bytes::Bytes;
use bytes::BytesMut;
use respwire::EncodeError;
use respwire::RespEncoder;
use respwire::RespValue;
use respwire::StringMode;
use ulid::Ulid;

/// One benchmark operation: encode a `SET key key` and a `GET key` frame.
#[derive(Debug, Clone)]
pub struct Job {
	key: Bytes,
	set: RespValue,
	get: RespValue,
	mode: StringMode,
}

impl Job {
	/// Create a job around a freshly generated key of `key_size` bytes.
	pub fn new(key_size: usize, mode: StringMode) -> Self {
		Self::with_key(random_key(key_size), mode)
	}

	pub fn with_key(key: Bytes, mode: StringMode) -> Self {
		let set = RespValue::array(vec![
			RespValue::from("SET"),
			RespValue::SimpleString(key.clone()),
			RespValue::SimpleString(key.clone()),
		]);
		let get = RespValue::array(vec![
			RespValue::from("GET"),
			RespValue::SimpleString(key.clone()),
		]);
		Self {
			key,
			set,
			get,
			mode,
		}
	}

	pub fn key(&self) -> &Bytes {
		&self.key
	}

	pub fn mode(&self) -> StringMode {
		self.mode
	}

	/// Encode both frames and return the number of bytes produced.
	pub fn run_once(&self) -> Result<usize, EncodeError> {
		let mut buf = BytesMut::with_capacity(2 * self.key.len() + 64);
		self.set.encode_to(&mut buf, self.mode)?;
		self.get.encode_to(&mut buf, self.mode)?;
		Ok(buf.len())
	}
}

/// Printable ASCII key of exactly `size` bytes.
pub fn random_key(size: usize) -> Bytes {
	let mut key = String::with_capacity(size + 26);
	while key.len() < size {
		key.push_str(&Ulid::new().to_string());
	}
	key.truncate(size);
	Bytes::from(key)
}
