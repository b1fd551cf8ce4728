use respwire::RespEncoder;
use respwire::RespValue;
use respwire::StringMode;

fn main() {
	println!("--- RESP Encode Example ---");

	let values = vec![
		RespValue::from("OK"),
		RespValue::integer(1000),
		RespValue::null(),
		RespValue::error("ERR unknown command"),
		RespValue::from(vec!["SET", "key", "value"]),
		RespValue::from("bad\r\nline"),
	];

	for mode in [StringMode::Simple, StringMode::Bulk] {
		println!("\n[Mode] {:?}", mode);
		for value in &values {
			match value.encode_with(mode) {
				Ok(bytes) => println!("[Encoder] {:?} => {:?}", value, bytes),
				Err(e) => eprintln!("[Encoder] {:?} rejected: {}", value, e),
			}
		}
	}
}
