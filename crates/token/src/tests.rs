use std::collections::BTreeMap;

use bytes::Bytes;
use proptest::prelude::*;

use super::Token;

#[test]
fn equality_is_by_content() {
	let owned = Token::from(String::from("GET"));
	let borrowed = Token::from_static("GET");
	assert_eq!(owned, borrowed);
	assert_eq!(owned, "GET");
	assert_eq!("GET", borrowed);
	assert_ne!(owned, Token::from("get"));
}

#[test]
fn static_bytes_are_wrapped_without_copying() {
	static RAW: &[u8] = b"\x00cache\xff";
	let token = Token::from_static_bytes(RAW);
	assert_eq!(token.as_bytes().as_ptr(), RAW.as_ptr());
	assert_eq!(token, *RAW);
	assert_eq!(token.as_str(), None);
}

#[test]
fn shared_buffers_convert_both_ways() {
	let buffer = Bytes::from_static(b"Content-Type");
	let token = Token::from(buffer.clone());
	assert_eq!(token, "Content-Type");
	assert_eq!(token.as_bytes().as_ptr(), buffer.as_ptr());

	let back = token.slice(8..).into_bytes();
	assert_eq!(back, Bytes::from_static(b"Type"));
	assert_eq!(back.as_ptr(), buffer[8..].as_ptr());
}

#[test]
fn empty_token_is_a_value() {
	let empty = Token::new();
	assert!(empty.is_empty());
	assert_eq!(empty.len(), 0);
	assert_eq!(empty, Token::from(""));
	assert_eq!(empty.as_str(), Some(""));
}

#[test]
fn ordering_is_bytewise() {
	let mut tokens = vec![Token::from("b"), Token::from("B"), Token::from("a"), Token::from("")];
	tokens.sort();
	assert_eq!(tokens, ["", "B", "a", "b"]);
}

#[test]
fn borrowed_slices_query_token_maps() {
	let mut map = BTreeMap::new();
	map.insert(Token::from_static("Host"), 1);
	assert_eq!(map.get(b"Host".as_slice()), Some(&1));
	assert_eq!(map.get("host".as_bytes()), None);
}

#[test]
fn slice_shares_storage() {
	let line = Token::from("Content-Length: 12");
	let name = line.slice(..14);
	assert_eq!(name, "Content-Length");
	assert_eq!(name.as_bytes().as_ptr(), line.as_bytes().as_ptr());
}

#[test]
fn trim_ascii_strips_both_ends() {
	assert_eq!(Token::from("  acl \t\r\n").trim_ascii(), "acl");
	assert_eq!(Token::from(" \t ").trim_ascii(), "");
	assert_eq!(Token::from("a b").trim_ascii(), "a b");
}

#[test]
fn case_helpers() {
	let token = Token::from("Cache-Control");
	assert_eq!(token.to_ascii_lowercase(), "cache-control");
	assert_eq!(token.to_ascii_uppercase(), "CACHE-CONTROL");
	assert!(token.eq_ignore_ascii_case("CACHE-control"));
	assert!(!token.eq_ignore_ascii_case("Cache-Contro"));
}

#[test]
fn lowercase_of_lowercase_reuses_storage() {
	let token = Token::from("already-lower");
	let lowered = token.to_ascii_lowercase();
	assert_eq!(lowered.as_bytes().as_ptr(), token.as_bytes().as_ptr());
}

#[test]
fn non_utf8_bytes_are_kept() {
	let token = Token::from(vec![0x66, 0xff, 0x6f]);
	assert_eq!(token.len(), 3);
	assert_eq!(token.as_str(), None);
	assert_eq!(token.to_string(), "f\u{fffd}o");
	assert_eq!(format!("{token:?}"), r#"Token("f\xffo")"#);
}

#[test]
fn debug_quotes_text() {
	assert_eq!(format!("{:?}", Token::from_static("GET")), r#"Token("GET")"#);
}

proptest! {
	#[test]
	fn prop_order_matches_byte_order(a in proptest::collection::vec(any::<u8>(), 0..16), b in proptest::collection::vec(any::<u8>(), 0..16)) {
		let ta = Token::from(a.clone());
		let tb = Token::from(b.clone());
		prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
		prop_assert_eq!(ta == tb, a == b);
	}

	#[test]
	fn prop_trim_matches_slice_trim(text in "[ \\ta-z]{0,12}") {
		let trimmed = Token::from(text.as_str()).trim_ascii();
		prop_assert_eq!(trimmed.as_bytes(), text.as_bytes().trim_ascii());
	}
}
