//! Immutable byte-string tokens.
//!
//! A [`Token`] is a view over immutable bytes. Clones and sub-slices share the
//! same storage, and tokens built with [`Token::from_static`] do not copy their
//! text at all. Equality, ordering and hashing are by byte content, so two
//! tokens built from different buffers with the same bytes are the same key.

use std::borrow::Borrow;
use std::fmt;
use std::ops::RangeBounds;

use bytes::Bytes;

#[cfg(test)]
mod tests;

/// An immutable, possibly non-owning byte string.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(Bytes);

impl Token {
	/// Creates an empty token.
	pub const fn new() -> Self {
		Self(Bytes::new())
	}

	/// Wraps static text without copying it.
	pub const fn from_static(text: &'static str) -> Self {
		Self(Bytes::from_static(text.as_bytes()))
	}

	/// Wraps static bytes without copying them.
	pub const fn from_static_bytes(bytes: &'static [u8]) -> Self {
		Self(Bytes::from_static(bytes))
	}

	/// Returns the raw bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Returns the text when the bytes are valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.0).ok()
	}

	/// Length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true for the zero-length token.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns a sub-token sharing this token's storage.
	///
	/// # Panics
	///
	/// Panics if the range is out of bounds, like slice indexing.
	pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
		Self(self.0.slice(range))
	}

	/// Returns the token with leading and trailing ASCII whitespace removed.
	///
	/// The result shares storage with `self`.
	pub fn trim_ascii(&self) -> Self {
		Self(self.0.slice_ref(self.0.trim_ascii()))
	}

	/// Returns an ASCII-lowercased copy.
	///
	/// Tokens without uppercase ASCII bytes are returned as a cheap clone.
	pub fn to_ascii_lowercase(&self) -> Self {
		if !self.0.iter().any(u8::is_ascii_uppercase) {
			return self.clone();
		}
		Self(Bytes::from(self.0.to_ascii_lowercase()))
	}

	/// Returns an ASCII-uppercased copy.
	///
	/// Tokens without lowercase ASCII bytes are returned as a cheap clone.
	pub fn to_ascii_uppercase(&self) -> Self {
		if !self.0.iter().any(u8::is_ascii_lowercase) {
			return self.clone();
		}
		Self(Bytes::from(self.0.to_ascii_uppercase()))
	}

	/// Compares against `other` ignoring ASCII case.
	pub fn eq_ignore_ascii_case(&self, other: impl AsRef<[u8]>) -> bool {
		self.0.eq_ignore_ascii_case(other.as_ref())
	}

	/// Returns the underlying shared buffer.
	pub fn into_bytes(self) -> Bytes {
		self.0
	}
}

impl AsRef<[u8]> for Token {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Borrow<[u8]> for Token {
	fn borrow(&self) -> &[u8] {
		&self.0
	}
}

impl From<&str> for Token {
	fn from(text: &str) -> Self {
		Self(Bytes::copy_from_slice(text.as_bytes()))
	}
}

impl From<String> for Token {
	fn from(text: String) -> Self {
		Self(Bytes::from(text))
	}
}

impl From<&[u8]> for Token {
	fn from(bytes: &[u8]) -> Self {
		Self(Bytes::copy_from_slice(bytes))
	}
}

impl From<Vec<u8>> for Token {
	fn from(bytes: Vec<u8>) -> Self {
		Self(Bytes::from(bytes))
	}
}

impl From<Bytes> for Token {
	fn from(bytes: Bytes) -> Self {
		Self(bytes)
	}
}

impl PartialEq<[u8]> for Token {
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

impl PartialEq<str> for Token {
	fn eq(&self, other: &str) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl PartialEq<&str> for Token {
	fn eq(&self, other: &&str) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl PartialEq<Token> for str {
	fn eq(&self, other: &Token) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl PartialEq<Token> for &str {
	fn eq(&self, other: &Token) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&String::from_utf8_lossy(&self.0))
	}
}

impl fmt::Debug for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Token(\"{}\")", self.0.escape_ascii())
	}
}
