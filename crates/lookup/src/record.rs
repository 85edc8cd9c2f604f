//! Literal table entries.

use tokmap_token::Token;

/// One `(name, id)` entry of a statically declared table.
///
/// ```
/// use tokmap_lookup::{LookupTable, Record};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Method { Unknown, Get, Post }
///
/// static METHODS: &[Record<Method>] = &[
/// 	Record::new("GET", Method::Get),
/// 	Record::new("POST", Method::Post),
/// ];
///
/// let table = LookupTable::from_records(Method::Unknown, METHODS);
/// assert_eq!(table.lookup("POST"), Method::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<V> {
	/// Token text.
	pub name: &'static str,
	/// Value the token maps to.
	pub id: V,
}

impl<V> Record<V> {
	pub const fn new(name: &'static str, id: V) -> Self {
		Self { name, id }
	}

	/// The record's name as a non-copying token.
	pub const fn token(&self) -> Token {
		Token::from_static(self.name)
	}
}

impl<V> From<(&'static str, V)> for Record<V> {
	fn from((name, id): (&'static str, V)) -> Self {
		Self { name, id }
	}
}
