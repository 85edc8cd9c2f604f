//! The token to value lookup table.

use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};

use tokmap_token::Token;
use tracing::{debug, trace, warn};

use crate::error::{LookupError, Result};
use crate::options::{DuplicatePolicy, TableOptions};
use crate::record::Record;


/// Number of overridden tokens included in the construction log summary.
const CONFLICT_SAMPLES: usize = 5;

/// Immutable mapping from textual tokens to values of an enumeration domain.
///
/// Built once from a sequence of `(token, value)` pairs and an `invalid`
/// sentinel. Afterwards [`lookup`](Self::lookup) returns the value of the
/// exactly matching token, or the sentinel when nothing matches. Matching is
/// case-sensitive and byte-exact; callers that want looser matching normalize
/// the key first (see [`Token::to_ascii_lowercase`]).
///
/// The table has no mutating methods, so a built table can be shared between
/// threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct LookupTable<V> {
	entries: BTreeMap<Token, V>,
	invalid: V,
}

impl<V> LookupTable<V> {
	/// Builds a table from `records`, later duplicates overwriting earlier ones.
	///
	/// Every pair is visited in iteration order; the end of the sequence ends
	/// construction. An empty sequence yields a table that answers `invalid`
	/// for every key. `invalid` is not checked against the mapped values.
	pub fn new<K, I>(invalid: V, records: I) -> Self
	where
		K: Into<Token>,
		I: IntoIterator<Item = (K, V)>,
	{
		let mut conflicts = Vec::new();
		let mut entries: BTreeMap<Token, V> = BTreeMap::new();
		for (text, value) in records {
			match entries.entry(text.into()) {
				Entry::Vacant(slot) => {
					slot.insert(value);
				}
				Entry::Occupied(mut slot) => {
					conflicts.push(slot.key().clone());
					slot.insert(value);
				}
			}
		}

		Self::finish(entries, invalid, &conflicts)
	}

	/// Builds a table applying `options` to duplicate tokens.
	///
	/// # Errors
	///
	/// Returns [`LookupError::DuplicateToken`] for the first repeated token when
	/// the policy is [`DuplicatePolicy::Reject`].
	pub fn with_options<K, I>(invalid: V, records: I, options: TableOptions) -> Result<Self>
	where
		K: Into<Token>,
		I: IntoIterator<Item = (K, V)>,
	{
		if options.on_duplicate == DuplicatePolicy::LastWins {
			return Ok(Self::new(invalid, records));
		}

		let mut conflicts = Vec::new();
		let mut slots: BTreeMap<Token, (usize, V)> = BTreeMap::new();
		for (position, (text, value)) in records.into_iter().enumerate() {
			match slots.entry(text.into()) {
				Entry::Vacant(slot) => {
					slot.insert((position, value));
				}
				Entry::Occupied(slot) => match options.on_duplicate {
					DuplicatePolicy::Reject => {
						let err = LookupError::DuplicateToken {
							token: slot.key().clone(),
							first: slot.get().0,
							duplicate: position,
						};
						warn!(error = %err, "lookup table rejected");
						return Err(err);
					}
					DuplicatePolicy::FirstWins | DuplicatePolicy::LastWins => conflicts.push(slot.key().clone()),
				},
			}
		}

		let entries = slots.into_iter().map(|(token, (_, value))| (token, value)).collect();
		Ok(Self::finish(entries, invalid, &conflicts))
	}

	/// Creates a table with no entries.
	pub fn empty(invalid: V) -> Self {
		Self {
			entries: BTreeMap::new(),
			invalid,
		}
	}

	fn finish(entries: BTreeMap<Token, V>, invalid: V, conflicts: &[Token]) -> Self {
		if !conflicts.is_empty() {
			let samples: Vec<_> = conflicts.iter().take(CONFLICT_SAMPLES).collect();
			debug!(count = conflicts.len(), ?samples, "duplicate lookup tokens overridden");
		}
		trace!(entries = entries.len(), "lookup table built");

		Self { entries, invalid }
	}

	/// Returns the stored value for `key`, or `None` when the token is unknown.
	pub fn get<K>(&self, key: &K) -> Option<&V>
	where
		K: AsRef<[u8]> + ?Sized,
	{
		self.entries.get(key.as_ref())
	}

	/// Returns true when `key` is a known token.
	pub fn contains<K>(&self, key: &K) -> bool
	where
		K: AsRef<[u8]> + ?Sized,
	{
		self.entries.contains_key(key.as_ref())
	}

	/// The sentinel returned for unknown tokens.
	pub fn invalid(&self) -> &V {
		&self.invalid
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in token byte order.
	pub fn iter(&self) -> btree_map::Iter<'_, Token, V> {
		self.entries.iter()
	}

	/// Iterates tokens in byte order.
	pub fn tokens(&self) -> btree_map::Keys<'_, Token, V> {
		self.entries.keys()
	}
}

impl<V: Copy> LookupTable<V> {
	/// Builds a table from literal records, later duplicates overwriting
	/// earlier ones.
	///
	/// Record names are wrapped without copying.
	pub fn from_records(invalid: V, records: &[Record<V>]) -> Self {
		Self::new(invalid, records.iter().map(|record| (record.token(), record.id)))
	}

	/// Builds a table from literal records applying `options`.
	///
	/// # Errors
	///
	/// See [`with_options`](Self::with_options).
	pub fn try_from_records(invalid: V, records: &[Record<V>], options: TableOptions) -> Result<Self> {
		Self::with_options(invalid, records.iter().map(|record| (record.token(), record.id)), options)
	}

	/// Maps `key` to its value, or to the invalid sentinel when unknown.
	///
	/// Accepts anything viewable as bytes: `&Token`, `&str`, `&[u8]`, `&String`.
	/// Never allocates and never fails.
	pub fn lookup<K>(&self, key: &K) -> V
	where
		K: AsRef<[u8]> + ?Sized,
	{
		self.entries.get(key.as_ref()).copied().unwrap_or(self.invalid)
	}
}

impl<'a, V> IntoIterator for &'a LookupTable<V> {
	type Item = (&'a Token, &'a V);
	type IntoIter = btree_map::Iter<'a, Token, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
