//! Error types for table construction.

use thiserror::Error;
use tokmap_token::Token;

/// Errors raised while building a [`LookupTable`](crate::LookupTable).
///
/// Lookups never fail; only construction under a rejecting
/// [`DuplicatePolicy`](crate::DuplicatePolicy) can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// The same token text appeared in more than one record.
	#[error("duplicate token {token}: records {first} and {duplicate}")]
	DuplicateToken {
		/// The repeated token.
		token: Token,
		/// Zero-based position of the record that introduced the token.
		first: usize,
		/// Zero-based position of the repeating record.
		duplicate: usize,
	},
}

/// Result type for table construction.
pub type Result<T> = std::result::Result<T, LookupError>;
