//! Construction options.

/// What to do when a token appears in more than one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicatePolicy {
	/// Later records overwrite earlier ones.
	#[default]
	LastWins,
	/// The earliest record is kept; later ones are ignored.
	FirstWins,
	/// Construction fails with [`LookupError::DuplicateToken`](crate::LookupError::DuplicateToken).
	Reject,
}

/// Options applied while a table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct TableOptions {
	/// Duplicate token handling.
	pub on_duplicate: DuplicatePolicy,
}

impl TableOptions {
	/// Default options: duplicates resolve last-wins.
	pub const fn new() -> Self {
		Self {
			on_duplicate: DuplicatePolicy::LastWins,
		}
	}

	/// Returns a copy with the given duplicate policy.
	pub const fn on_duplicate(self, policy: DuplicatePolicy) -> Self {
		Self { on_duplicate: policy }
	}
}
