//! Token to enum lookup tables.
//!
//! Parsers of configuration directives, protocol keywords and header names
//! declare one [`LookupTable`] per enumeration domain and map each input token
//! with a single [`LookupTable::lookup`] call instead of string-comparison
//! chains. Unknown tokens come back as the table's invalid sentinel, never as
//! an error.
//!
//! ```
//! use tokmap_lookup::lookup_table;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Method { Unknown, Get, Post }
//!
//! lookup_table! {
//! 	static METHODS: LookupTable<Method> = Method::Unknown; {
//! 		"GET" => Method::Get,
//! 		"POST" => Method::Post,
//! 	}
//! }
//!
//! assert_eq!(METHODS.lookup("GET"), Method::Get);
//! assert_eq!(METHODS.lookup("get"), Method::Unknown);
//! ```

mod error;
mod options;
mod record;
mod table;

pub use error::{LookupError, Result};
pub use options::{DuplicatePolicy, TableOptions};
pub use record::Record;
pub use table::LookupTable;
pub use tokmap_token::Token;

/// Declares a lazily built `static` [`LookupTable`].
///
/// The table is constructed with [`LookupTable::new`] on first access, so
/// duplicate tokens resolve last-wins. Construction completes before any
/// caller observes the table.
#[macro_export]
macro_rules! lookup_table {
	(
		$(#[$meta:meta])*
		$vis:vis static $name:ident: LookupTable<$ty:ty> = $invalid:expr; {
			$($text:literal => $value:expr),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis static $name: ::std::sync::LazyLock<$crate::LookupTable<$ty>> = ::std::sync::LazyLock::new(|| {
			$crate::LookupTable::<$ty>::new(
				$invalid,
				::std::vec::Vec::<($crate::Token, $ty)>::from([$(($crate::Token::from_static($text), $value)),*]),
			)
		});
	};
}
