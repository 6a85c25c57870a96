//! Status codes and reserved characters shared by every stub implementation.

/// Status of an invocation that succeeded.
pub const OK: i32 = 200;

/// Statuses at or above this value are errors.
pub const ERRORTHRESHOLD: i32 = 400;

/// Status of an invocation that failed.
pub const ERROR: i32 = 500;

/// Separator between the components of a composite key. Also the first
/// character of every composite key.
pub(crate) const MIN_UNICODE_RUNE: char = '\u{0}';

/// Upper bound used when turning a composite key prefix into a range.
pub(crate) const MAX_UNICODE_RUNE: char = '\u{10FFFF}';
