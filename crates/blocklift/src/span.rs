//! Byte positions and spans used to locate tags and blocks within a
//! [source](`crate::source::Source`).

use std::fmt;
use std::ops::Index;

use serde::Serialize;

/// A position of a byte within a source.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct BytePos(pub u32);

impl BytePos {
	/// Creates a new position with `value`.
	pub const fn new(value: u32) -> Self {
		Self(value)
	}

	/// Creates a new position from `value`.
	///
	/// Positions are stored as `u32`; sources larger than `u32::MAX` bytes
	/// are not supported.
	pub const fn from_usize(value: usize) -> Self {
		debug_assert!(value <= u32::MAX as usize);

		Self(value as u32)
	}

	/// Interprets the position as a `usize`.
	pub const fn as_usize(&self) -> usize {
		self.0 as usize
	}

	/// Interprets the position as a `u32`.
	pub const fn as_u32(&self) -> u32 {
		self.0
	}
}

impl From<usize> for BytePos {
	fn from(value: usize) -> Self {
		Self::from_usize(value)
	}
}

impl From<u32> for BytePos {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

impl fmt::Display for BytePos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

/// A span with a [start position](`ByteSpan::low`) and an
/// [end position](`ByteSpan::high`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ByteSpan {
	/// Start position of the span.
	pub low: BytePos,

	/// End position of the span.
	pub high: BytePos,
}

impl ByteSpan {
	/// Creates a new span from `low` and `high`.
	///
	/// # Note
	///
	/// If `high` is smaller than `low` the values are switched.
	pub fn new<L: Into<BytePos>, H: Into<BytePos>>(low: L, high: H) -> Self {
		let mut low = low.into();
		let mut high = high.into();

		if low > high {
			std::mem::swap(&mut low, &mut high);
		}

		Self { low, high }
	}

	/// Associates the span with the given `value`.
	pub const fn span<T>(self, value: T) -> Spanned<T> {
		Spanned::new(self, value)
	}

	/// Creates a new span containing both `self` and `other`.
	pub fn union(&self, other: &Self) -> Self {
		let low = std::cmp::min(self.low, other.low);
		let high = std::cmp::max(self.high, other.high);

		Self { low, high }
	}

	/// Returns the start of the span.
	pub const fn low(&self) -> &BytePos {
		&self.low
	}

	/// Returns the end of the span.
	pub const fn high(&self) -> &BytePos {
		&self.high
	}
}

impl fmt::Display for ByteSpan {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}..{}", self.low, self.high)
	}
}

impl Index<ByteSpan> for str {
	type Output = Self;

	fn index(&self, index: ByteSpan) -> &Self::Output {
		&self[index.low.as_usize()..index.high.as_usize()]
	}
}

impl Index<&ByteSpan> for str {
	type Output = Self;

	fn index(&self, index: &ByteSpan) -> &Self::Output {
		&self[index.low.as_usize()..index.high.as_usize()]
	}
}

/// Associates a [`ByteSpan`] with a generic `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<T> {
	/// A span.
	pub span: ByteSpan,

	/// The value associated with the span.
	pub value: T,
}

impl<T> Spanned<T> {
	/// Creates a new instance.
	pub const fn new(span: ByteSpan, value: T) -> Self {
		Self { span, value }
	}

	/// Returns the `span` associated with this struct.
	pub const fn span(&self) -> &ByteSpan {
		&self.span
	}

	/// Returns the `value` associated with this struct.
	pub const fn value(&self) -> &T {
		&self.value
	}

	/// Consumes self and returns the `value` associated with it.
	// Destructors can not be run at compile time.
	#[allow(clippy::missing_const_for_fn)]
	pub fn into_value(self) -> T {
		self.value
	}

	/// Consumes self and returns both `span` and `value`.
	// Destructors can not be run at compile time.
	#[allow(clippy::missing_const_for_fn)]
	pub fn into_inner(self) -> (ByteSpan, T) {
		(self.span, self.value)
	}
}
