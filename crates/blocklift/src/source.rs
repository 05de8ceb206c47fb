//! Source text handling and the conversion of [byte
//! positions](`crate::span::BytePos`) into line/column
//! [locations](`Location`) for error reporting.

use std::fmt;
use std::ops::Deref;
use std::path::Path;

use crate::span::BytePos;

/// Describes a location within a source. The line is 1 indexed while the
/// column is 0 indexed and counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
	/// One indexed line number.
	line: usize,

	/// Zero indexed byte column.
	column: usize,
}

impl Location {
	/// Returns the one indexed line number.
	pub const fn line(&self) -> usize {
		self.line
	}

	/// Returns the zero indexed column.
	pub const fn column(&self) -> usize {
		self.column
	}

	/// Returns the string representation of the location. For displaying
	/// purposes both the line number and column are one indexed.
	pub fn display(&self) -> String {
		format!("{}:{}", self.line, self.column + 1)
	}
}

/// This struct holds the origin from which a [`Source`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceOrigin<'a> {
	/// The origin is a file located at the path.
	File(&'a Path),

	/// An unknown/anonymous origin (mainly used for testing).
	Anonymous,
}

impl<'a> fmt::Display for SourceOrigin<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => fmt::Display::fmt(&path.display(), f),
			Self::Anonymous => f.write_str("anonymous"),
		}
	}
}

/// Holds the contents of a template together with the origin where the
/// content came from and a precomputed line table used for error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source<'a> {
	/// Origin of the source.
	pub(crate) origin: SourceOrigin<'a>,

	/// Content of the source.
	pub(crate) content: &'a str,

	/// [Positions](`crate::span::BytePos`) of all characters which start a
	/// new line in [`Source::content`].
	pub(crate) lines: Vec<BytePos>,
}

impl<'a> Source<'a> {
	/// Creates a new source for the given `origin` and `content`.
	pub fn new(origin: SourceOrigin<'a>, content: &'a str) -> Self {
		// start first line at index 0
		let mut lines = vec![BytePos::new(0)];

		lines.extend(
			content
				.match_indices('\n')
				.map(|(idx, _)| BytePos::from_usize(idx + 1)),
		);

		Self {
			origin,
			content,
			lines,
		}
	}

	/// Creates a new source with [`SourceOrigin::Anonymous`] and the given
	/// `content`.
	pub fn anonymous(content: &'a str) -> Self {
		Self::new(SourceOrigin::Anonymous, content)
	}

	/// Creates a new source with [`SourceOrigin::File`] and the given
	/// `content`.
	pub fn file(path: &'a Path, content: &'a str) -> Self {
		Self::new(SourceOrigin::File(path), content)
	}

	/// Returns the zero indexed line index `pos` is located on.
	pub fn get_pos_line_idx(&self, pos: BytePos) -> usize {
		match self.lines.binary_search(&pos) {
			Ok(idx) => idx,
			Err(idx) => idx - 1,
		}
	}

	/// Converts a [position](`crate::span::BytePos`) to a [`Location`].
	pub fn get_pos_location(&self, pos: BytePos) -> Location {
		let line_idx = self.get_pos_line_idx(pos);
		let line_start = self.lines[line_idx];

		Location {
			line: line_idx + 1,
			column: pos.as_usize() - line_start.as_usize(),
		}
	}

	/// Get's the contents of a line which is located at the zero indexed
	/// `idx`. The line terminator is not included.
	pub fn get_idx_line(&self, idx: usize) -> &'a str {
		let line_start = self.lines[idx].as_usize();

		let line_end = self
			.lines
			.get(idx + 1)
			// -1 to drop the `\n` of the line
			.map_or_else(|| self.content.len(), |&next| next.as_usize() - 1);

		self.content[line_start..line_end].trim_end_matches('\r')
	}

	/// Get's the contents of the line on which `pos` is located on.
	pub fn get_pos_line(&self, pos: BytePos) -> &'a str {
		self.get_idx_line(self.get_pos_line_idx(pos))
	}

	/// Returns the origin of the source.
	pub const fn origin(&self) -> &SourceOrigin<'_> {
		&self.origin
	}

	/// Returns the whole content of the source.
	pub const fn content(&self) -> &str {
		self.content
	}
}

impl Deref for Source<'_> {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		self.content
	}
}
