//! Rendering of [lexing failures](`crate::error::LexError`) against their
//! [source](`crate::source::Source`) as user facing diagnostics.
//!
//! The output follows the layout of rustc's diagnostics: the message, a
//! `-->` line with origin and location, the offending source line and a
//! caret underline, followed by an optional help line.

use color_eyre::owo_colors::OwoColorize;

use crate::error::LexError;
use crate::source::Source;
use crate::tag;

/// Formats `err` against `source` and emits it with the crate [`log`].
pub fn emit(err: &LexError, source: &Source<'_>) {
	log::error!(
		"{}{} {}",
		"error".bright_red().bold(),
		':'.bold(),
		render(err, source)
	);
}

/// Returns the help text displayed below the snippet for `err`.
fn help(err: &LexError) -> String {
	match err {
		LexError::UnterminatedComment { .. } => {
			format!("close the comment with `{}`", tag::COMMENT_CLOSE)
		}
		LexError::UnterminatedBlock { block_type, .. } => {
			format!(
				"close the block with `{} end{} {}`",
				tag::TAG_OPEN,
				block_type,
				tag::TAG_CLOSE
			)
		}
		LexError::MalformedTag { .. } => {
			format!("close the tag with `{}`", tag::TAG_CLOSE)
		}
	}
}

/// Formats `err` against `source` into a displayable string.
///
/// Columns are counted in bytes, as is the caret position. On lines
/// containing multi-byte characters before the offending token the
/// underline therefore sits further right than the visual column.
///
/// Example output:
///
/// ```text
/// block `mytype foo` opened at byte 12 is never closed
///  --> models/demo.sql:2:1
///   |
/// 2 | {% mytype foo %}
///   | ^^
///   |
///   = close the block with `{% endmytype %}`
/// ```
pub fn render(err: &LexError, source: &Source<'_>) -> String {
	/// Applies the style used for all scaffolding parts of the snippet.
	fn style<S: AsRef<str>>(s: S) -> String {
		s.as_ref().bright_blue().bold().to_string()
	}

	let location = source.get_pos_location(err.pos());
	let line = source.get_pos_line(err.pos());
	let line_nr = location.line().to_string();

	let left_pad = " ".repeat(line_nr.len());
	let separator = style("|");

	// tabs are displayed expanded, keep the underline aligned
	let tabs = line[..location.column()].matches('\t').count();
	let column = location.column() + tabs * 3;

	let mut out = String::new();

	out.push_str(&err.to_string().bold().to_string());
	out.push_str(&format!(
		"\n {}{} {}:{}",
		left_pad,
		style("-->"),
		source.origin(),
		location.display()
	));
	out.push_str(&format!("\n {} {}", left_pad, separator));
	out.push_str(&format!(
		"\n {} {} {}",
		line_nr,
		separator,
		line.replace('\t', "    ")
	));
	out.push_str(&format!(
		"\n {} {} {}{}",
		left_pad,
		separator,
		" ".repeat(column),
		style("^".repeat(tag::TAG_OPEN.len()))
	));
	out.push_str(&format!("\n {} {}", left_pad, separator));
	out.push_str(&format!(
		"\n {} {} {}",
		left_pad,
		style("="),
		help(err)
	));

	out
}
