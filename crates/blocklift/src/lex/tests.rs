use pretty_assertions::assert_eq;

use super::*;

/// A block interior resembling what real template files contain.
const BODY: &str = "{{ config(foo=\"bar\") }}\r\nselect * from this.that\r\n";

#[test]
fn single_block() {
	crate::tests::setup_test_env();

	let content = "{% mytype foo %} some stuff {% endmytype %}";

	let blocks = BlockLexer::new(content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].block_type_name, "mytype");
	assert_eq!(blocks[0].block_name, "foo");
	assert_eq!(blocks[0].data, " some stuff ");
	assert_eq!(blocks[0].block_data, content);
	assert_eq!(blocks[0].span(), &ByteSpan::new(0usize, content.len()));
}

#[test]
fn pending_prefix_belongs_to_the_block() {
	crate::tests::setup_test_env();

	let content = ["  \n\r\t{%- mytype foo %}", BODY, "{%endmytype -%}"].concat();

	let blocks = BlockLexer::new(&content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].block_type_name, "mytype");
	assert_eq!(blocks[0].block_name, "foo");
	// no marker on the end tag's open token, trailing whitespace stays
	assert_eq!(blocks[0].data, BODY);
	assert_eq!(blocks[0].block_data, content);
}

#[test]
fn multiple_blocks_in_source_order() {
	crate::tests::setup_test_env();

	let body_two = "{{ config(bar=1)}}\r\nselect * from {% if foo %} thing \
		{% else %} other_thing {% endif %}";

	let content = [
		"  {% mytype foo %}",
		BODY,
		"{% endmytype %}",
		"\r\n{% othertype bar %}",
		body_two,
		"{% endothertype %}",
	]
	.concat();

	let blocks = BlockLexer::new(&content).lex().expect("Two blocks");

	assert_eq!(blocks.len(), 2);

	assert_eq!(blocks[0].block_type_name, "mytype");
	assert_eq!(blocks[0].block_name, "foo");
	assert_eq!(blocks[0].data, BODY);
	assert_eq!(
		blocks[0].block_data,
		["  {% mytype foo %}", BODY, "{% endmytype %}"].concat()
	);

	// the segment between the blocks belongs to the second block's prefix
	assert_eq!(blocks[1].block_type_name, "othertype");
	assert_eq!(blocks[1].block_name, "bar");
	assert_eq!(blocks[1].data, body_two);
	assert_eq!(
		blocks[1].block_data,
		["\r\n{% othertype bar %}", body_two, "{% endothertype %}"].concat()
	);
}

#[test]
fn comment_discards_the_pending_prefix() {
	crate::tests::setup_test_env();

	let block_data = ["  \n\r\t{%- mytype foo %}", BODY, "{%endmytype -%}"].concat();
	let content = ["{# my comment #}", block_data.as_str()].concat();

	let blocks = BlockLexer::new(&content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].block_type_name, "mytype");
	assert_eq!(blocks[0].block_name, "foo");
	assert_eq!(blocks[0].data, BODY);
	assert_eq!(blocks[0].block_data, block_data);
}

#[test]
fn comment_hides_tags() {
	crate::tests::setup_test_env();

	let block_data = ["  \n\r\t{%- mytype foo %}", BODY, "{%endmytype -%}"].concat();
	let comment =
		"{# external comment {% othertype bar %} select * from thing.other_thing{% endothertype %} #}";
	let content = [comment, block_data.as_str()].concat();

	let blocks = BlockLexer::new(&content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].block_type_name, "mytype");
	assert_eq!(blocks[0].block_name, "foo");
	assert_eq!(blocks[0].data, BODY);
	assert_eq!(blocks[0].block_data, block_data);
}

#[test]
fn comments_inside_a_block_stay_part_of_the_interior() {
	crate::tests::setup_test_env();

	let body = "{# my comment #} {{ config(foo=\"bar\") }}\r\nselect * from \
		{# my other comment embedding {% endmytype %} #} this.that\r\n";
	let content = ["  \n\r\t{%- mytype foo %}", body, "{% endmytype -%}"].concat();

	let blocks = BlockLexer::new(&content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].data, body);
	assert_eq!(blocks[0].block_data, content);
}

#[test]
fn end_tag_inside_a_comment_does_not_close() {
	crate::tests::setup_test_env();

	let content = "{% mytype foo %}a{# {% endmytype %} #}b{% endmytype %}";

	let blocks = BlockLexer::new(content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].data, "a{# {% endmytype %} #}b");
	assert_eq!(blocks[0].block_data, content);
}

#[test]
fn no_depth_counting_for_same_type_tags() {
	crate::tests::setup_test_env();

	let content = "{% mytype foo %}a{% mytype bar %}b{% endmytype %}c{% endmytype %}";

	let blocks = BlockLexer::new(content).lex().expect("A single block");

	// the first uncommented same-type end tag closes the block
	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].data, "a{% mytype bar %}b");
	assert_eq!(
		blocks[0].block_data,
		"{% mytype foo %}a{% mytype bar %}b{% endmytype %}"
	);
}

#[test]
fn trim_marker_on_the_end_tag_strips_trailing_whitespace() {
	crate::tests::setup_test_env();

	let with_marker = "{% mytype foo %}select 1  \t\r\n{%- endmytype %}";
	let blocks = BlockLexer::new(with_marker).lex().expect("A single block");
	assert_eq!(blocks[0].data, "select 1");
	// block_data is always captured byte exact
	assert_eq!(blocks[0].block_data, with_marker);

	let glued = "{% mytype foo %}select 1  \t\r\n{%-endmytype%}";
	let blocks = BlockLexer::new(glued).lex().expect("A single block");
	assert_eq!(blocks[0].data, "select 1");

	let without_marker = "{% mytype foo %}select 1  \t\r\n{% endmytype %}";
	let blocks = BlockLexer::new(without_marker)
		.lex()
		.expect("A single block");
	assert_eq!(blocks[0].data, "select 1  \t\r\n");
}

#[test]
fn start_tag_markers_do_not_affect_the_interior() {
	crate::tests::setup_test_env();

	let content = "{%- mytype foo -%}  x  {% endmytype %}";

	let blocks = BlockLexer::new(content).lex().expect("A single block");

	assert_eq!(blocks[0].data, "  x  ");
	assert_eq!(blocks[0].block_data, content);
}

#[test]
fn inert_tags_stay_in_the_pending_prefix() {
	crate::tests::setup_test_env();

	let content = "{% set a = 1 %}{% endfoo bar %}{% mytype foo %}x{% endmytype %}";

	let blocks = BlockLexer::new(content).lex().expect("A single block");

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].data, "x");
	assert_eq!(blocks[0].block_data, content);
}

#[test]
fn expression_delimiters_are_literal() {
	crate::tests::setup_test_env();

	let content = "{% mytype foo %}{{ x }} {{{ y }}}{% endmytype %}";

	let blocks = BlockLexer::new(content).lex().expect("A single block");

	assert_eq!(blocks[0].data, "{{ x }} {{{ y }}}");
}

#[test]
fn block_inside_a_comment_is_invisible() {
	crate::tests::setup_test_env();

	let content = "{# {% mytype foo %}x{% endmytype %} #}";

	assert_eq!(BlockLexer::new(content).lex(), Ok(Vec::new()));
}

#[test]
fn sources_without_blocks() {
	crate::tests::setup_test_env();

	assert_eq!(BlockLexer::new("").lex(), Ok(Vec::new()));
	assert_eq!(BlockLexer::new("just text").lex(), Ok(Vec::new()));
	assert_eq!(BlockLexer::new("{% set a = 1 %}").lex(), Ok(Vec::new()));
	assert_eq!(BlockLexer::new("{# comment #} text").lex(), Ok(Vec::new()));
}

#[test]
fn segments_between_blocks_are_attributed_forward() {
	crate::tests::setup_test_env();

	let content = "{% a x %}1{% enda %}mid{% b y %}2{% endb %}";

	let blocks = BlockLexer::new(content).lex().expect("Two blocks");

	assert_eq!(blocks.len(), 2);
	assert_eq!(blocks[0].block_data, "{% a x %}1{% enda %}");
	assert_eq!(blocks[1].block_data, "mid{% b y %}2{% endb %}");
	assert_eq!(blocks[1].data, "2");
}

#[test]
fn unterminated_comment() {
	crate::tests::setup_test_env();

	assert_eq!(
		BlockLexer::new("text {# never closed").lex(),
		Err(LexError::UnterminatedComment { pos: 5usize.into() })
	);

	// the same inside an open block
	assert_eq!(
		BlockLexer::new("{% mytype foo %}a{# x").lex(),
		Err(LexError::UnterminatedComment {
			pos: 17usize.into()
		})
	);
}

#[test]
fn unterminated_block() {
	crate::tests::setup_test_env();

	assert_eq!(
		BlockLexer::new("{% mytype foo %}\nselect 1").lex(),
		Err(LexError::UnterminatedBlock {
			block_type: "mytype".to_owned(),
			name: "foo".to_owned(),
			pos: 0usize.into()
		})
	);
}

#[test]
fn malformed_tag() {
	crate::tests::setup_test_env();

	assert_eq!(
		BlockLexer::new("ab{% mytype foo ").lex(),
		Err(LexError::MalformedTag { pos: 2usize.into() })
	);

	// the same inside an open block
	assert_eq!(
		BlockLexer::new("{% mytype foo %}a{% end").lex(),
		Err(LexError::MalformedTag {
			pos: 17usize.into()
		})
	);
}

#[test]
fn iterator_fuses_after_an_error() {
	crate::tests::setup_test_env();

	let mut lexer = BlockLexer::new("{% mytype foo %}");

	assert!(matches!(
		lexer.next(),
		Some(Err(LexError::UnterminatedBlock { .. }))
	));
	assert_eq!(lexer.next(), None);
}

#[test]
fn streaming_matches_collecting() {
	crate::tests::setup_test_env();

	let content = "{% a x %}1{% enda %}{% b y %}2{% endb %}";

	let streamed = BlockLexer::new(content)
		.map(|res| res.expect("A valid block"))
		.collect::<Vec<_>>();
	let collected = BlockLexer::new(content).lex().expect("Two blocks");

	assert_eq!(streamed, collected);
}
