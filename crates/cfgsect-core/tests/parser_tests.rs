//! Integration tests for the configuration parser

use cfgsect_core::classify::{classify, split_parameter, LineKind};
use cfgsect_core::{
    parse, Cursor, CursorPosition, Document, DocumentBuilder, ParseError, ParseErrorKind, Parser,
};

fn collect(doc: &Document) -> Vec<(String, Vec<(String, String)>)> {
    let mut out = Vec::new();
    let mut cursor = doc.cursor();
    while let Some(section) = cursor.next_section() {
        let mut params = Vec::new();
        while let Some((k, v)) = cursor.next_parameter() {
            params.push((k.to_string(), v.to_string()));
        }
        out.push((section.to_string(), params));
    }
    out
}

// ============================================================================
// Structure Tests
// ============================================================================

#[test]
fn test_parse_two_sections() {
    let doc = parse("[A]\nx=1\n[B]\ny=2\n").unwrap();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.sections()[0].name(), "A");
    assert_eq!(doc.sections()[0].parameters()[0].name(), "x");
    assert_eq!(doc.sections()[0].parameters()[0].value(), "1");
    assert_eq!(doc.sections()[1].name(), "B");
    assert_eq!(doc.sections()[1].get("y"), Some("2"));
}

#[test]
fn test_parse_empty_input() {
    let doc = parse("").unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.parameter_count(), 0);
}

#[test]
fn test_parse_only_comments() {
    let doc = parse("; one\n# two\n\n   \t\n   ; indented\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_parse_section_without_parameters() {
    let doc = parse("[empty]\n[full]\nk=v\n").unwrap();
    assert_eq!(doc.len(), 2);
    assert!(doc.sections()[0].parameters().is_empty());
    assert_eq!(doc.sections()[1].parameters().len(), 1);
}

#[test]
fn test_parse_empty_section_name() {
    let doc = parse("[]\nk=v\n").unwrap();
    assert_eq!(doc.sections()[0].name(), "");
    assert_eq!(doc.lookup("", "k"), Some("v"));
}

#[test]
fn test_section_name_is_verbatim() {
    let doc = parse("  [ spaced name ] trailing text\n").unwrap();
    assert_eq!(doc.sections()[0].name(), " spaced name ");
}

#[test]
fn test_section_name_stops_at_first_bracket() {
    let doc = parse("[a]b]\n").unwrap();
    assert_eq!(doc.sections()[0].name(), "a");
}

#[test]
fn test_duplicates_are_kept() {
    let doc = parse("[A]\nk=1\nk=2\n[A]\nk=3\n").unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.parameter_count(), 3);
    assert_eq!(doc.sections()[0].parameters().len(), 2);
}

#[test]
fn test_line_numbers_recorded() {
    let doc = parse("; header\n[A]\n\nx=1\n[B]\ny=2\n").unwrap();
    assert_eq!(doc.sections()[0].line(), 2);
    assert_eq!(doc.sections()[0].parameters()[0].line(), 4);
    assert_eq!(doc.sections()[1].line(), 5);
    assert_eq!(doc.sections()[1].parameters()[0].line(), 6);
}

#[test]
fn test_spans_cover_source_lines() {
    let input = "[A]\r\n  key = value ; c\n\n[B]";
    let doc = parse(input).unwrap();

    let header = doc.sections()[0].span();
    assert_eq!(&input[header.start as usize..header.end as usize], "[A]");
    assert_eq!(header.len(), 3);

    let param = doc.sections()[0].parameters()[0].span();
    assert_eq!(param.line, 2);
    assert_eq!(
        &input[param.start as usize..param.end as usize],
        "  key = value ; c"
    );

    let last = doc.sections()[1].span();
    assert_eq!(last.line, 4);
    assert!(!last.is_empty());
}

#[test]
fn test_builder_entries_have_line_only_spans() {
    let mut builder = DocumentBuilder::new();
    builder.push_section("A", 7);
    let doc = builder.finish();
    assert_eq!(doc.sections()[0].line(), 7);
    assert!(doc.sections()[0].span().is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse("[A]\r\nx = 1\r\n[B]\r\ny=2").unwrap();
    assert_eq!(doc.sections()[0].name(), "A");
    assert_eq!(doc.lookup("a", "x"), Some("1"));
    assert_eq!(doc.lookup("b", "y"), Some("2"));
}

#[test]
fn test_final_line_without_newline() {
    let doc = parse("[A]\nx=1").unwrap();
    assert_eq!(doc.lookup("A", "x"), Some("1"));
}

// ============================================================================
// Parameter Line Tests
// ============================================================================

#[test]
fn test_key_and_value_whitespace() {
    let doc = parse("[Server]\n   DBfile   =    data.db   \n").unwrap();
    let param = &doc.sections()[0].parameters()[0];
    assert_eq!(param.name(), "DBfile");
    assert_eq!(param.value(), "data.db");
}

#[test]
fn test_inline_semicolon_comment() {
    let doc = parse("[A]\npath = /tmp/x ; scratch dir\n").unwrap();
    assert_eq!(doc.lookup("A", "path"), Some("/tmp/x"));
}

#[test]
fn test_hash_is_not_an_inline_comment() {
    let doc = parse("[A]\ncolor = #ff0000\n").unwrap();
    assert_eq!(doc.lookup("A", "color"), Some("#ff0000"));
}

#[test]
fn test_value_keeps_later_equals() {
    let doc = parse("[A]\nexpr = a=b=c\n").unwrap();
    assert_eq!(doc.lookup("A", "expr"), Some("a=b=c"));
}

#[test]
fn test_empty_key_and_value() {
    let doc = parse("[A]\n=\nk=\n").unwrap();
    let params = doc.sections()[0].parameters();
    assert_eq!(params[0].name(), "");
    assert_eq!(params[0].value(), "");
    assert_eq!(params[1].name(), "k");
    assert_eq!(params[1].value(), "");
}

#[test]
fn test_value_inner_whitespace_preserved() {
    let doc = parse("[A]\ngreeting = hello   world\n").unwrap();
    assert_eq!(doc.lookup("A", "greeting"), Some("hello   world"));
}

#[test]
fn test_comment_hides_separator() {
    let err = parse("[A]\nkey ; = value\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.line, Some(2));
}

#[test]
fn test_whole_line_comments_inside_section() {
    let doc = parse("[A]\n# note\n; other\nx=1\n").unwrap();
    assert_eq!(doc.sections()[0].parameters().len(), 1);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_unterminated_section() {
    let err = parse("[A\nx=1\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedSection);
    assert_eq!(err.line, Some(1));
}

#[test]
fn test_unterminated_section_later_line() {
    let err = parse("[A]\nx=1\n\n[B\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedSection);
    assert_eq!(err.line, Some(4));
}

#[test]
fn test_parameter_outside_section() {
    let err = parse("x=1\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ParameterOutsideSection);
    assert_eq!(err.line, Some(1));
}

#[test]
fn test_outside_section_wins_over_missing_separator() {
    let err = parse("; comment\njust text\n[A]\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ParameterOutsideSection);
    assert_eq!(err.line, Some(2));
}

#[test]
fn test_missing_separator() {
    let err = parse("[A]\nx 1\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.line, Some(2));
}

#[test]
fn test_first_error_wins() {
    let err = parse("[A]\nbad\n[B\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.line, Some(2));
}

#[test]
fn test_errors_match_constructed_values() {
    let cases = [
        ("[A\n", ParseErrorKind::UnterminatedSection, 1),
        ("[A]\n\nx 1\n", ParseErrorKind::MissingSeparator, 3),
        ("\n; c\nx=1\n", ParseErrorKind::ParameterOutsideSection, 3),
    ];
    for (input, kind, line) in cases {
        assert_eq!(parse(input).unwrap_err(), ParseError::at_line(kind, line));
    }
}

#[test]
fn test_error_display() {
    let err = parse("[A]\nx 1\n").unwrap_err();
    assert_eq!(err.to_string(), "missing '=' in parameter line at line 2");
}

#[test]
fn test_parser_is_reusable() {
    let parser = Parser::new();
    assert!(parser.parse("oops\n").is_err());
    let doc = parser.parse("[A]\nx=1\n").unwrap();
    assert_eq!(doc.len(), 1);
}

// ============================================================================
// Cursor Tests
// ============================================================================

#[test]
fn test_cursor_file_order() {
    let doc = parse("[A]\nx=1\n[B]\ny=2\n").unwrap();
    let expected = vec![
        ("A".to_string(), vec![("x".to_string(), "1".to_string())]),
        ("B".to_string(), vec![("y".to_string(), "2".to_string())]),
    ];
    assert_eq!(collect(&doc), expected);
}

#[test]
fn test_cursor_rewind_restarts() {
    let doc = parse("[A]\nx=1\n[B]\ny=2\n").unwrap();
    let mut cursor = doc.cursor();

    assert_eq!(cursor.next_section(), Some("A"));
    assert_eq!(cursor.next_section(), Some("B"));
    assert_eq!(cursor.next_section(), None);

    cursor.rewind();
    assert_eq!(cursor.next_section(), Some("A"));
    assert_eq!(cursor.next_parameter(), Some(("x", "1")));
}

#[test]
fn test_cursor_stays_at_end() {
    let doc = parse("[A]\n").unwrap();
    let mut cursor = doc.cursor();
    assert_eq!(cursor.next_section(), Some("A"));
    assert_eq!(cursor.next_section(), None);
    assert_eq!(cursor.next_section(), None);
    assert!(cursor.current_section().is_none());
}

#[test]
fn test_cursor_parameter_without_section() {
    let doc = parse("[A]\nx=1\n").unwrap();
    let mut cursor = doc.cursor();
    assert_eq!(cursor.next_parameter(), None);
    assert_eq!(cursor.next_section(), Some("A"));
    assert_eq!(cursor.next_parameter(), Some(("x", "1")));
}

#[test]
fn test_cursor_next_section_resets_parameters() {
    let doc = parse("[A]\na1=1\na2=2\n[B]\nb1=3\n").unwrap();
    let mut cursor = doc.cursor();

    cursor.next_section();
    assert_eq!(cursor.next_parameter(), Some(("a1", "1")));
    cursor.next_section();
    assert_eq!(cursor.next_parameter(), Some(("b1", "3")));
    assert_eq!(cursor.next_parameter(), None);
    assert_eq!(cursor.next_parameter(), None);
}

#[test]
fn test_cursor_current_entries() {
    let doc = parse("[A]\nx=1\n").unwrap();
    let mut cursor = doc.cursor();
    assert!(cursor.current_parameter().is_none());

    cursor.next_section();
    cursor.next_parameter();
    assert_eq!(cursor.current_section().map(|s| s.name()), Some("A"));
    assert_eq!(cursor.current_parameter().map(|p| p.value()), Some("1"));
}

#[test]
fn test_independent_cursors() {
    let doc = parse("[A]\n[B]\n[C]\n").unwrap();
    let mut first = doc.cursor();
    let mut second = doc.cursor();

    assert_eq!(first.next_section(), Some("A"));
    assert_eq!(first.next_section(), Some("B"));
    assert_eq!(second.next_section(), Some("A"));
    assert_eq!(first.next_section(), Some("C"));
    assert_eq!(second.next_section(), Some("B"));
}

#[test]
fn test_cursor_resumes_from_saved_position() {
    let doc = parse("[A]\nx=1\ny=2\n[B]\nz=3\n").unwrap();
    let mut cursor = doc.cursor();
    cursor.next_section();
    cursor.next_parameter();

    let saved = cursor.position();
    let mut resumed = Cursor::with_position(&doc, saved);
    assert_eq!(resumed.next_parameter(), Some(("y", "2")));
    assert_eq!(resumed.next_section(), Some("B"));
    assert_eq!(cursor.next_parameter(), Some(("y", "2")));
}

#[test]
fn test_saved_position_at_end_stays_at_end() {
    let doc = parse("[A]\n").unwrap();
    let mut cursor = doc.cursor();
    cursor.next_section();
    assert_eq!(cursor.next_section(), None);

    let mut resumed = Cursor::with_position(&doc, cursor.position());
    assert_eq!(resumed.next_section(), None);
    assert_eq!(resumed.next_parameter(), None);
}

#[test]
fn test_default_position_is_rewound() {
    let doc = parse("[A]\nx=1\n").unwrap();
    let mut cursor = doc.cursor();
    cursor.next_section();
    cursor.rewind();
    assert_eq!(cursor.position(), CursorPosition::default());

    let mut fresh = Cursor::with_position(&doc, CursorPosition::default());
    assert_eq!(fresh.next_section(), Some("A"));
}

#[test]
fn test_position_from_larger_document_is_safe() {
    let big = parse("[A]\n[B]\n[C]\nk=v\n").unwrap();
    let small = parse("[A]\n").unwrap();
    let mut cursor = big.cursor();
    cursor.next_section();
    cursor.next_section();
    cursor.next_section();
    cursor.next_parameter();

    let mut foreign = Cursor::with_position(&small, cursor.position());
    assert!(foreign.current_section().is_none());
    assert_eq!(foreign.next_parameter(), None);
    assert_eq!(foreign.next_section(), None);
}

#[test]
fn test_empty_document_cursor() {
    let doc = Document::default();
    let mut cursor = doc.cursor();
    assert_eq!(cursor.next_section(), None);
    assert_eq!(cursor.next_parameter(), None);
}

#[test]
fn test_iterators_match_cursor() {
    let doc = parse("[A]\nx=1\ny=2\n[B]\nz=3\n").unwrap();
    let via_iter: Vec<_> = doc
        .iter()
        .map(|s| {
            (
                s.name().to_string(),
                s.iter()
                    .map(|p| (p.name().to_string(), p.value().to_string()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    assert_eq!(via_iter, collect(&doc));
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_lookup_case_insensitive() {
    let doc = parse("[Server]\nDBfile = data.db\n").unwrap();
    assert_eq!(doc.lookup("server", "dbfile"), Some("data.db"));
    assert_eq!(doc.lookup("SERVER", "DBFILE"), Some("data.db"));
}

#[test]
fn test_lookup_first_section_match() {
    let doc = parse("[A]\nk=v1\n[A]\nk=v2\n").unwrap();
    assert_eq!(doc.lookup("A", "k"), Some("v1"));
}

#[test]
fn test_lookup_only_first_matching_section() {
    let doc = parse("[A]\nx=1\n[a]\ny=2\n").unwrap();
    assert_eq!(doc.lookup("A", "y"), None);
    let values: Vec<_> = doc
        .sections_named("A")
        .filter_map(|s| s.get("y"))
        .collect();
    assert_eq!(values, vec!["2"]);
}

#[test]
fn test_lookup_first_parameter_match() {
    let doc = parse("[A]\nk=first\nK=second\n").unwrap();
    assert_eq!(doc.lookup("a", "k"), Some("first"));
    let all: Vec<_> = doc.section("a").unwrap().get_all("k").collect();
    assert_eq!(all, vec!["first", "second"]);
}

#[test]
fn test_section_index_first_match() {
    let doc = parse("[Other]\n[Main]\nk=1\n[MAIN]\nk=2\n").unwrap();
    assert_eq!(doc.section_index("main"), Some(1));
    assert_eq!(doc.section_index("absent"), None);
    assert_eq!(doc.section("main").map(|s| s.line()), Some(2));
}

#[test]
fn test_lookup_not_found() {
    let doc = parse("[A]\nx=1\n").unwrap();
    assert_eq!(doc.lookup("B", "x"), None);
    assert_eq!(doc.lookup("A", "y"), None);
    assert!(doc.section("missing").is_none());
}

#[test]
fn test_lookup_does_not_disturb_cursor() {
    let doc = parse("[A]\nx=1\n[B]\ny=2\n").unwrap();
    let mut cursor = doc.cursor();
    cursor.next_section();
    assert_eq!(doc.lookup("B", "y"), Some("2"));
    assert_eq!(cursor.next_parameter(), Some(("x", "1")));
}

// ============================================================================
// Builder and Teardown Tests
// ============================================================================

#[test]
fn test_builder_rejects_parameter_without_section() {
    let mut builder = DocumentBuilder::new();
    assert_eq!(
        builder.push_parameter("k", "v", 1),
        Err(ParseErrorKind::ParameterOutsideSection)
    );
    assert!(builder.document().is_empty());
}

#[test]
fn test_builder_appends_to_last_section() {
    let mut builder = DocumentBuilder::new();
    builder.push_section("one", 1);
    builder.push_parameter("a", "1", 2).unwrap();
    builder.push_section("two", 3);
    builder.push_parameter("b", "2", 4).unwrap();
    let doc = builder.finish();

    assert_eq!(doc.sections()[0].parameters().len(), 1);
    assert_eq!(doc.lookup("two", "b"), Some("2"));
    assert_eq!(doc.sections()[1].parameters()[0].line(), 4);
}

#[test]
fn test_drop_partial_document() {
    let mut builder = DocumentBuilder::new();
    builder.push_section(String::from("owned"), 1);
    builder.push_parameter(String::from("k"), String::from("v"), 2).unwrap();
    builder.push_section("next", 3);
    drop(builder);
}

#[test]
fn test_drop_empty_and_complete_documents() {
    drop(Document::default());
    drop(DocumentBuilder::new());
    let doc = parse("[A]\nx=1\n[B]\ny=2\n").unwrap();
    drop(doc.clone().into_owned());
    drop(doc);
}

#[test]
fn test_into_owned_outlives_input() {
    let doc = {
        let input = String::from("[A]\nx=1\n");
        let owned = parse(&input).unwrap().into_owned();
        owned
    };
    assert_eq!(doc.lookup("a", "x"), Some("1"));
}

// ============================================================================
// Classifier Tests
// ============================================================================

#[test]
fn test_classify_kinds() {
    assert_eq!(classify(""), Ok(LineKind::Blank));
    assert_eq!(classify(" \t\x0B\x0C"), Ok(LineKind::Blank));
    assert_eq!(classify("  # c"), Ok(LineKind::Blank));
    assert_eq!(classify(";c"), Ok(LineKind::Blank));
    assert_eq!(classify("\t[s] x"), Ok(LineKind::Section("s")));
    assert_eq!(classify("  k = v"), Ok(LineKind::Parameter("k = v")));
    assert_eq!(classify("[s"), Err(ParseErrorKind::UnterminatedSection));
}

#[test]
fn test_split_parameter() {
    assert_eq!(split_parameter("k = v"), Some(("k", "v")));
    assert_eq!(split_parameter("k\t=\tv ; note"), Some(("k", "v")));
    assert_eq!(split_parameter("k v"), None);
    assert_eq!(split_parameter("k ; = v"), None);
}
