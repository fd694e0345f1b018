use suggest_api::domain::suggestion::value_objects::{MAX_QUERY_LENGTH, SearchTerm};

#[test]
fn plain_text_survives_with_surrounding_whitespace_trimmed() {
    let term = SearchTerm::parse("  abc  ").expect("expected 'abc' to be searchable");
    assert_eq!(term.as_str(), "abc");
    assert_eq!(term.fulltext_term(), "abc*");
}

#[test]
fn empty_and_whitespace_only_input_is_not_searchable() {
    assert!(SearchTerm::parse("").is_none());
    assert!(SearchTerm::parse("   ").is_none());
}

#[test]
fn length_bounds_are_inclusive() {
    assert!(SearchTerm::parse("a").is_some());
    assert!(SearchTerm::parse(&"a".repeat(MAX_QUERY_LENGTH)).is_some());
    assert!(SearchTerm::parse(&"a".repeat(MAX_QUERY_LENGTH + 1)).is_none());
}

#[test]
fn operator_only_input_is_not_searchable() {
    assert!(SearchTerm::parse("+++").is_none());
    assert!(SearchTerm::parse(r#"+-><()~*"@"#).is_none());
}

#[test]
fn operator_runs_collapse_to_a_single_space() {
    let term = SearchTerm::parse("rust++book").unwrap();
    assert_eq!(term.as_str(), "rust book");

    let term = SearchTerm::parse(r#"mug "blue" (large)"#).unwrap();
    assert_eq!(term.as_str(), "mug  blue   large");
}

#[test]
fn user_supplied_wildcards_are_stripped_before_ours_is_appended() {
    let term = SearchTerm::parse("abc*").unwrap();
    assert_eq!(term.as_str(), "abc");
    assert_eq!(term.fulltext_term(), "abc*");
}

#[test]
fn sanitization_is_idempotent_on_clean_input() {
    for input in ["abc", "blue mug", "café au lait"] {
        let once = SearchTerm::parse(input).unwrap();
        let twice = SearchTerm::parse(once.as_str()).unwrap();
        assert_eq!(once.as_str(), twice.as_str());
    }
}

#[test]
fn length_bounds_count_characters_not_bytes() {
    // 100 two-byte characters is still within bounds
    assert!(SearchTerm::parse(&"é".repeat(100)).is_some());
    assert!(SearchTerm::parse(&"é".repeat(101)).is_none());
}
