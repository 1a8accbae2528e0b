use editor_analysis::{
    AnalysisConfig, AnalysisError, BracePair, DocumentSession, Language, ReplaceOutcome,
    ScanPolicy, SearchMatch, SearchOptions, SearchOutcome, SearchPhase,
};

fn session(text: &str) -> DocumentSession {
    DocumentSession::new(text, AnalysisConfig::default())
}

#[test]
fn test_new_session_metrics() {
    let session = session("hello world\nsecond line");
    let metrics = session.metrics();
    assert_eq!(metrics.word_count, 4);
    assert_eq!(metrics.line_count, 1);
    assert_eq!(metrics.current_column, Some(1));
    assert_eq!(session.line_count(), 2);
    assert_eq!(session.version(), 0);
    assert!(!session.is_modified());
}

#[test]
fn test_edits_rescan_and_invalidate_search() {
    let mut session = session("cat dog cat");
    session
        .find("cat", false, SearchOptions::default())
        .unwrap();
    assert_eq!(session.search_state().phase(), SearchPhase::HasLastMatch);

    session.insert(0, "big ").unwrap();
    assert_eq!(session.search_state().phase(), SearchPhase::Idle);
    assert_eq!(session.selection(), None);
    assert_eq!(session.metrics().word_count, 4);
    assert_eq!(session.version(), 1);
    assert!(session.is_modified());

    let outcome = session.find("cat", true, SearchOptions::default()).unwrap();
    assert_eq!(outcome, SearchOutcome::Found(SearchMatch::new(4, 7)));

    session.mark_saved();
    assert!(!session.is_modified());
}

#[test]
fn test_find_selects_match_and_moves_cursor() {
    let mut session = session("one\ntwo three");
    let outcome = session
        .find("three", false, SearchOptions::default())
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Found(SearchMatch::new(8, 13)));
    assert_eq!(session.cursor(), 13);
    assert_eq!(session.selection(), Some(SearchMatch::new(8, 13)));
    assert_eq!(session.metrics().current_column, Some(10));
}

#[test]
fn test_failed_find_keeps_cursor() {
    let mut session = session("one two three");
    session.set_cursor(5);
    let outcome = session
        .find("four", false, SearchOptions::default())
        .unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound);
    assert_eq!(session.cursor(), 5);
    assert_eq!(session.metrics().current_column, Some(6));
}

#[test]
fn test_failed_find_clears_previous_selection() {
    let mut session = session("one two one");
    let options = SearchOptions::default();
    session.find("one", false, options).unwrap();
    assert_eq!(session.selection(), Some(SearchMatch::new(0, 3)));

    let outcome = session.find("three", true, options).unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound);
    assert_eq!(session.selection(), None);
    assert_eq!(session.cursor(), 3);
    assert_eq!(session.search_state().phase(), SearchPhase::Idle);
}

#[test]
fn test_set_cursor_clamps() {
    let mut session = session("abc");
    session.set_cursor(99);
    assert_eq!(session.cursor(), 3);
    assert_eq!(session.metrics().current_column, Some(4));
}

#[test]
fn test_insert_and_delete_adjust_cursor() {
    let mut session = session("hello world");
    session.set_cursor(6);

    session.insert(0, ">> ").unwrap();
    assert_eq!(session.cursor(), 9);
    session.insert(11, "!").unwrap();
    assert_eq!(session.cursor(), 9);

    session.delete(0..3).unwrap();
    assert_eq!(session.cursor(), 6);
    session.delete(4..8).unwrap();
    assert_eq!(session.cursor(), 4);
    assert_eq!(session.text(), "hell!rld");
}

#[test]
fn test_out_of_range_edits_are_rejected() {
    let mut session = session("abc");
    assert!(matches!(
        session.insert(4, "x"),
        Err(AnalysisError::OffsetOutOfRange { offset: 4, len: 3 })
    ));
    assert!(matches!(
        session.delete(1..5),
        Err(AnalysisError::OffsetOutOfRange { offset: 5, len: 3 })
    ));
    assert_eq!(session.version(), 0);
}

#[test]
fn test_reversed_delete_ranges_are_rejected() {
    let mut session = session("abcdef");
    let (start, end) = (7, 5);
    assert!(matches!(
        session.delete(start..end),
        Err(AnalysisError::OffsetOutOfRange { offset: 7, len: 6 })
    ));
    let (start, end) = (4, 2);
    assert!(matches!(
        session.delete(start..end),
        Err(AnalysisError::ReversedRange { start: 4, end: 2 })
    ));
    assert_eq!(session.text(), "abcdef");
    assert_eq!(session.version(), 0);

    session.delete(3..3).unwrap();
    assert_eq!(session.version(), 0);
}

#[test]
fn test_go_to_line() {
    let mut session = session("a\nbb\nccc");
    assert_eq!(session.go_to_line(2).unwrap(), 2);
    assert_eq!(session.cursor(), 2);
    assert_eq!(session.metrics().current_column, Some(1));
    assert_eq!(session.go_to_line(3).unwrap(), 5);

    assert!(matches!(
        session.go_to_line(0),
        Err(AnalysisError::LineOutOfRange {
            line: 0,
            line_count: 3
        })
    ));
    assert!(matches!(
        session.go_to_line(4),
        Err(AnalysisError::LineOutOfRange { line: 4, .. })
    ));
}

#[test]
fn test_replace_updates_text_and_metrics() {
    let mut session = session("foo foo");
    let outcome = session
        .replace("foo", "hello world", SearchOptions::default())
        .unwrap();
    assert_eq!(outcome, ReplaceOutcome::Replaced(SearchMatch::new(0, 11)));
    assert_eq!(session.text(), "hello world foo");
    assert_eq!(session.metrics().word_count, 3);
    assert_eq!(session.selection(), Some(SearchMatch::new(0, 11)));
    assert_eq!(session.cursor(), 11);
    assert_eq!(session.version(), 1);

    let outcome = session
        .replace("foo", "bar", SearchOptions::default())
        .unwrap();
    assert_eq!(outcome, ReplaceOutcome::Replaced(SearchMatch::new(12, 15)));
    assert_eq!(session.text(), "hello world bar");
}

#[test]
fn test_replace_all() {
    let mut session = session("aaa");
    session.set_cursor(3);
    assert_eq!(
        session
            .replace_all("a", "b", SearchOptions::default())
            .unwrap(),
        3
    );
    assert_eq!(session.text(), "bbb");
    assert_eq!(session.version(), 1);

    assert_eq!(
        session
            .replace_all("a", "b", SearchOptions::default())
            .unwrap(),
        0
    );
    assert_eq!(session.version(), 1);
}

#[test]
fn test_replace_all_shrinking_document_clamps_cursor() {
    let mut session = session("long long long");
    session.set_cursor(14);
    session
        .replace_all("long", "x", SearchOptions::default())
        .unwrap();
    assert_eq!(session.text(), "x x x");
    assert_eq!(session.cursor(), 5);
}

#[test]
fn test_language_from_file_name() {
    let mut session = session("int main() { return 0; }");
    assert_eq!(session.language(), Language::None);

    session.set_file_name("main.cpp");
    assert_eq!(session.language(), Language::Cpp);
    assert_eq!(session.file_name(), Some("main.cpp"));

    let checker = session.brace_checker();
    assert_eq!(checker.pairs(), BracePair::DEFAULT.as_slice());
    assert!(checker.is_balanced(&session.text(), 11).unwrap());

    session.set_file_name("README");
    assert_eq!(session.language(), Language::None);
}

#[test]
fn test_visual_column_expands_tabs() {
    let config = AnalysisConfig::default().with_tab_width(8);
    let mut session = DocumentSession::new("x\n\tab", config);
    session.set_cursor(4);
    assert_eq!(session.metrics().current_column, Some(3));
    assert_eq!(session.visual_column(), 10);
}

#[test]
fn test_session_uses_configured_scan_policy() {
    let config = AnalysisConfig::default().with_scan_policy(ScanPolicy::CollapseWhitespaceRuns);
    let mut session = DocumentSession::new("a    b", config);
    assert_eq!(session.metrics().char_count, 3);

    session.set_text("a b c");
    assert_eq!(session.metrics().char_count, 5);
    assert_eq!(session.metrics().word_count, 3);
}
