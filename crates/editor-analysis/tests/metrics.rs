use editor_analysis::{DocumentMetrics, MetricsScanner, ScanPolicy, scan};
use pretty_assertions::assert_eq;

fn metrics(char_count: usize, word_count: usize, line_count: usize) -> DocumentMetrics {
    DocumentMetrics {
        char_count,
        word_count,
        line_count,
        current_column: None,
    }
}

#[test]
fn test_empty_text() {
    assert_eq!(scan(""), metrics(0, 0, 0));
}

#[test]
fn test_hello_world() {
    assert_eq!(scan("hello world\n"), metrics(11, 2, 1));
}

#[test]
fn test_no_alphanumerics_means_no_words() {
    for text in ["", " ", "\n\n", " \t - !? \n ...", "\r\n\t()[]{}"] {
        assert_eq!(scan(text).word_count, 0, "text: {:?}", text);
    }
}

#[test]
fn test_line_count_is_newline_count() {
    for text in ["a", "a\n", "\n", "a\nb\nc", "\n\n\nx", "tail\n\n"] {
        let expected = text.chars().filter(|&c| c == '\n').count();
        assert_eq!(scan(text).line_count, expected, "text: {:?}", text);
    }
}

#[test]
fn test_word_closed_by_end_of_text_and_newline() {
    assert_eq!(scan("one").word_count, 1);
    assert_eq!(scan("one\ntwo").word_count, 2);
    assert_eq!(scan("one\n\n\ntwo\n").word_count, 2);
}

#[test]
fn test_punctuation_counts_but_does_not_split_words() {
    let m = scan("don't stop - now!");
    assert_eq!(m.word_count, 3);
    assert_eq!(m.char_count, 17);
}

#[test]
fn test_unicode_alphanumerics() {
    let m = scan("héllo wörld 你好");
    assert_eq!(m.word_count, 3);
    assert_eq!(m.char_count, 14);
}

#[test]
fn test_crlf_counts_carriage_return_as_whitespace() {
    assert_eq!(scan("a\r\nb"), metrics(3, 2, 1));
}

// Resolved ambiguity: by default every whitespace character is counted. Collapsing each
// whitespace run to a single character is available as an explicit policy.
#[test]
fn test_whitespace_policy() {
    let text = "a   b\t\t c";
    assert_eq!(scan(text), metrics(9, 3, 0));

    let collapsed = MetricsScanner::new(ScanPolicy::CollapseWhitespaceRuns);
    assert_eq!(collapsed.scan(text), metrics(5, 3, 0));
}

#[test]
fn test_collapsed_run_stops_at_newline() {
    let collapsed = MetricsScanner::new(ScanPolicy::CollapseWhitespaceRuns);
    // "  " counts 1, newline counts a line, "  " counts 1 again.
    assert_eq!(collapsed.scan("x  \n  y"), metrics(4, 2, 1));
}

#[test]
fn test_invalid_character_stops_scan() {
    // The in-progress word "two" is not closed at the stop point.
    assert_eq!(scan("one two\0three four\n"), metrics(7, 1, 0));
    assert_eq!(scan("\u{7}abc"), metrics(0, 0, 0));
    assert_eq!(scan("ok\n\u{FFFD}rest"), metrics(2, 1, 1));
}

#[test]
fn test_scan_is_idempotent() {
    let text = "fn main() {\n    println!(\"hi\");\n}\n";
    assert_eq!(scan(text), scan(text));
}

#[test]
fn test_scan_chars_matches_scan() {
    let text = "line one\nline  two\n";
    let scanner = MetricsScanner::default();
    assert_eq!(scanner.scan_chars(text.chars()), scanner.scan(text));
}

#[test]
fn test_current_column() {
    let scanner = MetricsScanner::default();
    let text = "ab\ncd";
    assert_eq!(scanner.scan_with_cursor(text, 0).current_column, Some(1));
    assert_eq!(scanner.scan_with_cursor(text, 2).current_column, Some(3));
    assert_eq!(scanner.scan_with_cursor(text, 3).current_column, Some(1));
    assert_eq!(scanner.scan_with_cursor(text, 4).current_column, Some(2));
    assert_eq!(scanner.scan_with_cursor(text, 100).current_column, Some(3));

    let m = scanner.scan_with_cursor(text, 4);
    assert_eq!((m.char_count, m.word_count, m.line_count), (4, 2, 1));
}
