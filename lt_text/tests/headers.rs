//! ABOUTME: Header and padding behavior on color-coded input
//! ABOUTME: Strict and lenient header entry points are checked side by side

use lt_core::Error;
use lt_text::{
    format_header, make_header, pad, squeeze, visible_length, PadOptions, HORIZONTAL_BAR,
};
use test_support::{colored, long_string};

#[test]
fn test_unknown_level_policies_differ() {
    let header = "Cluster Ready";

    assert!(matches!(
        format_header(header, "bogus"),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(make_header(header, "bogus"), header);
}

#[test]
fn test_pad_colored_text_to_visible_width() {
    let text = format!("{} and {}", colored("31", "red"), colored("1;32", "green"));
    assert_eq!(visible_length(&text), 13);

    let line = pad(&text, 40, &PadOptions::fill(HORIZONTAL_BAR).left(4).sep(" "));
    assert!(line.starts_with("──── "));
    assert_eq!(visible_length(&line), 40);
}

#[test]
fn test_squeeze_long_line_for_display() {
    let line = long_string('x', 200);
    let short = squeeze(&line, 79, 3).unwrap();
    assert_eq!(short.chars().count(), 79);
    assert!(short.ends_with("..xxx"));
}

#[test]
fn test_debug_header_width_matches_trace_header() {
    let debug = make_header("node started", "debug");
    let trace = make_header("node started", "trace");
    assert_eq!(visible_length(&debug), visible_length(&trace));
}
