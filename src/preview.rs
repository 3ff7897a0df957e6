//! Embedded preview metadata lines.
//!
//! A note document may carry its thumbnail as a single text line wrapping an
//! encoded payload in `<preview>`/`</preview>` tags. The line is editor-side
//! metadata; finished files do not keep it, so the writer strips it when the
//! file is finalized.

/// Opening tag of an embedded preview line.
pub const PREVIEW_START: &str = "<preview>";

/// Closing tag of an embedded preview line.
pub const PREVIEW_END: &str = "</preview>";

/// Check whether `line` is an embedded preview line.
///
/// `line` must not include its newline terminator. A preview line starts
/// with `<preview>` at offset 0 and ends with `</preview>` occupying exactly
/// its final 10 bytes.
pub fn is_preview_line(line: &[u8]) -> bool {
    line.starts_with(PREVIEW_START.as_bytes()) && line.ends_with(PREVIEW_END.as_bytes())
}

/// Build a preview line embedding an encoded thumbnail payload.
///
/// The payload must not contain newline characters; the returned line is
/// terminated with `\n`.
pub fn preview_line(payload: &str) -> String {
    debug_assert!(
        !payload.contains('\n'),
        "preview payload must be a single line"
    );
    format!("{PREVIEW_START}{payload}{PREVIEW_END}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_matching_line() {
        assert!(is_preview_line(b"<preview>iVBORw0KGgo=</preview>"));
        assert!(is_preview_line(b"<preview></preview>"));
    }

    #[test]
    fn test_tags_alone_do_not_match() {
        assert!(!is_preview_line(b"<preview>"));
        assert!(!is_preview_line(b"</preview>"));
        assert!(!is_preview_line(b""));
    }

    #[test]
    fn test_prefix_must_be_at_offset_zero() {
        assert!(!is_preview_line(b" <preview>x</preview>"));
        assert!(!is_preview_line(b"x<preview>x</preview>"));
    }

    #[test]
    fn test_suffix_must_end_the_line() {
        assert!(!is_preview_line(b"<preview>x</preview> "));
        assert!(!is_preview_line(b"<preview>x</preview>x"));
    }

    #[test]
    fn test_preview_line_wraps_payload() {
        let line = preview_line("abc");
        assert_eq!(line, "<preview>abc</preview>\n");
        assert!(is_preview_line(line.trim_end_matches('\n').as_bytes()));
    }

    proptest! {
        #[test]
        fn prop_wrapped_payload_always_matches(payload in "[A-Za-z0-9+/=]{0,64}") {
            let line = preview_line(&payload);
            prop_assert!(is_preview_line(line.trim_end_matches('\n').as_bytes()));
        }

        #[test]
        fn prop_plain_text_never_matches(line in "[A-Za-z0-9 ]{0,64}") {
            prop_assert!(!is_preview_line(line.as_bytes()));
        }
    }
}
