//! Markup removal for feed descriptions.
//!
//! This is a character scanner, not an HTML parser: anything between `<` and
//! the next `>` is dropped. An unterminated `<` swallows the rest of the
//! input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside,
}

/// Strip tags, collapse whitespace runs to one space and trim the ends.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = ScanState::Outside;

    for ch in input.chars() {
        state = match (state, ch) {
            (_, '<') => ScanState::Inside,
            (_, '>') => ScanState::Outside,
            (ScanState::Outside, _) => {
                out.push(ch);
                ScanState::Outside
            }
            (ScanState::Inside, _) => ScanState::Inside,
        };
    }

    collapse_whitespace(&out)
}

/// Absent input is treated as empty.
pub fn strip_tags_opt(input: Option<&str>) -> String {
    input.map(strip_tags).unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
