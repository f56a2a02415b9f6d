/// Separator between the affiliation indices of one author
pub const JOIN_SEPARATOR: char = ',';

/// Private stand-in for the join separator inside encoded markers
pub const SENTINEL: char = '+';

/// Inline markup for a comma lifted to superscript height
pub const RAISED_COMMA: &str = r#"<span style="position: relative; top: -0.5em;">,</span>"#;

/// Map an ASCII digit to its superscript glyph; every other character passes through
pub fn superscript_char(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        other => other,
    }
}

/// Encode affiliation indices as a superscript marker with sentinel separators.
///
/// Indices are joined with [`JOIN_SEPARATOR`], every separator is swapped for
/// [`SENTINEL`] and digits become superscript glyphs. Each rendering then resolves
/// the sentinel: [`to_display`] raises it, [`to_plain`] lowers it to a literal comma.
/// Superscript digits are never converted back to ASCII. An empty slice encodes
/// to an empty marker.
pub fn encode_marker(indices: &[usize]) -> String {
    let joined = indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(&JOIN_SEPARATOR.to_string());

    joined
        .chars()
        .map(|c| if c == JOIN_SEPARATOR { SENTINEL } else { c })
        .map(superscript_char)
        .collect()
}

/// Resolve sentinels for on-screen rendering (raised comma)
pub fn to_display(encoded: &str) -> String {
    encoded.replace(SENTINEL, RAISED_COMMA)
}

/// Resolve sentinels for the downloadable text (literal comma)
pub fn to_plain(encoded: &str) -> String {
    encoded.replace(SENTINEL, &JOIN_SEPARATOR.to_string())
}
