use crate::render::glyphs::{GLYPH_HEIGHT, glyph};

/// Seconds as `MM:SS`; minutes grow past two digits for long timers
pub(crate) fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Display width in terminal columns. Glyph cells are multi-byte, so byte
/// length is useless here.
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Render `text` as five rows of block glyphs, characters separated by one space
pub(crate) fn build_banner(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Left padding that centers `content_width` columns in `term_width`
pub(crate) fn center_offset(term_width: u16, content_width: usize) -> usize {
    (term_width as usize).saturating_sub(content_width) / 2
}

/// Center a block of lines: blank lines on top, each line left-padded by the
/// block's widest line
pub(crate) fn center_block(lines: &[String], term_width: u16, term_height: u16) -> Vec<String> {
    let block_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let left = center_offset(term_width, block_width);
    let top = (term_height as usize).saturating_sub(lines.len()) / 2;

    let mut out = vec![String::new(); top];
    out.extend(lines.iter().map(|l| format!("{}{l}", " ".repeat(left))));
    out
}

/// Center a single line horizontally
pub(crate) fn center_line(text: &str, term_width: u16) -> String {
    format!(
        "{}{text}",
        " ".repeat(center_offset(term_width, display_width(text)))
    )
}
