use super::chunk::Chunk;
use super::options::TextOptions;
use crate::types::Glyph;

/// Concatenate the chunk's characters, with a single space after every
/// glyph flagged as a word boundary.
pub fn render_text(chunk: &Chunk, glyphs: &[Glyph], opts: &TextOptions) -> String {
    let mut out = String::with_capacity(chunk.len() * 2);
    for m in chunk.members() {
        out.push(glyphs[m.slot].ch);
        if m.space_after {
            out.push(' ');
        }
    }
    if opts.normalize_dots {
        out = normalize_dots(&out);
    }
    out
}

/// Rewrite `,.` and `.,` as `..` until the text stops changing.
pub fn normalize_dots(text: &str) -> String {
    let mut cur = text.to_string();
    loop {
        let next = cur.replace(",.", "..").replace(".,", "..");
        if next == cur {
            return cur;
        }
        cur = next;
    }
}
