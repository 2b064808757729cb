use super::*;
use crate::types::{Glyph, GlyphId, Rect};

const W: i32 = 8;
const H: i32 = 10;

/// Glyphs for `text` starting at (x, y), one every 10px; spaces skip a slot
/// plus the inter-word gap.
fn stamp(glyphs: &mut Vec<Glyph>, text: &str, x: i32, y: i32) {
    let mut cx = x;
    for ch in text.chars() {
        if ch == ' ' {
            cx += 12;
            continue;
        }
        glyphs.push(Glyph {
            id: GlyphId(glyphs.len() as u32),
            ch,
            bounds: Rect::new(cx, y, W, H),
            score: 0.0,
        });
        cx += 10;
    }
}

fn text_of(chunk: &Chunk, glyphs: &[Glyph]) -> String {
    render_text(chunk, glyphs, &TextOptions::default())
}

fn cluster_all(glyphs: &[Glyph]) -> Vec<Chunk> {
    let opts = ClusterOptions::default();
    let mut chunks = Chunk::seed(glyphs);
    collect_words(&mut chunks, glyphs, &opts);
    collect_lines(&mut chunks, glyphs, &opts);
    collect_bubbles(&mut chunks, glyphs, &opts);
    chunks
}

#[test]
fn cat_dog_round_trip() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "CAT", 0, 0);
    stamp(&mut glyphs, "DOG", 40, 0);
    let opts = ClusterOptions::default();

    let mut chunks = Chunk::seed(&glyphs);
    let word_arrows = collect_words(&mut chunks, &glyphs, &opts);
    assert_eq!(word_arrows.len(), 4);
    assert_eq!(chunks.len(), 2);
    let words: Vec<String> = chunks.iter().map(|c| text_of(c, &glyphs)).collect();
    assert_eq!(words, vec!["CAT", "DOG"]);

    let line_arrows = collect_lines(&mut chunks, &glyphs, &opts);
    assert_eq!(
        line_arrows,
        vec![MergeArrow {
            from: GlyphId(2),
            to: GlyphId(3)
        }]
    );
    assert_eq!(chunks.len(), 1);
    assert_eq!(text_of(&chunks[0], &glyphs), "CAT DOG");
}

#[test]
fn merge_restart_catches_chained_joins() {
    // A and B are too far apart until C sits between them.
    let glyphs = vec![
        Glyph {
            id: GlyphId(0),
            ch: 'A',
            bounds: Rect::new(0, 0, W, H),
            score: 0.0,
        },
        Glyph {
            id: GlyphId(1),
            ch: 'B',
            bounds: Rect::new(20, 0, W, H),
            score: 0.0,
        },
        Glyph {
            id: GlyphId(2),
            ch: 'C',
            bounds: Rect::new(10, 0, W, H),
            score: 0.0,
        },
    ];
    let mut chunks = Chunk::seed(&glyphs);
    collect_words(&mut chunks, &glyphs, &ClusterOptions::default());
    assert_eq!(chunks.len(), 1);
    let slots: Vec<usize> = chunks[0].slots().collect();
    assert_eq!(slots, vec![0, 2, 1]);
    assert_eq!(text_of(&chunks[0], &glyphs), "ACB");
    assert_eq!(chunks[0].bounds(), Rect::new(0, 0, 28, H));
}

#[test]
fn right_to_left_seed_order_is_canonicalised() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "OK", 0, 0);
    glyphs.reverse();
    let mut chunks = Chunk::seed(&glyphs);
    collect_words(&mut chunks, &glyphs, &ClusterOptions::default());
    assert_eq!(chunks.len(), 1);
    assert_eq!(text_of(&chunks[0], &glyphs), "OK");
}

#[test]
fn vertical_offset_blocks_word_join() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "A", 0, 0);
    stamp(&mut glyphs, "B", 10, 4);
    let mut chunks = Chunk::seed(&glyphs);
    let arrows = collect_words(&mut chunks, &glyphs, &ClusterOptions::default());
    assert!(arrows.is_empty());
    assert_eq!(chunks.len(), 2);
}

#[test]
fn stacked_lines_form_one_bubble() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "HELLO", 0, 0);
    stamp(&mut glyphs, "THERE", 0, 12);
    stamp(&mut glyphs, "FAR AWAY", 0, 60);
    let chunks = cluster_all(&glyphs);
    let texts: Vec<String> = chunks.iter().map(|c| text_of(c, &glyphs)).collect();
    assert_eq!(texts, vec!["HELLO THERE", "FAR AWAY"]);
}

#[test]
fn lower_line_seeded_first_still_reads_top_down() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "BELOW", 0, 12);
    stamp(&mut glyphs, "ABOVE", 0, 0);
    let chunks = cluster_all(&glyphs);
    assert_eq!(chunks.len(), 1);
    assert_eq!(text_of(&chunks[0], &glyphs), "ABOVE BELOW");
}

#[test]
fn wrapped_scream_is_not_split() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "AAAAA", 0, 0);
    stamp(&mut glyphs, "AAAH", 0, 12);
    stamp(&mut glyphs, "NO AAAA", 0, 40);
    stamp(&mut glyphs, "AAAA", 0, 52);
    let chunks = cluster_all(&glyphs);
    let texts: Vec<String> = chunks.iter().map(|c| text_of(c, &glyphs)).collect();
    // Different letter sets keep the space; identical ones drop it.
    assert_eq!(texts, vec!["AAAAA AAAH", "NO AAAAAAAA"]);
}

#[test]
fn wrapped_scream_joins_multi_word_lower_line() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "AAAA", 0, 0);
    stamp(&mut glyphs, "AAH NO", 0, 12);
    let chunks = cluster_all(&glyphs);
    let texts: Vec<String> = chunks.iter().map(|c| text_of(c, &glyphs)).collect();
    assert_eq!(texts, vec!["AAAAAAH NO"]);
}

#[test]
fn leading_word_stops_before_boundary_glyph() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "AAH NO", 0, 0);
    let chunks = cluster_all(&glyphs);
    assert_eq!(chunks.len(), 1);
    let lead: String = chunks[0].leading_word(&glyphs).collect();
    let trail: String = chunks[0].trailing_word(&glyphs).collect();
    assert_eq!(lead, "AA");
    assert_eq!(trail, "NO");
}

#[test]
fn long_letter_sets_always_break() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "ABCDEFG", 0, 0);
    stamp(&mut glyphs, "GFEDCBA", 0, 12);
    let chunks = cluster_all(&glyphs);
    assert_eq!(chunks.len(), 1);
    assert_eq!(text_of(&chunks[0], &glyphs), "ABCDEFG GFEDCBA");
}

#[test]
fn side_by_side_lines_do_not_stack() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "LEFT", 0, 0);
    stamp(&mut glyphs, "RIGHT", 200, 12);
    let chunks = cluster_all(&glyphs);
    assert_eq!(chunks.len(), 2);
}

#[test]
fn interval_overlap_is_strict() {
    assert!(intervals_overlap(0, 10, 5, 15));
    assert!(intervals_overlap(5, 15, 0, 10));
    assert!(!intervals_overlap(0, 10, 10, 20));
    assert!(!intervals_overlap(10, 20, 0, 10));
    assert!(intervals_overlap(0, 100, 10, 20));
}

#[test]
fn garbage_filter_drops_short_punctuation_lines() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "-,", 0, 0);
    stamp(&mut glyphs, "hi", 0, 100);
    stamp(&mut glyphs, "...!", 0, 200);
    let opts = ClusterOptions::default();
    let mut chunks = Chunk::seed(&glyphs);
    collect_words(&mut chunks, &glyphs, &opts);
    collect_lines(&mut chunks, &glyphs, &opts);
    assert_eq!(chunks.len(), 3);

    let (kept, dropped) = GarbageFilter::default().filter(chunks, &glyphs);
    let kept: Vec<String> = kept.iter().map(|c| text_of(c, &glyphs)).collect();
    let dropped: Vec<String> = dropped.iter().map(|c| text_of(c, &glyphs)).collect();
    // Four glyphs is over the suspicious length even if all are punctuation.
    assert_eq!(kept, vec!["hi", "...!"]);
    assert_eq!(dropped, vec!["-,"]);
}

#[test]
fn dots_are_normalised() {
    assert_eq!(normalize_dots(",.,.,"), ".....");
    assert_eq!(normalize_dots("WAIT,. WHAT"), "WAIT.. WHAT");
    assert_eq!(normalize_dots("OH, NO."), "OH, NO.");
}

#[test]
fn raw_text_keeps_commas_when_disabled() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "A,.", 0, 0);
    let mut chunks = Chunk::seed(&glyphs);
    collect_words(&mut chunks, &glyphs, &ClusterOptions::default());
    let raw = render_text(
        &chunks[0],
        &glyphs,
        &TextOptions {
            normalize_dots: false,
        },
    );
    assert_eq!(raw, "A,.");
    assert_eq!(text_of(&chunks[0], &glyphs), "A..");
}

#[test]
fn closure_rules_drive_the_engine() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "XYZ", 0, 0);
    let mut chunks = Chunk::seed(&glyphs);
    let never = |_: &[Glyph], _: &Chunk, _: &Chunk| -> Option<Join> { None };
    assert!(collect(&mut chunks, &glyphs, &never).is_empty());
    assert_eq!(chunks.len(), 3);

    let always = |_: &[Glyph], _: &Chunk, _: &Chunk| -> Option<Join> {
        Some(Join {
            order: Order::Given,
            boundary: true,
        })
    };
    let arrows = collect(&mut chunks, &glyphs, &always);
    assert_eq!(arrows.len(), 2);
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].is_consistent(&glyphs));
    assert_eq!(text_of(&chunks[0], &glyphs), "X Y Z");
}

/// Deterministic scatter of short words over a page.
fn scattered_page() -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    let mut state = 0x2545_f491u32;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    for _ in 0..25 {
        let x = (next() % 400) as i32;
        let y = (next() % 300) as i32;
        let len = 1 + (next() % 6) as usize;
        let word: String = (0..len)
            .map(|_| (b'A' + (next() % 26) as u8) as char)
            .collect();
        stamp(&mut glyphs, &word, x, y);
    }
    glyphs
}

#[test]
fn clustering_preserves_structural_invariants() {
    let glyphs = scattered_page();
    let opts = ClusterOptions::default();
    let mut chunks = Chunk::seed(&glyphs);

    for stage in 0..3 {
        match stage {
            0 => collect_words(&mut chunks, &glyphs, &opts),
            1 => collect_lines(&mut chunks, &glyphs, &opts),
            _ => collect_bubbles(&mut chunks, &glyphs, &opts),
        };
        assert!(chunks.iter().all(|c| c.is_consistent(&glyphs)));

        // Every glyph sits in exactly one chunk.
        let mut seen = vec![0usize; glyphs.len()];
        for c in &chunks {
            for s in c.slots() {
                seen[s] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!(chunks.iter().map(Chunk::len).sum::<usize>(), glyphs.len());
    }
}

#[test]
fn collect_is_idempotent_at_fixed_point() {
    let glyphs = scattered_page();
    let opts = ClusterOptions::default();
    let mut chunks = Chunk::seed(&glyphs);
    collect_words(&mut chunks, &glyphs, &opts);
    let snapshot = chunks.clone();
    assert!(collect_words(&mut chunks, &glyphs, &opts).is_empty());
    assert_eq!(chunks, snapshot);

    collect_lines(&mut chunks, &glyphs, &opts);
    collect_bubbles(&mut chunks, &glyphs, &opts);
    let snapshot = chunks.clone();
    assert!(collect_bubbles(&mut chunks, &glyphs, &opts).is_empty());
    assert_eq!(chunks, snapshot);
}

#[test]
fn chain_length_counts_absorbed_glyphs() {
    let mut glyphs = Vec::new();
    stamp(&mut glyphs, "ONE TWO", 0, 0);
    let opts = ClusterOptions::default();
    let mut chunks = Chunk::seed(&glyphs);
    let word_arrows = collect_words(&mut chunks, &glyphs, &opts);
    let line_arrows = collect_lines(&mut chunks, &glyphs, &opts);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 1 + word_arrows.len() + line_arrows.len());
    let flags: Vec<bool> = chunks[0].members().iter().map(|m| m.space_after).collect();
    assert_eq!(flags, vec![false, false, true, false, false, false]);
}
