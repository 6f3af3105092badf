use termcell::text::{display_width, truncate};
use termcell::{Buffer, Pen, Rect, Rgb};

const FG: Rgb = Rgb::new(10, 20, 30);
const BG: Rgb = Rgb::new(200, 200, 200);

// ============================================================================
// Text Tests
// ============================================================================

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate("Tom Cook", 10), "Tom Cook");
    assert_eq!(truncate("Tom Cook", 8), "Tom Cook");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate("Caroline Schultz", 8), "Carolin…");
    assert_eq!(display_width(&truncate("Caroline Schultz", 8)), 8);
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate("Wade", 0), "");
}

#[test]
fn test_truncate_wide_chars() {
    // Each CJK char is two columns wide
    let out = truncate("日本語テキスト", 5);
    assert!(display_width(&out) <= 5);
    assert!(out.ends_with('…'));
}

// ============================================================================
// Buffer Tests
// ============================================================================

#[test]
fn test_put_str_writes_cells() {
    let mut buf = Buffer::new(10, 1);
    let written = buf.put_str(2, 0, "Hi", Pen::new(FG, BG).bold(), 10);

    assert_eq!(written, 2);
    assert_eq!(buf.row_text(0), "  Hi      ");
    let cell = buf.get(2, 0).unwrap();
    assert_eq!(cell.fg, FG);
    assert_eq!(cell.bg, BG);
    assert!(cell.bold);
}

#[test]
fn test_put_str_clips_at_max_x() {
    let mut buf = Buffer::new(10, 1);
    let written = buf.put_str(0, 0, "Hellen Schmidt", Pen::new(FG, BG), 6);

    assert_eq!(written, 6);
    assert_eq!(buf.row_text(0), "Hellen    ");
}

#[test]
fn test_put_str_wide_char_marks_continuation() {
    let mut buf = Buffer::new(4, 1);
    buf.put_str(0, 0, "日", Pen::new(FG, BG), 4);

    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.row_text(0), "日  ");
}

#[test]
fn test_out_of_bounds_access_is_ignored() {
    let mut buf = Buffer::new(2, 2);
    assert!(buf.get(5, 5).is_none());
    buf.put_str(5, 5, "x", Pen::new(FG, BG), 10);
    buf.fill(Rect::new(1, 1, 10, 10), BG);
    assert_eq!(buf.get(1, 1).unwrap().bg, BG);
}

#[test]
fn test_draw_box_corners() {
    let mut buf = Buffer::new(5, 3);
    buf.draw_box(Rect::new(0, 0, 5, 3), FG, BG);

    assert_eq!(buf.row_text(0), "╭───╮");
    assert_eq!(buf.row_text(1), "│   │");
    assert_eq!(buf.row_text(2), "╰───╯");
    assert_eq!(buf.get(2, 1).unwrap().bg, BG);
}

#[test]
fn test_dim_darkens_colors() {
    let mut buf = Buffer::new(1, 1);
    buf.clear(Rgb::new(200, 100, 50));
    buf.dim(0.5);

    let bg = buf.get(0, 0).unwrap().bg;
    assert_eq!(bg, Rgb::new(100, 50, 25));
}

#[test]
fn test_fade_over_restores_at_zero_opacity() {
    let mut buf = Buffer::new(3, 1);
    buf.put_str(0, 0, "abc", Pen::new(FG, BG), 3);
    let area = Rect::new(0, 0, 3, 1);
    let under = buf.snapshot(area);

    buf.put_str(0, 0, "xyz", Pen::new(Rgb::WHITE, Rgb::BLACK), 3);
    buf.fade_over(area, &under, 0.0);

    assert_eq!(buf.row_text(0), "abc");
}

#[test]
fn test_fade_over_full_opacity_is_noop() {
    let mut buf = Buffer::new(3, 1);
    let area = Rect::new(0, 0, 3, 1);
    let under = buf.snapshot(area);

    buf.put_str(0, 0, "xyz", Pen::new(FG, BG), 3);
    buf.fade_over(area, &under, 1.0);

    assert_eq!(buf.row_text(0), "xyz");
    assert_eq!(buf.get(0, 0).unwrap().bg, BG);
}

#[test]
fn test_fade_over_blends_toward_background() {
    let mut buf = Buffer::new(1, 1);
    buf.clear(Rgb::BLACK);
    let area = Rect::new(0, 0, 1, 1);
    let under = buf.snapshot(area);

    buf.fill(area, Rgb::new(200, 200, 200));
    buf.fade_over(area, &under, 0.5);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(100, 100, 100));
}

#[test]
fn test_diff_reports_changed_cells() {
    let a = Buffer::new(3, 2);
    let mut b = Buffer::new(3, 2);
    b.put_str(1, 1, "x", Pen::new(FG, BG), 3);

    let changes: Vec<_> = b.diff(&a).map(|(x, y, _)| (x, y)).collect();
    assert_eq!(changes, vec![(1, 1)]);
}

// ============================================================================
// Rect Tests
// ============================================================================

#[test]
fn test_rect_contains_is_exclusive_at_edges() {
    let r = Rect::new(2, 2, 3, 2);
    assert!(r.contains(2, 2));
    assert!(r.contains(4, 3));
    assert!(!r.contains(5, 3));
    assert!(!r.contains(4, 4));
}

#[test]
fn test_rect_centered_and_inner() {
    let outer = Rect::new(0, 0, 20, 10);
    assert_eq!(outer.centered(10, 4), Rect::new(5, 3, 10, 4));
    assert_eq!(outer.centered(30, 30), outer);
    assert_eq!(Rect::new(1, 1, 5, 3).inner(), Rect::new(2, 2, 3, 1));
}

#[test]
fn test_rect_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 8, 10, 10);
    assert_eq!(a.intersect(b), Rect::new(5, 8, 5, 2));
    assert!(Rect::new(20, 20, 2, 2).intersect(a).is_empty());
}

// ============================================================================
// Color Tests
// ============================================================================

#[test]
fn test_rgb_hex() {
    assert_eq!(Rgb::hex(0x4f46e5), Rgb::new(0x4f, 0x46, 0xe5));
}

#[test]
fn test_rgb_lerp_endpoints() {
    let a = Rgb::new(0, 0, 0);
    let b = Rgb::new(255, 100, 10);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 2.0), b);
}

#[test]
fn test_oklch_white_and_black() {
    let white = Rgb::oklch(1.0, 0.0, 0.0);
    assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    let black = Rgb::oklch(0.0, 0.0, 0.0);
    assert!(black.r <= 1 && black.g <= 1 && black.b <= 1);
}
