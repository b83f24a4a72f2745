//! フォントが読み込めなかったときに使う組み込みのビットマップ数字.

use {
    crate::basis::{put_pixel_clipped, Canvas},
    image::Rgba,
};

/// 0 から 9 までのグリフを横に並べた 5x7 のビットマップ. `#` が点灯.
const BITMAP: &str = include_str!("bitmap_font/digits.ascii");

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;

/// グリフ 1 ドットを描くピクセル数 (縦横).
pub(crate) const SCALE: u32 = 2;

/// 1 文字ごとのペンの移動量. グリフの間に 1 ドット空ける.
pub(crate) const ADVANCE: u32 = (GLYPH_WIDTH + 1) * SCALE;

type Glyph = [[bool; GLYPH_WIDTH as usize]; GLYPH_HEIGHT as usize];

/// `c` のグリフを返す. 数字以外は `None`.
pub(crate) fn glyph(c: char) -> Option<Glyph> {
    let digit = c.to_digit(10)? as usize;
    let is_dot = |c: &char| *c == '.' || *c == '#';

    let mut glyph = [[false; GLYPH_WIDTH as usize]; GLYPH_HEIGHT as usize];
    let rows = BITMAP
        .lines()
        .filter(|line| line.chars().any(|c| is_dot(&c)))
        .take(GLYPH_HEIGHT as usize);

    for (y, line) in rows.enumerate() {
        let row = line
            .chars()
            .filter(is_dot)
            .skip(digit * GLYPH_WIDTH as usize)
            .take(GLYPH_WIDTH as usize);
        for (x, c) in row.enumerate() {
            glyph[y][x] = c == '#';
        }
    }

    Some(glyph)
}

/// `text` を左上 `(x, y)` から描く. キャンバス外ははみ出した分を捨てる.
pub(crate) fn draw_text(canvas: &mut Canvas, color: Rgba<u8>, x: i32, y: i32, text: &str) {
    let mut pen_x = x;

    for c in text.chars() {
        if let Some(glyph) = glyph(c) {
            for (gy, row) in glyph.iter().enumerate() {
                for (gx, _) in row.iter().enumerate().filter(|&(_, &on)| on) {
                    let left = pen_x + (gx as u32 * SCALE) as i32;
                    let top = y + (gy as u32 * SCALE) as i32;
                    for dy in 0..SCALE as i32 {
                        for dx in 0..SCALE as i32 {
                            put_pixel_clipped(canvas, left + dx, top + dy, color);
                        }
                    }
                }
            }
        }
        pen_x += ADVANCE as i32;
    }
}
