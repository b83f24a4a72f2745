use {
    crate::{
        basis::{blank_canvas, Axis, Canvas, FOREGROUND},
        bitmap_font,
        digits::{DigitPlacement, PLACEMENTS},
        font::{self, font_scale},
        grid::{GridLine, GridSpec},
    },
    ab_glyph::FontArc,
    image::imageops,
    imageproc::{
        drawing::{draw_filled_rect_mut, draw_text_mut, text_size},
        rect::Rect,
    },
};

/// フォントがないとき, マスの中心から数字の左上までのずれ.
const FALLBACK_SHIFT: (i32, i32) = (5, 8);

/// `size` x `size` のアイコンを描く.
///
/// 既定のフォントを探して使い, 見つからなければ組み込みのビットマップ数字で描く. 失敗はしない.
pub fn render(size: u32) -> Canvas {
    render_with_font(size, font::load_or_fallback().as_ref())
}

/// `font` を使って `size` x `size` のアイコンを描く. `None` ならビットマップ数字で描く.
pub fn render_with_font(size: u32, font: Option<&FontArc>) -> Canvas {
    let mut canvas = blank_canvas(size);
    if size == 0 {
        return canvas;
    }

    let spec = GridSpec::new(size);
    log::debug!("rendering {0}x{0} icon with {1:?}", size, spec);

    for line in spec.lines() {
        draw_grid_line(&mut canvas, &spec, line);
    }

    if font.is_none() {
        log::debug!("no font available, using bitmap digits");
    }

    // 数字は格子の範囲 [offset, offset + grid_size] の内側だけに描く
    let (start, end) = spec.span();
    let side = (end - start + 1).min(size - start);
    let mut grid = imageops::crop_imm(&canvas, start, start, side, side).to_image();

    for placement in &PLACEMENTS {
        draw_digit(&mut grid, &spec, size, placement, font);
    }

    imageops::replace(&mut canvas, &grid, start as i64, start as i64);
    canvas
}

fn draw_grid_line(canvas: &mut Canvas, spec: &GridSpec, line: GridLine) {
    let (start, end) = spec.span();
    let (lo, hi) = line.cross_range();
    let along = end - start + 1;
    let across = (hi - lo + 1) as u32;

    let rect = match line.axis {
        Axis::Vertical => Rect::at(lo, start as i32).of_size(across, along),
        Axis::Horizontal => Rect::at(start as i32, lo).of_size(along, across),
    };

    draw_filled_rect_mut(canvas, rect, FOREGROUND);
}

/// `grid` は格子の範囲を切り出したもので, 座標は `spec.offset` だけずれる.
fn draw_digit(
    grid: &mut Canvas,
    spec: &GridSpec,
    size: u32,
    placement: &DigitPlacement,
    font: Option<&FontArc>,
) {
    let (x, y) = spec.cell_center(placement.row, placement.col);
    let (x, y) = ((x - spec.offset) as i32, (y - spec.offset) as i32);

    match font {
        Some(font) => {
            let scale = font_scale(size);
            let (w, h) = text_size(scale, font, placement.label);
            draw_text_mut(
                grid,
                FOREGROUND,
                x - (w / 2) as i32,
                y - (h / 2) as i32,
                scale,
                font,
                placement.label,
            );
        }
        None => {
            let (dx, dy) = FALLBACK_SHIFT;
            bitmap_font::draw_text(grid, FOREGROUND, x - dx, y - dy, placement.label);
        }
    }
}
