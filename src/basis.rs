use image::{Rgba, RgbaImage};

/// `Canvas` はアイコンを描画する RGBA のピクセルバッファを表す.
pub type Canvas = RgbaImage;

/// `BACKGROUND` はアイコンの背景色 (不透明な青) を表す.
pub const BACKGROUND: Rgba<u8> = Rgba([33, 150, 243, 255]);

/// `FOREGROUND` は格子線と数字の色 (不透明な白) を表す.
pub const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// `Axis` は格子線の向きを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// 背景色で塗りつぶした `size` x `size` の `Canvas` を作る.
pub(crate) fn blank_canvas(size: u32) -> Canvas {
    RgbaImage::from_pixel(size, size, BACKGROUND)
}

/// `canvas` の `(x, y)` に `color` を置く. 範囲外なら何もしない.
pub(crate) fn put_pixel_clipped(canvas: &mut Canvas, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}

#[test]
fn test_blank_canvas() {
    let canvas = blank_canvas(7);
    assert_eq!(canvas.dimensions(), (7, 7));
    assert!(canvas.pixels().all(|p| *p == BACKGROUND));
}

#[test]
fn test_put_pixel_clipped() {
    let mut canvas = blank_canvas(4);
    put_pixel_clipped(&mut canvas, -1, 0, FOREGROUND);
    put_pixel_clipped(&mut canvas, 0, 4, FOREGROUND);
    put_pixel_clipped(&mut canvas, 4, 4, FOREGROUND);
    assert!(canvas.pixels().all(|p| *p == BACKGROUND));

    put_pixel_clipped(&mut canvas, 3, 1, FOREGROUND);
    assert_eq!(*canvas.get_pixel(3, 1), FOREGROUND);
}
