use crate::basis::Axis;

/// 格子のマス数 (縦横とも).
pub const CELLS: u32 = 6;

/// 格子が占めるアイコン一辺に対する割合.
const GRID_RATIO: f64 = 0.7;

const THICK: u32 = 3;
const THIN: u32 = 1;

/// `GridSpec` は `size` のアイコンにおける 6x6 格子の配置を表す.
///
/// 値はすべて整数に切り捨てる. `grid_size` は `cell_size * 6` と一致するとは限らない.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub grid_size: u32,
    pub offset: u32,
    pub cell_size: u32,
}

impl GridSpec {
    pub fn new(size: u32) -> Self {
        let grid_size = (f64::from(size) * GRID_RATIO) as u32;
        let offset = (size - grid_size) / 2;
        let cell_size = grid_size / CELLS;

        Self {
            grid_size,
            offset,
            cell_size,
        }
    }

    /// 格子線の始点と終点の座標. 両端を含む.
    pub fn span(&self) -> (u32, u32) {
        (self.offset, self.offset + self.grid_size)
    }

    /// `(row, col)` のマスの中心を `(x, y)` で返す.
    pub fn cell_center(&self, row: u32, col: u32) -> (u32, u32) {
        let half = self.cell_size / 2;
        (
            self.offset + col * self.cell_size + half,
            self.offset + row * self.cell_size + half,
        )
    }

    /// 縦線 7 本, 横線 7 本をこの順に列挙する.
    pub fn lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        [Axis::Vertical, Axis::Horizontal]
            .into_iter()
            .flat_map(move |axis| (0..=CELLS).map(move |index| self.line(axis, index)))
    }

    fn line(&self, axis: Axis, index: u32) -> GridLine {
        GridLine {
            axis,
            position: self.offset + index * self.cell_size,
            width: stroke_width(axis, index),
        }
    }
}

/// `GridLine` は格子線 1 本を表す. `position` は線の中心の座標.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLine {
    pub axis: Axis,
    pub position: u32,
    pub width: u32,
}

impl GridLine {
    /// 線が覆う (線に直交する方向の) 座標の範囲. 両端を含み, 負になりうる.
    pub fn cross_range(&self) -> (i32, i32) {
        let half = (self.width / 2) as i32;
        let center = self.position as i32;
        (center - half, center + half)
    }
}

/// 縦線は 3 列ごと, 横線は 2 行ごとにブロック境界として太くする.
///
/// 6x6 の盤面のブロックは 2 行 x 3 列.
fn stroke_width(axis: Axis, index: u32) -> u32 {
    let block = match axis {
        Axis::Vertical => 3,
        Axis::Horizontal => 2,
    };
    if index % block == 0 {
        THICK
    } else {
        THIN
    }
}
