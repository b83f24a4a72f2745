/// `DigitPlacement` は格子の `(row, col)` のマスに描く数字を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPlacement {
    pub row: u32,
    pub col: u32,
    pub label: &'static str,
}

const fn at(cell: u32, label: &'static str) -> DigitPlacement {
    DigitPlacement {
        row: cell,
        col: cell,
        label,
    }
}

/// 対角線上に並べる見本の数字. 描画はこの順に行う.
pub const PLACEMENTS: [DigitPlacement; 6] = [
    at(0, "1"),
    at(1, "4"),
    at(2, "2"),
    at(3, "6"),
    at(4, "3"),
    at(5, "5"),
];

#[test]
fn test_placements_on_diagonal() {
    assert!(PLACEMENTS.iter().all(|p| p.row == p.col));
    assert_eq!(
        PLACEMENTS.iter().map(|p| p.row).collect::<Vec<_>>(),
        (0..6).collect::<Vec<_>>()
    );
    assert_eq!(
        PLACEMENTS.iter().map(|p| p.label).collect::<String>(),
        "142635"
    );
}
