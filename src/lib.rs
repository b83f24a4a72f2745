//! 6x6 の数独の盤面を描いたアプリアイコンを生成する.

pub mod basis;
pub mod bitmap_font;
pub mod digits;
pub mod font;
pub mod grid;
pub mod icon_set;
pub mod render;

pub use crate::{
    basis::Canvas,
    icon_set::{IconSet, COMPLETION_MESSAGE},
    render::{render, render_with_font},
};
