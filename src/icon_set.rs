use {
    crate::{font, render::render_with_font},
    anyhow::{Context as _, Result},
    easy_parallel::Parallel,
    std::path::{Path, PathBuf},
};

/// 書き出すアイコンの一辺のピクセル数.
pub const DEFAULT_SIZES: [u32; 2] = [192, 512];

/// すべてのアイコンを書き出したあとに表示するメッセージ.
pub const COMPLETION_MESSAGE: &str = "Icons erfolgreich erstellt!";

/// `IconSet` は書き出すアイコンの大きさの組を表す.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub sizes: Vec<u32>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl IconSet {
    /// 一辺 `size` のアイコンのファイル名.
    pub fn file_name(size: u32) -> String {
        format!("icon-{0}x{0}.png", size)
    }

    /// すべての大きさのアイコンを並列に描いて `dir` に PNG として書き出す.
    ///
    /// 戻り値は `sizes` と同じ順のファイルパス. 1 つでも書き出しに失敗すればエラーを返す.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let font = font::load_or_fallback();
        let font = font.as_ref();

        Parallel::new()
            .each(self.sizes.iter().copied(), |size| -> Result<PathBuf> {
                let path = dir.join(Self::file_name(size));
                render_with_font(size, font)
                    .save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                log::info!("wrote {}", path.display());
                Ok(path)
            })
            .run()
            .into_iter()
            .collect()
    }
}
