use {
    ab_glyph::{FontArc, FontVec, InvalidFont, PxScale},
    fontdb::{Database, Family, Query},
    thiserror::Error,
};

/// 既定のフォントとして探すファミリー. 先頭ほど優先する.
///
/// `Family::SansSerif` は fontdb の既定では "Arial" に解決されるので, よくあるファミリー名も並べておく.
const DEFAULT_FAMILIES: &[Family] = &[
    Family::SansSerif,
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
    Family::Name("Noto Sans"),
    Family::Name("Helvetica"),
];

/// `FontError` は見つかったフォントが使えなかったことを表す.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font data of {name}")]
    Read { name: String },

    #[error("{name} is not a valid font")]
    Parse {
        name: String,
        #[source]
        source: InvalidFont,
    },
}

/// システムのフォントから既定のフォントを読み込む. 見つからなければ `Ok(None)`.
pub fn load_default_font() -> Result<Option<FontArc>, FontError> {
    let mut db = Database::new();
    db.load_system_fonts();
    log::debug!("{} system font faces found", db.len());

    load_from(&db)
}

/// `db` から既定のファミリーに当たる最初のフェイスを読み込む.
///
/// 見つかったフェイスが読めない, あるいはフォントとして解釈できない場合は別のフェイスを探さずにエラーを返す.
pub fn load_from(db: &Database) -> Result<Option<FontArc>, FontError> {
    let query = Query {
        families: DEFAULT_FAMILIES,
        ..Query::default()
    };

    let id = match db.query(&query) {
        Some(id) => id,
        None => return Ok(None),
    };

    let name = db
        .face(id)
        .map(|face| face.post_script_name.clone())
        .unwrap_or_default();

    let font = db
        .with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))
        .ok_or_else(|| FontError::Read { name: name.clone() })?
        .map_err(|source| FontError::Parse {
            name: name.clone(),
            source,
        })?;

    log::debug!("loaded font {}", name);
    Ok(Some(FontArc::new(font)))
}

/// 既定のフォントを読み込み, 使えなければ理由をログに残して `None` を返す.
pub fn load_or_fallback() -> Option<FontArc> {
    or_fallback(load_default_font())
}

/// `db` から読み込み, 使えなければ理由をログに残して `None` を返す.
pub fn load_or_fallback_from(db: &Database) -> Option<FontArc> {
    or_fallback(load_from(db))
}

fn or_fallback(loaded: Result<Option<FontArc>, FontError>) -> Option<FontArc> {
    match loaded {
        Ok(Some(font)) => Some(font),
        Ok(None) => {
            log::debug!("no default font found");
            None
        }
        Err(e) => {
            log::warn!("falling back to bitmap digits: {}", e);
            None
        }
    }
}

/// `size` のアイコンに描く数字の大きさ.
pub fn font_scale(size: u32) -> PxScale {
    PxScale::from((size / 20).max(12) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        basis::{BACKGROUND, FOREGROUND},
        render::render_with_font,
    };
    use fontdb::Source;
    use std::path::PathBuf;

    /// システムにある既定のフォントのファイルパス. 無ければ `None`.
    fn system_font_file() -> Option<PathBuf> {
        let mut db = Database::new();
        db.load_system_fonts();
        let id = db.query(&Query {
            families: DEFAULT_FAMILIES,
            ..Query::default()
        })?;
        match &db.face(id)?.source {
            Source::File(path) => Some(path.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_empty_database() {
        let db = Database::new();
        assert!(load_from(&db).unwrap().is_none());
        assert!(load_or_fallback_from(&db).is_none());
    }

    #[test]
    fn test_garbage_is_not_loaded() {
        let mut db = Database::new();
        db.load_font_data(b"definitely not a font".to_vec());
        assert!(load_from(&db).unwrap().is_none());
    }

    #[test]
    fn test_load_copied_font() {
        let path = match system_font_file() {
            Some(path) => path,
            // no usable font on this machine
            None => return,
        };

        let dir = tempfile::tempdir().unwrap();
        let copy = dir.path().join("copy.ttf");
        std::fs::copy(&path, &copy).unwrap();

        let mut db = Database::new();
        db.load_font_file(&copy).unwrap();
        assert!(load_from(&db).unwrap().is_some());
    }

    #[test]
    fn test_broken_font_renders_with_bitmap_digits() {
        let path = match system_font_file() {
            Some(path) => path,
            None => return,
        };

        let dir = tempfile::tempdir().unwrap();
        let copy = dir.path().join("broken.ttf");
        std::fs::copy(&path, &copy).unwrap();

        let mut db = Database::new();
        db.load_font_file(&copy).unwrap();

        // 登録後に中身を壊すと, 読み込み時に解釈できない
        std::fs::write(&copy, b"definitely not a font").unwrap();
        assert!(matches!(load_from(&db), Err(FontError::Parse { .. })));

        let font = load_or_fallback_from(&db);
        assert!(font.is_none());

        let canvas = render_with_font(192, font.as_ref());
        assert_eq!(canvas.dimensions(), (192, 192));
        assert_eq!(*canvas.get_pixel(0, 0), BACKGROUND);
        // マス (0, 0) の "1" の左上のドット
        assert_eq!(*canvas.get_pixel(39, 32), FOREGROUND);
    }

    #[test]
    fn test_error_falls_back_to_bitmap_digits() {
        let broken = Err(FontError::Parse {
            name: "Broken".to_string(),
            source: InvalidFont,
        });
        let font = or_fallback(broken);
        assert!(font.is_none());

        let canvas = render_with_font(192, font.as_ref());
        assert!(canvas == render_with_font(192, None));
        assert_eq!(*canvas.get_pixel(39, 32), FOREGROUND);

        let unreadable = FontError::Read {
            name: "Gone".to_string(),
        };
        assert!(unreadable.to_string().contains("Gone"));
        assert!(or_fallback(Err(unreadable)).is_none());
    }

    #[test]
    fn test_font_scale() {
        assert_eq!(font_scale(192).y, 12.0);
        assert_eq!(font_scale(512).y, 25.0);
        assert_eq!(font_scale(1).y, 12.0);
    }
}
