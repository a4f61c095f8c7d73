use std::{fs::read_dir, path::Path};

use ab_glyph::{Font, FontArc};
use placer::ShapeKind;

/// Fonts able to render every category label.
pub struct FontCache {
    fonts: Vec<FontArc>,
}

impl FontCache {
    pub fn load(font_dir: &Path) -> Self {
        let mut paths: Vec<_> = read_dir(font_dir)
            .ok()
            .into_iter()
            .flat_map(|rd| rd.filter_map(|e| e.ok()))
            .map(|e| e.path())
            .filter(|p| {
                matches!(
                    p.extension().and_then(|s| s.to_str()),
                    Some("ttf") | Some("otf")
                )
            })
            .collect();
        // deterministic pick across platforms
        paths.sort();

        let fonts = paths
            .into_iter()
            .filter_map(|path| {
                std::fs::read(&path)
                    .ok()
                    .and_then(|bytes| FontArc::try_from_vec(bytes).ok())
                    .filter(covers_labels)
            })
            .collect();
        FontCache { fonts }
    }

    pub fn first(&self) -> Option<&FontArc> {
        self.fonts.first()
    }
}

fn covers_labels(font: &FontArc) -> bool {
    ShapeKind::ALL
        .iter()
        .flat_map(|k| k.name().chars())
        .all(|ch| font.glyph_id(ch).0 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_junk_fonts_are_skipped() {
        assert!(FontCache::load(Path::new("/definitely/not/here")).first().is_none());

        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("broken.ttf"), b"not a font").unwrap();
        std::fs::write(tmp.path().join("readme.txt"), b"ignored").unwrap();
        assert!(FontCache::load(tmp.path()).first().is_none());
    }
}
