use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::theme::Theme;

/// Environment variable naming a font file that overrides the family lookup.
pub const FONT_ENV: &str = "CODESHOT_FONT";

/// Raw bytes of one font face plus its family name.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    /// Font file contents (possibly a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index within `bytes`.
    pub index: u32,
    /// Family name reported by the face.
    pub family: String,
}

impl LoadedFont {
    /// Load the first face of a font file.
    pub fn from_file(path: &Path) -> CodeshotResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            CodeshotError::render(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes).map_err(|e| {
            CodeshotError::render(format!("font '{}': {e}", path.display()))
        })
    }

    /// Parse font bytes and take their first face.
    pub fn from_bytes(bytes: Vec<u8>) -> CodeshotResult<Self> {
        let bytes = Arc::new(bytes);
        let mut db = fontdb::Database::new();
        db.load_font_source(fontdb::Source::Binary(bytes.clone()));
        let face = db
            .faces()
            .next()
            .ok_or_else(|| CodeshotError::render("no font face in data"))?;
        let family = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        Ok(Self {
            bytes,
            index: face.index,
            family,
        })
    }
}

/// System font lookup backed by the `fontdb` database `usvg` ships with.
pub struct FontSource {
    db: fontdb::Database,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontSource {
    /// A source populated with the fonts installed on this machine.
    pub fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "system font database loaded");
        Self { db }
    }

    /// A source with no fonts; only explicit font files resolve.
    pub fn empty() -> Self {
        Self {
            db: fontdb::Database::new(),
        }
    }

    /// Pick the font for `theme`.
    ///
    /// Order: `theme.font_path`, then the file named by [`FONT_ENV`], then the theme's family
    /// in the database, then any monospace face.
    pub fn resolve(&self, theme: &Theme) -> CodeshotResult<LoadedFont> {
        if let Some(path) = &theme.font_path {
            return LoadedFont::from_file(path);
        }
        if let Some(path) = std::env::var_os(FONT_ENV).filter(|p| !p.is_empty()) {
            return LoadedFont::from_file(Path::new(&path));
        }

        let families = [
            fontdb::Family::Name(theme.font_family.as_str()),
            fontdb::Family::Monospace,
        ];
        let query = fontdb::Query {
            families: &families,
            ..Default::default()
        };
        let id = self.db.query(&query).ok_or_else(|| {
            CodeshotError::render(format!(
                "no font found for family \"{}\" and no monospace fallback",
                theme.font_family
            ))
        })?;

        let family = self
            .db
            .face(id)
            .and_then(|f| f.families.first().map(|(n, _)| n.clone()))
            .unwrap_or_else(|| theme.font_family.clone());
        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| CodeshotError::render("font face data unavailable"))?;

        if family != theme.font_family {
            tracing::warn!(wanted = %theme.font_family, using = %family, "font family substituted");
        }
        Ok(LoadedFont {
            bytes: Arc::new(bytes),
            index,
            family,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
