use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

const PREFERRED_SANS: [&str; 5] = [
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
    "Noto Sans",
];

/// Read-only font database shared by every render.
///
/// Loading system fonts is slow, so it happens once; each render only clones the `Arc`.
#[derive(Clone)]
pub struct FontBook {
    db: Arc<fontdb::Database>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontBook {
    /// Load system fonts plus any extra font directories.
    pub fn system<P: AsRef<Path>>(extra_dirs: &[P]) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        for dir in extra_dirs {
            db.load_fonts_dir(dir.as_ref());
        }
        Self::from_database(db)
    }

    /// Wrap an already populated database, pointing generic `sans-serif` at an installed face.
    pub fn from_database(mut db: fontdb::Database) -> Self {
        if let Some(family) = pick_sans_family(&db) {
            tracing::debug!(family = %family, faces = db.len(), "font book ready");
            db.set_sans_serif_family(family);
        } else {
            tracing::warn!("no fonts available; chart labels will not be drawn");
        }
        Self { db: Arc::new(db) }
    }

    /// A database with no faces. Labels are skipped.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
        }
    }

    /// Number of loaded faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub(crate) fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }
}

fn has_family(db: &fontdb::Database, name: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(n, _)| n == name))
}

fn pick_sans_family(db: &fontdb::Database) -> Option<String> {
    PREFERRED_SANS
        .iter()
        .find(|name| has_family(db, name))
        .map(|name| (*name).to_owned())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(n, _)| n.clone()))
        })
}
