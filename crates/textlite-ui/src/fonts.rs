//! System font families and iced font handles.

use std::collections::HashMap;

use iced::Font;
use iced::font::Family;
use textlite_core::FontCatalog;
use tracing::info;

/// Installed fonts, read once from the system font database.
pub struct SystemFonts {
    db: fontdb::Database,
}

impl SystemFonts {
    pub fn load() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        info!("Loaded {} system font faces", db.len());
        Self { db }
    }
}

impl FontCatalog for SystemFonts {
    fn families(&self) -> Vec<String> {
        self.db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect()
    }
}

/// Turns family names into iced fonts.
///
/// `Family::Name` borrows a `'static` string, so every distinct name is
/// leaked once and reused afterwards. The set of names is bounded by the
/// installed fonts.
#[derive(Debug, Default)]
pub struct FontNames {
    interned: HashMap<String, &'static str>,
}

impl FontNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(&mut self, family: &str) -> Font {
        let name = match self.interned.get(family) {
            Some(&name) => name,
            None => {
                let name: &'static str = Box::leak(family.to_owned().into_boxed_str());
                self.interned.insert(family.to_owned(), name);
                name
            }
        };
        Font {
            family: Family::Name(name),
            ..Font::DEFAULT
        }
    }

    /// Number of distinct names handed out.
    pub fn len(&self) -> usize {
        self.interned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_family_is_interned_once() {
        let mut names = FontNames::new();
        let first = names.font("Consolas");
        let second = names.font("Consolas");
        names.font("Courier New");

        assert_eq!(first, second);
        assert_eq!(first.family, Family::Name("Consolas"));
        assert_eq!(names.len(), 2);
    }
}
