//! Font family enumeration and the font picker model.
//!
//! Family names come from a [`FontCatalog`]: the system font database in the
//! GUI, a fixed list in tests.

/// Source of installed font family names.
pub trait FontCatalog {
    /// All family names, in any order, possibly with duplicates.
    fn families(&self) -> Vec<String>;
}

/// A fixed list of families.
#[derive(Debug, Clone, Default)]
pub struct StaticFonts(pub Vec<String>);

impl FontCatalog for StaticFonts {
    fn families(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// The result of applying the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChoice {
    pub family: String,
    pub size: u16,
}

/// State of the modal font picker.
///
/// Lists are fixed when the picker opens. Selections are indices into
/// them; `None` means nothing is selected in that list.
#[derive(Debug, Clone)]
pub struct FontPicker {
    families: Vec<String>,
    selected_family: Option<usize>,
    selected_size: Option<usize>,
    current: FontChoice,
}

impl FontPicker {
    /// Sizes offered by the picker.
    pub const SIZES: [u16; 13] = [8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32];

    /// Text drawn in the preview label.
    pub const SAMPLE_TEXT: &'static str = "AaBbZz";

    /// Opens the picker with the current font preselected where listed.
    pub fn open(catalog: &dyn FontCatalog, current_family: &str, current_size: u16) -> Self {
        let mut families = catalog.families();
        families.sort();
        families.dedup();

        let selected_family = families.iter().position(|f| f == current_family);
        let selected_size = Self::SIZES.iter().position(|&s| s == current_size);

        Self {
            families,
            selected_family,
            selected_size,
            current: FontChoice {
                family: current_family.to_string(),
                size: current_size,
            },
        }
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn selected_family(&self) -> Option<usize> {
        self.selected_family
    }

    pub fn selected_size(&self) -> Option<usize> {
        self.selected_size
    }

    /// Selects a family by index. Out-of-range indices are ignored.
    pub fn select_family(&mut self, index: usize) {
        if index < self.families.len() {
            self.selected_family = Some(index);
        }
    }

    /// Selects a size by index. Out-of-range indices are ignored.
    pub fn select_size(&mut self, index: usize) {
        if index < Self::SIZES.len() {
            self.selected_size = Some(index);
        }
    }

    /// What the preview label should show right now.
    pub fn preview(&self) -> FontChoice {
        let family = self
            .selected_family
            .and_then(|i| self.families.get(i))
            .cloned()
            .unwrap_or_else(|| self.current.family.clone());
        let size = self
            .selected_size
            .and_then(|i| Self::SIZES.get(i))
            .copied()
            .unwrap_or(self.current.size);

        FontChoice { family, size }
    }

    /// Closes the picker with the chosen font.
    ///
    /// A list with nothing selected keeps the value the picker opened with.
    pub fn apply(self) -> FontChoice {
        self.preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticFonts {
        StaticFonts(
            ["Courier New", "Arial", "Consolas", "arial black", "arial", "Arial"]
                .map(String::from)
                .to_vec(),
        )
    }

    #[test]
    fn test_families_sorted_and_deduped() {
        let picker = FontPicker::open(&catalog(), "Consolas", 11);
        assert_eq!(
            picker.families(),
            &["Arial", "Consolas", "Courier New", "arial", "arial black"]
        );
    }

    #[test]
    fn test_current_values_preselected() {
        let picker = FontPicker::open(&catalog(), "Consolas", 12);
        assert_eq!(picker.selected_family(), Some(1));
        assert_eq!(picker.selected_size(), Some(2));
    }

    #[test]
    fn test_unlisted_values_not_selected() {
        let picker = FontPicker::open(&catalog(), "Nope Sans", 11);
        assert_eq!(picker.selected_family(), None);
        assert_eq!(picker.selected_size(), None);
    }

    #[test]
    fn test_apply_keeps_unselected_values() {
        let mut picker = FontPicker::open(&catalog(), "Nope Sans", 11);
        picker.select_size(0);
        assert_eq!(
            picker.apply(),
            FontChoice {
                family: "Nope Sans".to_string(),
                size: 8
            }
        );
    }

    #[test]
    fn test_preview_follows_selection() {
        let mut picker = FontPicker::open(&catalog(), "Consolas", 12);
        picker.select_family(0);
        picker.select_size(99);
        let preview = picker.preview();
        assert_eq!(preview.family, "Arial");
        assert_eq!(preview.size, 12);
    }

    #[test]
    fn test_sizes_are_even_eight_to_thirty_two() {
        let expected: Vec<u16> = (8..=32).step_by(2).collect();
        assert_eq!(FontPicker::SIZES.to_vec(), expected);
    }
}
