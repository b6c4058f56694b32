//! Summary of a matchup store, written out as a TypeScript module so
//! the categories can be used as a type downstream.
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{Level, event};

use super::{CategoryKey, MatchupError, MatchupStore};

/// Every category seen, weakest matchup first, with its sample count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    categories: Vec<(CategoryKey, usize)>,
    total_hands: usize,
}

/// Order keys by the strength of the (left, right) hand types, with
/// board chops at the end. Anything else is broken on the string form.
fn manifest_order(a: &CategoryKey, b: &CategoryKey) -> Ordering {
    let sides = |k: &CategoryKey| k.sides().map(|(l, r)| (l.strength(), r.strength()));
    match (sides(a), sides(b)) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (sa, sb) => sa
            .cmp(&sb)
            .then_with(|| a.to_string().cmp(&b.to_string())),
    }
}

impl Manifest {
    pub fn from_store(store: &MatchupStore) -> Self {
        let mut categories: Vec<(CategoryKey, usize)> =
            store.iter().map(|(k, deals)| (*k, deals.len())).collect();
        categories.sort_by(|(a, _), (b, _)| manifest_order(a, b));
        Self {
            total_hands: categories.iter().map(|(_, n)| n).sum(),
            categories,
        }
    }

    /// Categories with their counts in manifest order.
    pub fn categories(&self) -> &[(CategoryKey, usize)] {
        &self.categories
    }

    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn total_hands(&self) -> usize {
        self.total_hands
    }

    /// Render the generated TypeScript module.
    pub fn render_typescript(&self) -> Result<String, MatchupError> {
        let names: Vec<String> = self.categories.iter().map(|(k, _)| k.to_string()).collect();
        let names = serde_json::to_string_pretty(&names)?;
        let counts = serde_json::to_string_pretty(&OrderedCounts(&self.categories))?;

        Ok(format!(
            "// AUTO-GENERATED. Do not edit manually.\n\
             // Sorted by (left, right) poker strength: weak → strong.\n\n\
             export const HAND_CATEGORIES = {names} as const;\n\
             export type HandCategory = typeof HAND_CATEGORIES[number];\n\n\
             export const HAND_CATEGORY_COUNTS: Record<HandCategory, number> = {counts};\n\n\
             export const TOTAL_CATEGORIES = {};\n\
             export const TOTAL_HANDS = {};\n",
            self.total_categories(),
            self.total_hands,
        ))
    }

    /// Write the TypeScript module to `path`.
    pub fn write(&self, path: &Path) -> Result<(), MatchupError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render_typescript()?)?;
        event!(
            Level::INFO,
            path = %path.display(),
            categories = self.total_categories(),
            hands = self.total_hands,
            "Wrote hand category manifest"
        );
        Ok(())
    }
}

/// Serializes as a JSON object keeping the manifest order.
struct OrderedCounts<'a>(&'a [(CategoryKey, usize)]);

impl Serialize for OrderedCounts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
