use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::core::{Card, HandType};

use super::{CategoryKey, MatchupError};

/// The most sample deals kept for any one category.
pub const MAX_PER_CATEGORY: usize = 100;

/// One showdown as it is stored.
///
/// `p1` holds the winner's hole cards, or player one's on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deal {
    pub board: [Card; 5],
    pub p1: [Card; 2],
    pub p2: [Card; 2],
}

/// Sample deals for every category seen so far.
///
/// Each list keeps the order deals were inserted in. Once a list is
/// full later deals for that category are dropped, the early samples
/// are never evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchupStore {
    matchups: BTreeMap<CategoryKey, Vec<Deal>>,
}

impl MatchupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the deal to the category if it holds fewer than `cap`
    /// deals. Returns true if the deal was stored.
    ///
    /// ```
    /// use poker_matchups::core::{Card, HandType};
    /// use poker_matchups::matchup::{CategoryKey, Deal, MatchupStore};
    ///
    /// let cards = Card::parse_many("2c7d9hJsKd3c4dKc5d").unwrap();
    /// let deal = Deal {
    ///     board: [cards[0], cards[1], cards[2], cards[3], cards[4]],
    ///     p1: [cards[7], cards[8]],
    ///     p2: [cards[5], cards[6]],
    /// };
    /// let key = CategoryKey::versus(HandType::Pair, HandType::HighCard);
    ///
    /// let mut store = MatchupStore::new();
    /// assert!(store.insert(key, deal, 1));
    /// assert!(!store.insert(key, deal, 1));
    /// assert_eq!(1, store.total_deals());
    /// ```
    pub fn insert(&mut self, key: CategoryKey, deal: Deal, cap: usize) -> bool {
        let deals = self.matchups.entry(key).or_default();
        if deals.len() < cap {
            deals.push(deal);
            true
        } else {
            false
        }
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&[Deal]> {
        self.matchups.get(key).map(Vec::as_slice)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Number of deals across every category.
    pub fn total_deals(&self) -> usize {
        self.matchups.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> Iter<'_, CategoryKey, Vec<Deal>> {
        self.matchups.iter()
    }

    /// Read a store from a JSON file.
    ///
    /// A missing file gives an empty store. Categories whose key doesn't
    /// parse, and deals that aren't valid, are dropped one by one with a
    /// warning. A file that isn't a JSON object at all is renamed to
    /// `<name>.corrupt` so the next save doesn't overwrite it, and an
    /// empty store is returned. Any other I/O failure is returned.
    pub fn load(path: &Path) -> Result<Self, MatchupError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                event!(Level::DEBUG, path = %path.display(), "No matchup store yet");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let raw: BTreeMap<String, Vec<serde_json::Value>> =
            match serde_json::from_reader(BufReader::new(file)) {
                Ok(raw) => raw,
                Err(e) if e.is_io() => return Err(e.into()),
                Err(e) => {
                    let moved = corrupt_path(path);
                    fs::rename(path, &moved)?;
                    event!(
                        Level::WARN,
                        path = %path.display(),
                        moved_to = %moved.display(),
                        error = %e,
                        "Matchup store is unreadable, starting empty"
                    );
                    return Ok(Self::new());
                }
            };

        let mut store = Self::new();
        for (name, values) in raw {
            let Some(key) = name.parse::<CategoryKey>().ok().or_else(|| legacy_key(&name)) else {
                event!(
                    Level::WARN,
                    key = %name,
                    deals = values.len(),
                    "Dropping unknown category"
                );
                continue;
            };
            let deals = store.matchups.entry(key).or_default();
            for value in values {
                match serde_json::from_value::<Deal>(value) {
                    Ok(deal) => deals.push(deal),
                    Err(e) => {
                        event!(Level::WARN, key = %name, error = %e, "Dropping invalid deal")
                    }
                }
            }
        }
        Ok(store)
    }

    /// Write the store as pretty printed JSON, creating the parent
    /// directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), MatchupError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        event!(
            Level::INFO,
            path = %path.display(),
            categories = self.len(),
            deals = self.total_deals(),
            "Saved matchup store"
        );
        Ok(())
    }
}

/// Spellings written by older stores that don't follow the key grammar.
fn legacy_key(name: &str) -> Option<CategoryKey> {
    match name {
        "highCardVsLowerCard" => Some(CategoryKey::Lower(HandType::HighCard)),
        "highCardVsCardChop" => Some(CategoryKey::Chop(HandType::HighCard)),
        "pairVsLowerPairChop" => Some(CategoryKey::Chop(HandType::Pair)),
        "fourOfAKindVsLowerFourOfAKindChop" => Some(CategoryKey::Chop(HandType::FourOfAKind)),
        _ => None,
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

impl<'a> IntoIterator for &'a MatchupStore {
    type Item = (&'a CategoryKey, &'a Vec<Deal>);
    type IntoIter = Iter<'a, CategoryKey, Vec<Deal>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchups.iter()
    }
}
