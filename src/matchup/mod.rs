//! Classification of heads up showdowns into outcome categories, and
//! the bounded sample store built from them.
//!
//! The flow for one showdown is: deal, evaluate both hands,
//! [`normalize_winner_first`], [`refine_same_rank_category`], then
//! [`MatchupStore::insert`]. [`ShowdownSimulator`] drives that for a
//! batch.

mod error;
pub use self::error::MatchupError;

/// Rank value helpers.
mod values;
pub use self::values::{
    count_by_rank, descending_values, first_diverging_index, rank_value, rank_value_of_display,
    ranks_with_count, straight_top_value,
};

/// Category keys and their string codec.
mod key;
pub use self::key::{CategoryKey, SEPARATOR, build_key, capitalize, parse_key, to_token};

mod normalize;
pub use self::normalize::{Normalized, normalize_winner_first};

/// Same type refinement.
mod refine;
pub use self::refine::{Anomaly, Refinement, refine_key_str, refine_same_rank_category};

mod store;
pub use self::store::{Deal, MAX_PER_CATEGORY, MatchupStore};

mod manifest;
pub use self::manifest::Manifest;

mod simulation;
pub use self::simulation::{
    BatchSummary, MANIFEST_FILE, STORE_FILE, Showdown, ShowdownSimulator, SimulationConfig,
};

mod output;
pub use self::output::clear_output_dir;
