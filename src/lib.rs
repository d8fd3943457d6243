pub mod catalog;
pub mod config;
pub mod core;
pub mod library;
pub mod search;
pub mod throttle;
pub mod youtube;

pub use catalog::{Catalog, CatalogError, Hymn, Reading};
pub use self::core::initials::{
    compact_initials, initials_with_spaces, is_initials_query, is_numeric_query,
    matches_initial_tokens, matches_initials_loose, remove_all_spaces, squeeze_spaces,
};
pub use library::{HistoryItem, Library, LibraryError};
pub use search::{search, MatchField, QueryKind, SearchHit, SearchScope, Searchable};
pub use throttle::{SharedThrottle, SlotKind, Throttle};
pub use youtube::{IndexError, YouTubeIndex};
