//! Sizhu - validation and lookup engine for sexagenary four-pillar selections
//!
//! Sizhu models the stem-branch (ganzhi) notation used to record an event
//! time as four pillars (year, month, day, hour) and validates selections
//! against the traditional rules: same-polarity pairing within a pillar, the
//! month stem following the year stem, and the hour stem following the day
//! stem. Around that core it carries the boundary pieces a host needs:
//! frontmatter and key-value persistence of selections, and element-based
//! display coloring.
//!
//! ```
//! use sizhu::{validate, Branch, FourPillars, Pillar, Stem};
//!
//! let mut pillars = FourPillars::default();
//! pillars.year = Pillar::complete(Stem::Jia, Branch::Zi);
//! pillars.month = Pillar::complete(Stem::Bing, Branch::Yin);
//!
//! let report = validate(&pillars);
//! assert!(report.is_valid());
//! ```

pub mod config;
pub mod cycle;
pub mod error;
pub mod frontmatter;
pub mod ganzhi;
pub mod pairing;
pub mod pillars;
pub mod store;
pub mod validate;

// Re-exports for convenience
pub use config::{Config, Palette};
pub use cycle::{expected_hour_stem, expected_month_stem};
pub use error::{SizhuError, SizhuResult};
pub use frontmatter::{
    extract_frontmatter, load_selection, parse_note_frontmatter, upsert_selection,
    ExtractedFrontmatter, NoteFrontmatter,
};
pub use ganzhi::{element_of_symbol, Branch, Element, Polarity, Stem};
pub use pairing::{compatible_branches, is_polarity_matched};
pub use pillars::{FourPillars, Pillar, PillarPosition};
pub use store::{
    storage_key, JsonFileStore, MemoryStore, SelectionStore, StoreStack, STORAGE_KEY_PREFIX,
};
pub use validate::{validate, RuleKind, RuleViolation, ValidationReport};
