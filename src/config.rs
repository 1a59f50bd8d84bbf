//! Host configuration
//!
//! Settings a host application exposes to its users: behavior flags and the
//! element palette. The symbol-to-element mapping is fixed by
//! [`crate::ganzhi`]; only the element-to-color half is configurable here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SizhuError, SizhuResult};
use crate::ganzhi::Element;

/// Display colors for the five elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_wood")]
    pub wood: String,
    #[serde(default = "default_fire")]
    pub fire: String,
    #[serde(default = "default_earth")]
    pub earth: String,
    #[serde(default = "default_metal")]
    pub metal: String,
    #[serde(default = "default_water")]
    pub water: String,
}

fn default_wood() -> String {
    "#4CAF50".to_string()
}

fn default_fire() -> String {
    "#F44336".to_string()
}

fn default_earth() -> String {
    "#8D6E63".to_string()
}

fn default_metal() -> String {
    "#FFC107".to_string()
}

fn default_water() -> String {
    "#2196F3".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wood: default_wood(),
            fire: default_fire(),
            earth: default_earth(),
            metal: default_metal(),
            water: default_water(),
        }
    }
}

impl Palette {
    /// The configured color for an element
    pub fn color_for(&self, element: Element) -> &str {
        match element {
            Element::Wood => &self.wood,
            Element::Fire => &self.fire,
            Element::Earth => &self.earth,
            Element::Metal => &self.metal,
            Element::Water => &self.water,
        }
    }

    /// The configured color for a stem or branch symbol
    pub fn color_for_symbol(&self, symbol: &str) -> SizhuResult<&str> {
        Ok(self.color_for(crate::ganzhi::element_of_symbol(symbol)?))
    }
}

/// Host-facing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Render selectors inside the editor view
    #[serde(default = "default_true")]
    pub display_in_editor: bool,

    /// Persist confirmed selections into note frontmatter
    #[serde(default)]
    pub save_to_frontmatter: bool,

    /// Insert results as plain text instead of a selector block
    #[serde(default = "default_true")]
    pub insert_as_text: bool,

    #[serde(default)]
    pub colors: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_in_editor: true,
            save_to_frontmatter: false,
            insert_as_text: true,
            colors: Palette::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file; a missing file yields defaults
    pub fn load(path: &Path) -> SizhuResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| SizhuError::InvalidConfig {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
