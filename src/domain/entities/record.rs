//! Record entity - one cataloged program
//!
//! A record's title is its identity: two records are equal iff their titles
//! are equal (case-sensitive). Two distinct programs sharing a title collide,
//! and the catalog reports the collision instead of overwriting.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::errors::CatalogError;

/// Suffix shown after favourite titles
pub const FAVOURITE_MARK: &str = " [F]";
/// Suffix shown after hidden titles
pub const HIDDEN_MARK: &str = " [H]";
/// Prefix shown before titles that are not installed
pub const NOT_INSTALLED_MARK: char = '*';

/// Origin of a record
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    /// User-added entries; never pruned by reconciliation
    Custom,
    Steam,
    Epic,
    Gog,
    Origin,
    Uplay,
    Battlenet,
    Amazon,
    Itch,
    Bigfish,
    /// Any storefront or source without a dedicated variant
    Other(String),
}

impl Platform {
    /// Whether records of this platform survive rescans that no longer report them
    pub fn is_user_curated(&self) -> bool {
        matches!(self, Platform::Custom)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Custom => "custom",
            Platform::Steam => "steam",
            Platform::Epic => "epic",
            Platform::Gog => "gog",
            Platform::Origin => "origin",
            Platform::Uplay => "uplay",
            Platform::Battlenet => "battlenet",
            Platform::Amazon => "amazon",
            Platform::Itch => "itch",
            Platform::Bigfish => "bigfish",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Platform {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "custom" => Platform::Custom,
            "steam" => Platform::Steam,
            "epic" => Platform::Epic,
            "gog" => Platform::Gog,
            "origin" => Platform::Origin,
            "uplay" => Platform::Uplay,
            "battlenet" => Platform::Battlenet,
            "amazon" => Platform::Amazon,
            "itch" => Platform::Itch,
            "bigfish" => Platform::Bigfish,
            _ => Platform::Other(s),
        }
    }
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        Platform::from(s.to_string())
    }
}

impl From<Platform> for String {
    fn from(p: Platform) -> Self {
        p.as_str().to_string()
    }
}

/// A cataloged program
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    /// Source identifier (unique only within a platform)
    pub id: String,
    /// Display name, identity key
    pub title: String,
    /// Short name used for exact/prefix search
    #[serde(default)]
    pub alias: String,
    /// Launch command or path
    #[serde(default)]
    pub launch_ref: String,
    /// Uninstall command or path
    #[serde(default)]
    pub uninstall_ref: String,
    /// Icon path
    #[serde(default)]
    pub icon_ref: String,
    pub platform: Platform,
    #[serde(default = "default_installed")]
    pub installed: bool,
    #[serde(default)]
    pub favourite: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Recency/heat score, never negative
    #[serde(default)]
    pub frequency: f64,
}

fn default_installed() -> bool {
    true
}

impl Record {
    /// Create an installed record with no flags set
    pub fn new(title: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            alias: String::new(),
            launch_ref: String::new(),
            uninstall_ref: String::new(),
            icon_ref: String::new(),
            platform,
            installed: true,
            favourite: false,
            is_new: false,
            hidden: false,
            frequency: 0.0,
        }
    }

    /// Builder pattern: set source id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder pattern: set alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Builder pattern: set launch command
    pub fn with_launch_ref(mut self, launch_ref: impl Into<String>) -> Self {
        self.launch_ref = launch_ref.into();
        self
    }

    /// Builder pattern: set installed state
    pub fn with_installed(mut self, installed: bool) -> Self {
        self.installed = installed;
        self
    }

    /// Builder pattern: mark as favourite
    pub fn with_favourite(mut self, favourite: bool) -> Self {
        self.favourite = favourite;
        self
    }

    /// Builder pattern: mark as hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Builder pattern: mark as new
    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    /// Builder pattern: set frequency (clamped at zero)
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency.max(0.0);
        self
    }

    /// Title as shown in lists: `*` for not installed, ` [F]` and ` [H]` suffixes
    pub fn display_title(&self) -> String {
        let mut display = String::with_capacity(self.title.len() + 9);
        if !self.installed {
            display.push(NOT_INSTALLED_MARK);
        }
        display.push_str(&self.title);
        if self.favourite {
            display.push_str(FAVOURITE_MARK);
        }
        if self.hidden {
            display.push_str(HIDDEN_MARK);
        }
        display
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

/// A raw candidate produced by a platform scanner
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScannedProgram {
    pub id: String,
    pub title: String,
    pub launch_ref: String,
    pub icon_ref: String,
    pub uninstall_ref: String,
    pub installed: bool,
    pub alias: String,
    pub platform: Option<Platform>,
}

impl ScannedProgram {
    /// Shorthand for an installed candidate with only a title
    pub fn new(title: impl Into<String>, platform: Platform) -> Self {
        Self {
            title: title.into(),
            installed: true,
            platform: Some(platform),
            ..Self::default()
        }
    }

    /// Validate into a fresh record (`is_new`, unflagged, zero frequency)
    pub fn into_record(self) -> Result<Record, CatalogError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CatalogError::MalformedInput(format!(
                "candidate '{}' has no title",
                self.id
            )));
        }
        let platform = self.platform.ok_or_else(|| {
            CatalogError::MalformedInput(format!("candidate '{}' has no platform", title))
        })?;

        Ok(Record {
            id: self.id,
            title: title.to_string(),
            alias: self.alias,
            launch_ref: self.launch_ref,
            uninstall_ref: self.uninstall_ref,
            icon_ref: self.icon_ref,
            platform,
            installed: self.installed,
            favourite: false,
            is_new: true,
            hidden: false,
            frequency: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_title() {
        let a = Record::new("Portal", Platform::Steam).with_id("400");
        let b = Record::new("Portal", Platform::Gog).with_id("1207");
        let c = Record::new("portal", Platform::Steam);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_title() {
        let plain = Record::new("Doom", Platform::Steam);
        assert_eq!(plain.display_title(), "Doom");

        let decorated = Record::new("Doom", Platform::Steam)
            .with_installed(false)
            .with_favourite(true)
            .with_hidden(true);
        assert_eq!(decorated.display_title(), "*Doom [F] [H]");
    }

    #[test]
    fn test_platform_from_string() {
        assert_eq!(Platform::from("Steam"), Platform::Steam);
        assert_eq!(Platform::from("custom"), Platform::Custom);
        assert_eq!(
            Platform::from("Xbox"),
            Platform::Other("Xbox".to_string())
        );
        assert_eq!(Platform::Other("Xbox".to_string()).to_string(), "Xbox");
    }

    #[test]
    fn test_candidate_into_record() {
        let mut candidate = ScannedProgram::new("  Hades ", Platform::Epic);
        candidate.alias = "hades".to_string();

        let record = candidate.into_record().unwrap();
        assert_eq!(record.title, "Hades");
        assert_eq!(record.alias, "hades");
        assert!(record.is_new);
        assert!(!record.favourite);
        assert!(!record.hidden);
        assert_eq!(record.frequency, 0.0);
    }

    #[test]
    fn test_candidate_without_title_rejected() {
        let candidate = ScannedProgram::new("   ", Platform::Steam);
        assert!(matches!(
            candidate.into_record(),
            Err(CatalogError::MalformedInput(_))
        ));

        let no_platform = ScannedProgram {
            title: "Hades".to_string(),
            ..ScannedProgram::default()
        };
        assert!(matches!(
            no_platform.into_record(),
            Err(CatalogError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_negative_frequency_clamped() {
        let record = Record::new("Doom", Platform::Steam).with_frequency(-3.0);
        assert_eq!(record.frequency, 0.0);
    }
}
