//! User-facing options for the joke node.
//!
//! Every option maps onto a closed set of values accepted by JokeAPI. The
//! host hands them over as a camelCase JSON object, one per input item.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::NodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Any,
    Christmas,
    Dark,
    Misc,
    Programming,
    Pun,
    Spooky,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Any => "Any",
            Category::Christmas => "Christmas",
            Category::Dark => "Dark",
            Category::Misc => "Misc",
            Category::Programming => "Programming",
            Category::Pun => "Pun",
            Category::Spooky => "Spooky",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cs,
    #[default]
    En,
    Fr,
    De,
    Pt,
    Es,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Cs => "cs",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JokeType {
    #[default]
    Any,
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "twopart")]
    TwoPart,
}

impl JokeType {
    pub fn as_str(self) -> &'static str {
        match self {
            JokeType::Any => "Any",
            JokeType::Single => "single",
            JokeType::TwoPart => "twopart",
        }
    }
}

/// Content flags that can be excluded from results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlacklistFlag {
    Explicit,
    Nsfw,
    Political,
    Racist,
    Religious,
    Sexist,
}

impl BlacklistFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            BlacklistFlag::Explicit => "explicit",
            BlacklistFlag::Nsfw => "nsfw",
            BlacklistFlag::Political => "political",
            BlacklistFlag::Racist => "racist",
            BlacklistFlag::Religious => "religious",
            BlacklistFlag::Sexist => "sexist",
        }
    }
}

fn default_categories() -> Vec<Category> {
    vec![Category::Any]
}

/// Options for a single joke request.
///
/// Every field is optional on the wire; missing fields take the JokeAPI
/// defaults so they can be left out of the query entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JokeRequestOptions {
    /// Selected categories, in selection order. Containing `Any` makes the
    /// whole selection a wildcard.
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub joke_type: JokeType,
    #[serde(default)]
    pub blacklist_flags: Vec<BlacklistFlag>,
    #[serde(default)]
    pub safe_mode: bool,
    #[serde(default)]
    pub search_string: String,
}

impl Default for JokeRequestOptions {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            language: Language::default(),
            joke_type: JokeType::default(),
            blacklist_flags: Vec::new(),
            safe_mode: false,
            search_string: String::new(),
        }
    }
}

impl JokeRequestOptions {
    /// Parse an item's parameter object.
    ///
    /// `null` is treated as an empty object. Out-of-range enum values,
    /// mistyped fields and unknown keys are rejected with [`NodeError::Input`].
    pub fn from_parameters(parameters: Value) -> Result<Self, NodeError> {
        let parameters = match parameters {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let mut options: Self =
            serde_json::from_value(parameters).map_err(|e| NodeError::Input(e.to_string()))?;

        // An explicitly empty selection behaves like no selection at all.
        if options.categories.is_empty() {
            options.categories = default_categories();
        }
        Ok(options)
    }

    /// `true` when the category selection places no restriction.
    pub fn is_any_category(&self) -> bool {
        self.categories.is_empty() || self.categories.contains(&Category::Any)
    }
}
