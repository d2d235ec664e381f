//! Request construction: options → `/joke/{categories}` path + query string.
//!
//! Parameters that are at their JokeAPI default are left out entirely rather
//! than sent with their default value.

use url::{form_urlencoded, Url};

use super::options::{JokeRequestOptions, JokeType, Language};
use crate::NodeError;

/// Path segment used when the category selection is a wildcard.
pub const ANY_CATEGORY: &str = "Any";

/// Wire value of the `safe` parameter when safe mode is on.
pub const SAFE_MODE_VALUE: &str = "true";

/// A fully derived joke request, independent of the base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeRequest {
    /// Either `Any` or the comma-joined category selection.
    pub category_segment: String,
    /// Query parameters in the order they are appended to the URL.
    pub query: Vec<(&'static str, String)>,
}

impl JokeRequest {
    pub fn from_options(options: &JokeRequestOptions) -> Self {
        let category_segment = if options.is_any_category() {
            ANY_CATEGORY.to_owned()
        } else {
            join(options.categories.iter().map(|c| c.as_str()))
        };

        let mut query = Vec::new();

        if options.language != Language::En {
            query.push(("lang", options.language.as_str().to_owned()));
        }

        if options.joke_type != JokeType::Any {
            query.push(("type", options.joke_type.as_str().to_owned()));
        }

        if !options.blacklist_flags.is_empty() {
            query.push((
                "blacklistFlags",
                join(options.blacklist_flags.iter().map(|f| f.as_str())),
            ));
        }

        if options.safe_mode {
            query.push(("safe", SAFE_MODE_VALUE.to_owned()));
        }

        if !options.search_string.is_empty() {
            query.push(("contains", options.search_string.clone()));
        }

        Self { category_segment, query }
    }

    /// Request path relative to the service root, e.g. `/joke/Dark`.
    pub fn path(&self) -> String {
        format!("/joke/{}", self.category_segment)
    }

    /// Value of a query parameter, if it is present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Resolve against `base`, keeping any path prefix `base` already has.
    ///
    /// Query values are form-encoded except for commas, which JokeAPI uses as
    /// its list separator and are sent literally. A URL with no parameters
    /// carries no `?`.
    pub fn to_url(&self, base: &Url) -> Result<Url, NodeError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|_| NodeError::Input(format!("base URL '{base}' cannot carry a path")))?
            .pop_if_empty()
            .push("joke")
            .push(&self.category_segment);

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}

/// Form-encode one query key or value, leaving `,` unescaped.
fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace("%2C", ",")
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joke::options::{BlacklistFlag, Category};

    fn base() -> Url {
        Url::parse("https://v2.jokeapi.dev").unwrap()
    }

    fn with_categories(categories: Vec<Category>) -> JokeRequestOptions {
        JokeRequestOptions { categories, ..Default::default() }
    }

    #[test]
    fn any_anywhere_in_selection_is_a_wildcard() {
        for cats in [
            vec![Category::Any],
            vec![Category::Any, Category::Dark],
            vec![Category::Programming, Category::Any, Category::Pun],
            vec![],
        ] {
            let req = JokeRequest::from_options(&with_categories(cats.clone()));
            assert_eq!(req.category_segment, "Any", "selection {cats:?}");
        }
    }

    #[test]
    fn categories_are_joined_in_selection_order() {
        let req = JokeRequest::from_options(&with_categories(vec![
            Category::Spooky,
            Category::Christmas,
            Category::Misc,
        ]));
        assert_eq!(req.category_segment, "Spooky,Christmas,Misc");
        assert_eq!(req.path(), "/joke/Spooky,Christmas,Misc");
    }

    #[test]
    fn defaults_produce_no_query_parameters() {
        let req = JokeRequest::from_options(&JokeRequestOptions::default());
        assert!(req.query.is_empty());
    }

    #[test]
    fn lang_is_sent_only_for_non_english() {
        for lang in [Language::Cs, Language::Fr, Language::De, Language::Pt, Language::Es] {
            let opts = JokeRequestOptions { language: lang, ..Default::default() };
            assert_eq!(JokeRequest::from_options(&opts).param("lang"), Some(lang.as_str()));
        }
        let opts = JokeRequestOptions { language: Language::En, ..Default::default() };
        assert_eq!(JokeRequest::from_options(&opts).param("lang"), None);
    }

    #[test]
    fn type_is_sent_only_when_restricted() {
        let any = JokeRequestOptions { joke_type: JokeType::Any, ..Default::default() };
        assert_eq!(JokeRequest::from_options(&any).param("type"), None);

        let single = JokeRequestOptions { joke_type: JokeType::Single, ..Default::default() };
        assert_eq!(JokeRequest::from_options(&single).param("type"), Some("single"));

        let twopart = JokeRequestOptions { joke_type: JokeType::TwoPart, ..Default::default() };
        assert_eq!(JokeRequest::from_options(&twopart).param("type"), Some("twopart"));
    }

    #[test]
    fn blacklist_flags_keep_input_order() {
        let opts = JokeRequestOptions {
            blacklist_flags: vec![BlacklistFlag::Sexist, BlacklistFlag::Explicit, BlacklistFlag::Political],
            ..Default::default()
        };
        let req = JokeRequest::from_options(&opts);
        assert_eq!(req.param("blacklistFlags"), Some("sexist,explicit,political"));
    }

    #[test]
    fn safe_is_sent_only_when_enabled() {
        let off = JokeRequestOptions { safe_mode: false, ..Default::default() };
        assert_eq!(JokeRequest::from_options(&off).param("safe"), None);

        let on = JokeRequestOptions { safe_mode: true, ..Default::default() };
        assert_eq!(JokeRequest::from_options(&on).param("safe"), Some("true"));
    }

    #[test]
    fn contains_is_sent_only_when_non_empty() {
        let empty = JokeRequestOptions::default();
        assert_eq!(JokeRequest::from_options(&empty).param("contains"), None);

        let opts = JokeRequestOptions { search_string: "a & b?".into(), ..Default::default() };
        assert_eq!(JokeRequest::from_options(&opts).param("contains"), Some("a & b?"));
    }

    #[test]
    fn scenario_any_has_bare_url() {
        let req = JokeRequest::from_options(&with_categories(vec![Category::Any]));
        let url = req.to_url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://v2.jokeapi.dev/joke/Any");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn scenario_programming_pun_in_german() {
        let opts = JokeRequestOptions {
            categories: vec![Category::Programming, Category::Pun],
            language: Language::De,
            search_string: "Chuck".into(),
            ..Default::default()
        };
        let url = JokeRequest::from_options(&opts).to_url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://v2.jokeapi.dev/joke/Programming,Pun?lang=de&contains=Chuck"
        );
    }

    #[test]
    fn scenario_dark_safe_with_flags() {
        let opts = JokeRequestOptions {
            categories: vec![Category::Dark],
            safe_mode: true,
            blacklist_flags: vec![BlacklistFlag::Nsfw, BlacklistFlag::Racist],
            ..Default::default()
        };
        let url = JokeRequest::from_options(&opts).to_url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://v2.jokeapi.dev/joke/Dark?blacklistFlags=nsfw,racist&safe=true"
        );
    }

    #[test]
    fn commas_in_search_string_stay_literal_and_decode_back() {
        let opts = JokeRequestOptions { search_string: "well, well".into(), ..Default::default() };
        let url = JokeRequest::from_options(&opts).to_url(&base()).unwrap();
        assert_eq!(url.query(), Some("contains=well,+well"));

        let contains = url.query_pairs().find(|(k, _)| k == "contains").map(|(_, v)| v.into_owned());
        assert_eq!(contains.as_deref(), Some("well, well"));
    }

    #[test]
    fn search_string_is_encoded() {
        let opts = JokeRequestOptions { search_string: "knock knock&who".into(), ..Default::default() };
        let url = JokeRequest::from_options(&opts).to_url(&base()).unwrap();

        assert!(!url.as_str().contains(' '));
        let contains = url.query_pairs().find(|(k, _)| k == "contains").map(|(_, v)| v.into_owned());
        assert_eq!(contains.as_deref(), Some("knock knock&who"));
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/jokeapi/").unwrap();
        let url = JokeRequest::from_options(&JokeRequestOptions::default()).to_url(&base).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/jokeapi/joke/Any");
    }

    #[test]
    fn opaque_base_url_is_rejected() {
        let base = Url::parse("mailto:jokes@example.com").unwrap();
        let err = JokeRequest::from_options(&JokeRequestOptions::default()).to_url(&base).unwrap_err();
        assert!(matches!(err, NodeError::Input(_)));
    }
}
