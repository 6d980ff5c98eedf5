//! Show/hide rules for page sections.
//!
//! Every block and category has an id that may appear in the profile's `hide`
//! map. A flag is either a fixed boolean or a media query (e.g. `print`) that
//! the host evaluates at render time. Nothing here is cached; each render
//! re-evaluates every flag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flag controlling the "(N years, M months)" suffix on positions.
pub const DURATION_FLAG: &str = "duration";

/// A hide-flag value from the data document.
///
/// In JSON: `true`, `false`, or `{"media": "print"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HideCondition {
    Static(bool),
    Media { media: String },
}

impl HideCondition {
    pub fn evaluate(&self, media: &dyn MediaMatcher) -> bool {
        match self {
            HideCondition::Static(hidden) => *hidden,
            HideCondition::Media { media: query } => media.matches(query),
        }
    }
}

/// Answers media queries for the surface the page is rendered for.
pub trait MediaMatcher {
    fn matches(&self, query: &str) -> bool;
}

impl<F> MediaMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, query: &str) -> bool {
        self(query)
    }
}

/// The two surfaces the host can render for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Media {
    #[default]
    Screen,
    Print,
}

impl Media {
    pub fn as_str(&self) -> &'static str {
        match self {
            Media::Screen => "screen",
            Media::Print => "print",
        }
    }
}

impl MediaMatcher for Media {
    fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.eq_ignore_ascii_case("all") || query.eq_ignore_ascii_case(self.as_str())
    }
}

pub type HideMap = BTreeMap<String, HideCondition>;

/// True unless `hide` has an entry for `flag` that evaluates truthy.
pub fn is_visible(flag: &str, hide: &HideMap, media: &dyn MediaMatcher) -> bool {
    !hide.get(flag).is_some_and(|cond| cond.evaluate(media))
}

/// A composite node renders only when its own flag is not set and at least
/// one of its children is visible.
pub fn is_composite_visible(
    flag: &str,
    hide: &HideMap,
    media: &dyn MediaMatcher,
    visible_children: usize,
) -> bool {
    visible_children > 0 && is_visible(flag, hide, media)
}
