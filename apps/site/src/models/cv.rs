use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::view::visibility::HideCondition;

/// The whole data document behind the page. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cv {
    pub profile: Profile,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub username: String,
    pub address: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub hide: BTreeMap<String, HideCondition>,
}

/// One contact channel (phone, email, web...). `channel` is unique within a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub channel: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub prefix: String,
    pub text: String,
}

impl Contact {
    pub fn link(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(&self.channel)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub icon: String,
    pub url: String,
}

impl Account {
    /// Profile URL for the given username, e.g. `https://github.com/` + `alice`.
    pub fn link(&self, username: &str) -> String {
        format!("{}{}", self.url, username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Skill(SkillEntry),
    Project(ProjectEntry),
    Position(PositionEntry),
}

impl Block {
    pub fn id(&self) -> &str {
        match self {
            Block::Skill(s) => &s.id,
            Block::Project(p) => &p.id,
            Block::Position(p) => &p.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub tech: String,
    pub url: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// A job or similar role. Either `date` (a single point) or `start`/`end` is set;
/// a missing `end` means the role is ongoing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionEntry {
    pub id: String,
    pub title: String,
    pub organisation: String,
    pub url: String,
    #[serde(default, with = "month_date::option")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "month_date::option")]
    pub start: Option<NaiveDate>,
    #[serde(default, with = "month_date::option")]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Dates in the data document are written `YYYY-MM` or `YYYY-MM-DD`.
/// A month-only value resolves to the first of that month.
pub mod month_date {
    use super::*;

    pub fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
            .ok()
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(d) => serializer.serialize_some(&d.format("%Y-%m-%d").to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|s| {
                parse(&s).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "invalid date '{s}', expected YYYY-MM or YYYY-MM-DD"
                    ))
                })
            })
            .transpose()
        }
    }
}
