use anyhow::{anyhow, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::model::BuildOrderModel;

pub const DEFAULT_AUTHOR: &str = "anonymous";
pub const MAX_DERIVED_TITLE_CHARS: usize = 100;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Macro,
    #[serde(rename = "timing attack")]
    TimingAttack,
    #[serde(rename = "all in")]
    AllIn,
    Cheese,
}

impl Style {
    /// Radio order on the listing page. The first entry is the default selection.
    pub const ALL: [Style; 4] = [
        Style::Macro,
        Style::TimingAttack,
        Style::AllIn,
        Style::Cheese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Macro => "macro",
            Style::TimingAttack => "timing attack",
            Style::AllIn => "all in",
            Style::Cheese => "cheese",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Style {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "macro" => Ok(Style::Macro),
            "timing attack" => Ok(Style::TimingAttack),
            "all in" => Ok(Style::AllIn),
            "cheese" => Ok(Style::Cheese),
            _ => Err(anyhow!("Invalid style: {}", s)),
        }
    }
}

// For String
impl TryFrom<String> for Style {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Style::try_from(s.as_str())
    }
}

/// A build order as it travels over the wire and through the listing page.
///
/// `style` stays a plain string: stored rows may carry values outside the
/// closed [`Style`] set and those still have to render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOrder {
    pub id: Uuid,
    pub match_up: String,
    pub style: String,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<BuildOrderModel> for BuildOrder {
    fn from(m: BuildOrderModel) -> Self {
        Self {
            id: m.id,
            match_up: m.match_up,
            style: m.style,
            title: m.title,
            description: m.description,
            author: m.author,
            created_at: m.created_at,
        }
    }
}

/// Record handed to a store for insertion; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuildOrder {
    pub match_up: String,
    pub style: String,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildSchema {
    pub match_up: String,
    pub build: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl CreateBuildSchema {
    pub fn new(match_up: impl Into<String>, build: impl Into<String>) -> Self {
        Self {
            match_up: match_up.into(),
            build: build.into(),
            ..Default::default()
        }
    }

    /// Checks the required fields and fills in defaults for the optional ones.
    pub fn into_new_build(self) -> Result<NewBuildOrder, AppError> {
        if self.match_up.trim().is_empty() {
            return Err(AppError::Validation("matchUp must be a non-empty string".into()));
        }
        if self.build.trim().is_empty() {
            return Err(AppError::Validation("build must be a non-empty string".into()));
        }

        let title = non_blank(self.title);
        let title = title.unwrap_or_else(|| derive_title(&self.build));
        let style = non_blank(self.style);
        let style = style.unwrap_or_else(|| Style::default().to_string());
        let author = non_blank(self.author);
        let author = author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        Ok(NewBuildOrder {
            match_up: self.match_up,
            style,
            title,
            description: Some(self.build),
            author,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn derive_title(build: &str) -> String {
    build
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .chars()
        .take(MAX_DERIVED_TITLE_CHARS)
        .collect()
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpQuery {
    pub match_up: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListingParams {
    pub style: Option<String>,
    pub search: Option<String>,
}
