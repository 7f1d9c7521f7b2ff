use crate::schema::{BuildOrder, Style};

/// Client-side narrowing of an already fetched list: the selected style
/// first, then a case-insensitive substring search over author, title and
/// description. Relative order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFilter {
    pub style: Style,
    pub search: String,
}

impl BuildFilter {
    pub fn new(style: Style, search: impl Into<String>) -> Self {
        Self {
            style,
            search: search.into(),
        }
    }

    pub fn apply<'a>(&self, builds: &'a [BuildOrder]) -> Vec<&'a BuildOrder> {
        let needle = self.needle();
        builds
            .iter()
            .filter(|build| self.matches_style(build))
            .filter(|build| matches_text(build, &needle))
            .collect()
    }

    pub fn matches_style(&self, build: &BuildOrder) -> bool {
        build.style == self.style.as_str()
    }

    pub fn matches_text(&self, build: &BuildOrder) -> bool {
        matches_text(build, &self.needle())
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

fn matches_text(build: &BuildOrder, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        build.author.as_str(),
        build.title.as_str(),
        build.description.as_deref().unwrap_or_default(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
