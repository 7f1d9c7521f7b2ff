use uuid::Uuid;

use crate::components::{escape_html, Badge};
use crate::schema::BuildOrder;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Summary shown for one build on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCard {
    pub id: Uuid,
    pub title: String,
    pub preview: String,
    pub badge: Badge,
    pub author: String,
}

impl BuildCard {
    pub fn href(&self) -> String {
        build_href(self.id)
    }

    pub fn render(&self) -> String {
        format!(
            concat!(
                r#"<div class="max-w-sm rounded-lg border border-gray-200 bg-white p-6 shadow-md">"#,
                r#"<h5 class="mb-2 text-2xl font-bold tracking-tight text-gray-900">{title}</h5>"#,
                r#"<p class="mb-3 font-normal text-gray-700">{preview}</p>"#,
                r#"<p class="mb-3 font-normal text-gray-700"><b>Style:</b> {badge}</p>"#,
                r#"<p class="mb-3 font-normal text-gray-700">Created by {author}</p>"#,
                r#"<a href="{href}" class="inline-flex items-center rounded-lg bg-blue-700 px-3 py-2 text-sm font-medium text-white">View Build</a>"#,
                "</div>"
            ),
            title = escape_html(&self.title),
            preview = escape_html(&self.preview),
            badge = self.badge.render(),
            author = escape_html(&self.author),
            href = self.href(),
        )
    }
}

impl From<&BuildOrder> for BuildCard {
    fn from(build: &BuildOrder) -> Self {
        Self {
            id: build.id,
            title: build.title.clone(),
            preview: truncate_description(build.description.as_deref()),
            badge: Badge::for_style(&build.style),
            author: build.author.clone(),
        }
    }
}

pub fn build_href(id: Uuid) -> String {
    format!("/builds/{}", id)
}

/// First hundred characters plus an ellipsis, which is appended even when
/// nothing was cut. A missing description is just the ellipsis.
pub fn truncate_description(description: Option<&str>) -> String {
    let mut preview: String = description
        .unwrap_or_default()
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();
    preview.push_str(ELLIPSIS);
    preview
}
