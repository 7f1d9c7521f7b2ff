//! Stateless markup primitives used by the listing and detail pages.

use crate::schema::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Danger,
    Success,
    Warning,
    Primary,
}

impl Variant {
    /// Badge colour for a style label. Anything outside the style set is `Primary`.
    pub fn for_style(style: &str) -> Variant {
        match Style::try_from(style) {
            Ok(Style::Cheese) => Variant::Warning,
            Ok(Style::Macro) => Variant::Success,
            Ok(Style::TimingAttack) => Variant::Primary,
            Ok(Style::AllIn) => Variant::Danger,
            Err(_) => Variant::Primary,
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            Variant::Danger => "bg-red-100 text-red-800",
            Variant::Success => "bg-green-100 text-green-800",
            Variant::Warning => "bg-yellow-100 text-yellow-800",
            Variant::Primary => "bg-blue-100 text-blue-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub variant: Variant,
}

impl Badge {
    pub fn new(text: impl Into<String>, variant: Variant) -> Self {
        Self {
            text: text.into(),
            variant,
        }
    }

    pub fn for_style(style: &str) -> Self {
        Self::new(style, Variant::for_style(style))
    }

    pub fn render(&self) -> String {
        format!(
            r#"<span class="mr-2 rounded px-2.5 py-0.5 text-xs font-medium {}">{}</span>"#,
            self.variant.classes(),
            escape_html(&self.text)
        )
    }
}

pub struct Label<'a> {
    pub html_for: &'a str,
    pub text: &'a str,
}

impl Label<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"<label class="mb-2 block text-sm font-medium text-gray-900 dark:text-white" for="{}">{}</label>"#,
            escape_html(self.html_for),
            escape_html(self.text)
        )
    }
}

pub struct Input<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub value: &'a str,
}

impl Input<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"<input class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900" id="{}" name="{}" value="{}">"#,
            escape_html(self.id),
            escape_html(self.name),
            escape_html(self.value)
        )
    }
}

/// Form container; children are already rendered markup.
pub struct Form<'a> {
    pub class_name: &'a str,
    pub method: &'a str,
    pub children: Vec<String>,
}

impl Form<'_> {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let class = if self.class_name.is_empty() {
            "flex flex-col gap-8".to_string()
        } else {
            format!("flex flex-col gap-8 {}", self.class_name)
        };
        out.push_str(&format!(
            r#"<form class="{}" method="{}">"#,
            escape_html(&class),
            escape_html(self.method)
        ));
        for child in &self.children {
            out.push_str(child);
        }
        out.push_str("</form>");
        out
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_map_to_their_variant() {
        assert_eq!(Variant::for_style("cheese"), Variant::Warning);
        assert_eq!(Variant::for_style("macro"), Variant::Success);
        assert_eq!(Variant::for_style("timing attack"), Variant::Primary);
        assert_eq!(Variant::for_style("all in"), Variant::Danger);
    }

    #[test]
    fn unknown_styles_fall_back_to_primary() {
        for style in ["", "Macro", "proxy", "all-in", "cheese "] {
            assert_eq!(
                Variant::for_style(style),
                Variant::Primary,
                "style {:?}",
                style
            );
        }
    }

    #[test]
    fn badge_escapes_its_text() {
        let html = Badge::for_style("<b>proxy</b>").render();
        assert!(html.contains("bg-blue-100 text-blue-800"));
        assert!(html.contains("&lt;b&gt;proxy&lt;/b&gt;"));
    }

    #[test]
    fn form_wraps_children() {
        let label = Label {
            html_for: "search",
            text: "Filter",
        }
        .render();
        let html = Form {
            class_name: "w-1/3",
            method: "get",
            children: vec![label],
        }
        .render();

        assert!(html.starts_with(r#"<form class="flex flex-col gap-8 w-1/3" method="get">"#));
        assert!(html.contains(r#"for="search""#));
        assert!(html.ends_with("</form>"));
    }
}
