use serde::Deserialize;

use crate::components::{escape_html, Form, Input, Label};
use crate::schema::{BuildOrder, Style};

use super::card::BuildCard;
use super::filter::BuildFilter;
use super::matchup::derive_match_up;
use super::query::{BuildQuery, FetchRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    pub race_name: String,
    pub opponent_race: String,
}

impl RouteParams {
    pub fn new(race_name: impl Into<String>, opponent_race: impl Into<String>) -> Self {
        Self {
            race_name: race_name.into(),
            opponent_race: opponent_race.into(),
        }
    }

    pub fn match_up(&self) -> String {
        derive_match_up(&self.race_name, &self.opponent_race)
    }
}

/// State behind the "<race> vs <opponent>" listing.
///
/// Route parameters and the router readiness flag are passed in explicitly;
/// the page turns a rising readiness flag into exactly one fetch request.
#[derive(Debug)]
pub struct ListingPage {
    params: RouteParams,
    selected_style: Style,
    search: String,
    query: BuildQuery,
}

impl ListingPage {
    pub fn new(params: RouteParams) -> Self {
        let query = BuildQuery::new(params.match_up());
        Self {
            params,
            selected_style: Style::ALL[0],
            search: String::new(),
            query,
        }
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn heading(&self) -> String {
        let params = &self.params;
        format!("{} vs {}", params.race_name, params.opponent_race)
    }

    pub fn query(&self) -> &BuildQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut BuildQuery {
        &mut self.query
    }

    pub fn set_router_ready(&mut self, ready: bool) -> Option<FetchRequest> {
        self.query.set_ready(ready)
    }

    /// Route changed underneath the page. The router is not ready again until
    /// it says so; outstanding requests are left to land.
    pub fn navigate(&mut self, params: RouteParams) {
        self.query.set_match_up(params.match_up());
        self.query.set_ready(false);
        self.params = params;
    }

    pub fn selected_style(&self) -> Style {
        self.selected_style
    }

    pub fn select_style(&mut self, style: Style) {
        self.selected_style = style;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn filter(&self) -> BuildFilter {
        BuildFilter::new(self.selected_style, self.search.clone())
    }

    pub fn visible_builds(&self) -> Vec<&BuildOrder> {
        self.filter().apply(self.query.data())
    }

    pub fn cards(&self) -> Vec<BuildCard> {
        self.visible_builds()
            .into_iter()
            .map(BuildCard::from)
            .collect()
    }

    pub fn render(&self) -> String {
        let heading = escape_html(&self.heading());

        let search = format!(
            "<fieldset>{}{}</fieldset>",
            Label {
                html_for: "search",
                text: "Filter (by name, author, or description)",
            }
            .render(),
            Input {
                id: "search",
                name: "search",
                value: &self.search,
            }
            .render()
        );

        let mut radios = String::new();
        for style in Style::ALL {
            let checked = if style == self.selected_style {
                " checked"
            } else {
                ""
            };
            let slug = style.as_str().replace(' ', "-");
            radios.push_str(&format!(
                concat!(
                    r#"<li class="w-full border-b border-gray-200"><div class="flex items-center pl-3">"#,
                    r#"<input id="build-radio-{slug}" type="radio" value="{value}" name="style"{checked}>"#,
                    r#"<label for="build-radio-{slug}" class="ml-2 w-full py-3 text-sm font-medium">{value}</label>"#,
                    "</div></li>"
                ),
                slug = slug,
                value = style.as_str(),
                checked = checked,
            ));
        }
        let styles = format!(
            r#"<fieldset class="w-3/4">{}<ul class="w-full items-center rounded-lg border border-gray-200 text-sm font-medium">{}</ul></fieldset>"#,
            Label {
                html_for: "style",
                text: "Build Type",
            }
            .render(),
            radios
        );

        let form = Form {
            class_name: "w-1/3",
            method: "get",
            children: vec![
                search,
                styles,
                r#"<button type="submit">Filter</button>"#.to_string(),
            ],
        }
        .render();

        let cards: String = self.cards().iter().map(BuildCard::render).collect();

        format!(
            concat!(
                "<!DOCTYPE html><html><head><title>{heading}</title></head><body>",
                r#"<main class="container m-auto flex flex-col gap-8 pt-12">"#,
                r#"<h1 class="text-4xl text-white">{heading}</h1>"#,
                "{form}",
                r#"<section class="flex flex-col gap-4"><h2 class="text-2xl text-white">Matching Builds</h2>"#,
                r#"<section class="grid grid-cols-3 gap-4">{cards}</section></section>"#,
                "</main></body></html>"
            ),
            heading = heading,
            form = form,
            cards = cards,
        )
    }
}
