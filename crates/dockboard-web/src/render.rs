//! HTML rendering of the dashboard.

use dockboard_core::{ContainerRow, Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

use crate::Dashboard;

const PAGE_TEMPLATE_NAME: &str = "page";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Running Containers</title>
    <style>
      body { font-family: ui-sans-serif, system-ui, sans-serif; margin: 0; color: #0f172a; background: #f8fafc; }
      main { max-width: 72rem; margin: 0 auto; padding: 1.5rem; }
      h1 { font-size: 1.5rem; font-weight: 600; margin: 0 0 1.5rem; }
      .advisory { border: 1px solid #fca5a5; background: #fef2f2; color: #b91c1c; border-radius: .5rem; padding: 1rem; font-size: .875rem; }
      .muted { color: #64748b; }
      .grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
      .card { display: block; height: 100%; border: 1px solid #e2e8f0; border-radius: .5rem; background: #fff; padding: 1rem; color: inherit; text-decoration: none; }
      .card:hover { background: #f1f5f9; }
      .card.inert { pointer-events: none; opacity: .8; }
      .title { display: flex; justify-content: space-between; gap: .5rem; font-weight: 600; }
      .truncate { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
      .badges { display: flex; flex-wrap: wrap; align-items: center; gap: .5rem; margin-top: .75rem; font-size: .875rem; }
      .status { border: 1px solid #e2e8f0; border-radius: 9999px; padding: .125rem .5rem; color: #64748b; }
      .port { border-radius: .25rem; background: #f1f5f9; padding: .125rem .5rem; font-size: .75rem; color: #64748b; }
    </style>
  </head>
  <body>
    <main>
      <h1>Running Containers</h1>
      {{#if error}}
      <div class="advisory">{{error}}</div>
      {{else}}
      {{#if has_cards}}
      <section class="grid">
        {{#each cards}}
        <a class="card{{#unless href}} inert{{/unless}}" href="{{#if href}}{{href}}{{else}}#{{/if}}"{{#if href}} target="_blank"{{/if}} rel="noreferrer noopener" data-id="{{id}}">
          <div class="title"><span class="truncate">{{name}}</span>{{#if href}}<span aria-label="opens in a new tab">&#8599;</span>{{/if}}</div>
          <div class="muted truncate">{{image}}</div>
          <div class="badges">
            <span class="status">{{status}}</span>
            {{#each ports}}
            <span class="port">{{this}}</span>
            {{else}}
            <span class="muted">No published ports</span>
            {{/each}}
          </div>
        </a>
        {{/each}}
      </section>
      {{else}}
      <p class="muted">No running containers found.</p>
      {{/if}}
      {{/if}}
    </main>
  </body>
</html>
"#;

/// Template input for the whole page.
#[derive(Debug, Serialize)]
struct PageView<'a> {
    error: Option<&'a str>,
    has_cards: bool,
    cards: Vec<CardView<'a>>,
}

/// Template input for one container card.
#[derive(Debug, Serialize)]
struct CardView<'a> {
    id: &'a str,
    name: &'a str,
    image: &'a str,
    status: &'a str,
    href: Option<&'a str>,
    ports: Vec<String>,
}

impl<'a> From<&'a ContainerRow> for CardView<'a> {
    fn from(row: &'a ContainerRow) -> Self {
        Self {
            id: &row.id,
            name: &row.display_name,
            image: &row.image,
            status: &row.status_text,
            href: row.reachable_url.as_deref(),
            ports: row.ports.iter().map(dockboard_core::PortBinding::label).collect(),
        }
    }
}

/// Renders [`Dashboard`] data to an HTML document.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Compile the page template.
    ///
    /// # Errors
    /// Returns [`Error::Render`] if the template does not parse.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| Error::Render(e.to_string()))?;
        Ok(Self { registry })
    }

    /// Render the page for `dashboard`.
    ///
    /// # Errors
    /// Returns [`Error::Render`] if rendering fails.
    pub fn render(&self, dashboard: &Dashboard) -> Result<String> {
        let cards: Vec<CardView<'_>> = dashboard.rows.iter().map(CardView::from).collect();
        let view = PageView {
            error: dashboard.error,
            has_cards: !cards.is_empty(),
            cards,
        };

        self.registry
            .render(PAGE_TEMPLATE_NAME, &view)
            .map_err(|e| Error::Render(e.to_string()))
    }
}
