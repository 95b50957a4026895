//! Template engine wrapping rendered page bodies in the HTML shell.

use minijinja::{context, Environment};

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Document title, already fully formed by the assembler
    pub title: String,

    /// Meta description
    pub description: String,

    /// Rendered body HTML
    pub content: String,

    /// Base URL
    pub base_url: String,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,

    /// Whether to inject the live-reload client script
    pub live_reload: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            description => &context.description,
            content => &context.content,
            base_url => &context.base_url,
            styles => &context.styles,
            live_reload => &context.live_reload,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}{% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  {{ content | safe }}
  {% if live_reload %}<script src="/__reload.js"></script>
  {% endif %}</body>
</html>"##;
