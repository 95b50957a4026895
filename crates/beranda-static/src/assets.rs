//! Asset pipeline for the site stylesheet.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const SITE_CSS: &str = r#"/* beranda site theme */

:root {
  --light-blue: #61dafb;
  --gray-08: #1f2933;
  --section-max-width: 960px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--gray-08);
  color: #ffffff;
  line-height: 1.6;
}

/* Sections */
.home-section {
  display: flex;
  align-items: center;
  gap: 3rem;
  padding: 4rem 2rem;
}

.home-section.align-right {
  flex-direction: row-reverse;
}

.home-section.centered .section-body {
  text-align: center;
  margin: 0 auto;
}

.home-section.full-width .section-body {
  max-width: none;
  width: 100%;
}

.section-body {
  max-width: var(--section-max-width);
  margin: 0 auto;
}

.section-heading {
  display: block;
  font-size: 0.875rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 0.5rem;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-image {
  max-width: 40%;
  border-radius: 0.5rem;
}

.paragraph {
  margin-bottom: 1.5rem;
}

/* Call to action */
.cta {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  font-weight: 600;
  text-decoration: none;
  border-radius: 0.375rem;
  transition: opacity 0.15s;
}

.cta:hover {
  opacity: 0.85;
}

.cta-light {
  background: var(--light-blue);
  color: var(--gray-08);
}

.cta-dark {
  background: var(--gray-08);
  color: #ffffff;
}

.cta .icon svg {
  display: block;
}

/* Learning cards */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
  margin-bottom: 1rem;
  text-align: left;
}

.learning-card {
  background: #ffffff;
  color: var(--gray-08);
  border-radius: 0.5rem;
  overflow: hidden;
}

.learning-card a {
  display: block;
  padding: 1.5rem;
  color: inherit;
  text-decoration: none;
  height: 100%;
}

.card-heading {
  display: block;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: #7b8794;
  margin-bottom: 0.5rem;
}

.card-title {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.learning-cta {
  margin-top: 64px;
}

.learning-cta-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 600;
  color: var(--gray-08);
  text-decoration: none;
}

.learning-cta-link:hover {
  text-decoration: underline;
}

/* Responsive */
@media (max-width: 768px) {
  .home-section,
  .home-section.align-right {
    flex-direction: column;
    padding: 3rem 1.5rem;
  }

  .section-image {
    max-width: 100%;
  }
}
"#;
