//! Shared presentational primitives used by the page assemblers.

use beranda_content::LearningMaterial;

use crate::dom::{Element, Node};

/// Accent blue used for heading text on dark sections.
pub const LIGHT_BLUE: &str = "#61dafb";

/// Near-black used for text on light sections.
pub const GRAY_08: &str = "#1f2933";

/// A plain paragraph of text.
pub fn paragraph(text: impl Into<String>) -> Node {
    Element::new("p").class("paragraph").text(text).into()
}

/// A paragraph with mixed inline children.
pub fn paragraph_nodes(children: impl IntoIterator<Item = Node>) -> Node {
    Element::new("p").class("paragraph").children(children).into()
}

/// Call-to-action color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaStyle {
    /// Light text on a dark section
    Light,

    /// Dark text on a light section
    Dark,
}

/// An inline call-to-action button with a trailing arrow icon.
pub fn cta_button(label: &str, href: &str, style: CtaStyle) -> Node {
    let class = match style {
        CtaStyle::Light => "cta cta-inline cta-light",
        CtaStyle::Dark => "cta cta-inline cta-dark",
    };
    let icon_fill = match style {
        CtaStyle::Light => "#ffffff",
        CtaStyle::Dark => GRAY_08,
    };

    Element::new("a")
        .class(class)
        .attr("href", href)
        .child(Element::new("span").text(label))
        .child(
            Element::new("span")
                .class("icon")
                .child(arrow_right_icon(icon_fill)),
        )
        .into()
}

/// Right-pointing arrow icon.
pub fn arrow_right_icon(fill: &str) -> Node {
    Element::new("svg")
        .attr("viewBox", "0 0 16 16")
        .attr("width", "16")
        .attr("height", "16")
        .attr("aria-hidden", "true")
        .child(
            Element::new("path")
                .attr("fill", fill)
                .attr("d", "M1 7h10.17L6.58 2.41 8 1l7 7-7 7-1.42-1.41L11.17 9H1z"),
        )
        .into()
}

/// An image shown beside a section body.
#[derive(Debug, Clone, Copy)]
pub struct SectionImage {
    /// Image source path
    pub src: &'static str,

    /// Alt text
    pub alt: &'static str,
}

/// Layout and color options for a homepage section.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionStyle {
    /// Place the body on the right, image on the left
    pub align_right: bool,

    /// Center the body text
    pub centered: bool,

    /// Stretch the body across the full section width
    pub full_width: bool,

    /// Section background color
    pub background: Option<&'static str>,

    /// Body text color
    pub text_color: Option<&'static str>,

    /// Heading text color
    pub heading_color: Option<&'static str>,

    /// Optional side image
    pub image: Option<SectionImage>,
}

/// A homepage section: small heading, large title, arbitrary body nodes.
pub fn section(
    heading: &str,
    title: &str,
    style: SectionStyle,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    let mut class = String::from("home-section");
    if style.align_right {
        class.push_str(" align-right");
    }
    if style.centered {
        class.push_str(" centered");
    }
    if style.full_width {
        class.push_str(" full-width");
    }

    let mut inline = String::new();
    if let Some(background) = style.background {
        inline.push_str("background-color:");
        inline.push_str(background);
        inline.push(';');
    }
    if let Some(color) = style.text_color {
        inline.push_str("color:");
        inline.push_str(color);
        inline.push(';');
    }

    let mut root = Element::new("section").class(class);
    if !inline.is_empty() {
        root = root.attr("style", inline);
    }

    if let Some(image) = style.image {
        root = root.child(
            Element::new("img")
                .class("section-image")
                .attr("src", image.src)
                .attr("alt", image.alt),
        );
    }

    let mut heading_el = Element::new("span").class("section-heading");
    if let Some(color) = style.heading_color {
        heading_el = heading_el.attr("style", format!("color:{};", color));
    }
    heading_el = heading_el.text(heading);

    let body = Element::new("div")
        .class("section-body")
        .child(heading_el)
        .child(Element::new("h2").class("section-title").text(title))
        .children(children);

    root.child(body).into()
}

/// A card for one learning material, keyed by its id.
pub fn learning_card(material: &LearningMaterial) -> Node {
    Element::new("article")
        .class("learning-card")
        .attr("data-key", material.id.clone())
        .child(
            Element::new("a")
                .attr("href", material.url.clone())
                .child(
                    Element::new("span")
                        .class("card-heading")
                        .text(material.kind.clone()),
                )
                .child(
                    Element::new("h3")
                        .class("card-title")
                        .text(material.title.clone()),
                )
                .child(paragraph(material.description.clone())),
        )
        .into()
}

/// Grid wrapping a list of cards.
pub fn card_grid(cards: impl IntoIterator<Item = Node>) -> Node {
    Element::new("div").class("card-grid").children(cards).into()
}
