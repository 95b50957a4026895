//! Homepage assembler.
//!
//! Pure function from site metadata and the learning collection to a
//! document tree: three fixed sections, the featured material cards, and a
//! trailing link to the full catalog.

use beranda_content::{LearningMaterial, SiteMetadata};

use crate::dom::{Element, Node};
use crate::page::Page;
use crate::ui::{
    arrow_right_icon, card_grid, cta_button, learning_card, paragraph, paragraph_nodes, section,
    CtaStyle, SectionImage, SectionStyle, GRAY_08, LIGHT_BLUE,
};

const MEETUP_URL: &str = "https://www.meetup.com/reactindonesia/";
const MERCHANDISE_URL: &str = "https://www.rumahkomunitas.com/react-indonesia";
const LEARNING_PATH: &str = "/learning";

/// Assemble the homepage.
///
/// Materials keep their input order; every one flagged `featured` renders
/// as a card, however many there are. An empty collection renders an empty
/// grid with no placeholder.
pub fn home_page(site: &SiteMetadata, materials: &[LearningMaterial]) -> Page {
    let featured: Vec<&LearningMaterial> = materials.iter().filter(|m| m.featured).collect();

    let body = Element::new("main")
        .class("page")
        .child(welcome_section())
        .child(merchandise_section())
        .child(learning_section(&featured));

    Page {
        title: format!("{} · {}", site.title, site.tagline),
        description: site.description.clone(),
        body: body.into(),
    }
}

fn welcome_section() -> Node {
    let style = SectionStyle {
        heading_color: Some(LIGHT_BLUE),
        ..Default::default()
    };

    section(
        "Selamat Datang",
        "Komunitas Developer ReactJS Indonesia",
        style,
        vec![
            paragraph(
                "ReactJS ID adalah komunitas para developer React dan React Native. Kami \
                 mengadakan ajang meetup setiap bulannya, dimana para developer React bertukar \
                 informasi mengenai React dan ekosistemnya.",
            ),
            cta_button("Bergabung", MEETUP_URL, CtaStyle::Light),
        ],
    )
}

fn merchandise_section() -> Node {
    let style = SectionStyle {
        align_right: true,
        background: Some("#f2f2f2"),
        text_color: Some(GRAY_08),
        heading_color: Some(GRAY_08),
        image: Some(SectionImage {
            src: "/images/rk-tshirt.jpg",
            alt: "ReactJS ID T-shirt",
        }),
        ..Default::default()
    };

    section(
        "Kabar Gembira!",
        "Merchandise Resmi ReactJS Indonesia",
        style,
        vec![
            paragraph_nodes(vec![
                Node::text(
                    "Merchandise resmi ReactJS Indonesia kini tersedia berkat kerjasama oleh \
                     Rumah Komunitas. Klik link di bawah untuk mendapatkan ",
                ),
                Element::new("em").text("T-shirt").into(),
                Node::text(" dan jaket ReactJS Indonesia."),
            ]),
            cta_button("Dapatkan Segera", MERCHANDISE_URL, CtaStyle::Dark),
        ],
    )
}

fn learning_section(featured: &[&LearningMaterial]) -> Node {
    let style = SectionStyle {
        centered: true,
        full_width: true,
        background: Some(LIGHT_BLUE),
        text_color: Some(GRAY_08),
        heading_color: Some(GRAY_08),
        ..Default::default()
    };

    let cards = featured.iter().map(|m| learning_card(m));

    section(
        "Ingin Belajar React?",
        "Materi Pembelajaran",
        style,
        vec![
            paragraph(
                "Beberapa konsep React memang terlihat janggal, tapi diluar itu React sangat \
                 mudah untuk dipelajari dan dipahami, baik mereka yang sudah mahir dalam \
                 JavaScript modern ataupun yang baru saja memulai. Cobalah memulai dari salah \
                 satu materi di bawah.",
            ),
            card_grid(cards),
            learning_cta(),
        ],
    )
}

fn learning_cta() -> Node {
    Element::new("div")
        .class("learning-cta")
        .child(
            Element::new("a")
                .class("learning-cta-link")
                .attr("href", LEARNING_PATH)
                .child(Element::new("span").text("Lihat Selengkapnya"))
                .child(
                    Element::new("span")
                        .class("icon")
                        .child(arrow_right_icon(GRAY_08)),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render;
    use pretty_assertions::assert_eq;

    fn material(id: &str, featured: bool) -> LearningMaterial {
        LearningMaterial {
            id: id.to_string(),
            kind: "Article".to_string(),
            title: format!("Materi {}", id),
            description: "Deskripsi".to_string(),
            url: format!("/materi/{}", id),
            featured,
        }
    }

    fn site() -> SiteMetadata {
        SiteMetadata {
            title: "ReactJS ID".to_string(),
            tagline: "Komunitas".to_string(),
            description: "Komunitas developer React Indonesia".to_string(),
        }
    }

    fn card_keys(html: &str) -> Vec<&str> {
        html.match_indices("data-key=\"")
            .map(|(i, _)| {
                let rest = &html[i + 10..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn title_concatenates_site_title_and_tagline() {
        let page = home_page(&site(), &[]);

        assert_eq!(page.title, "ReactJS ID · Komunitas");
    }

    #[test]
    fn renders_only_featured_materials_in_order() {
        let materials = vec![
            material("1", true),
            material("2", false),
            material("3", true),
            material("4", true),
            material("5", false),
        ];

        let page = home_page(&site(), &materials);
        let html = render(&page.body);

        assert_eq!(card_keys(&html), vec!["1", "3", "4"]);
    }

    #[test]
    fn card_count_matches_featured_count() {
        let materials = vec![
            material("a", true),
            material("b", true),
            material("c", false),
        ];

        let page = home_page(&site(), &materials);
        let html = render(&page.body);

        assert_eq!(card_keys(&html).len(), 2);
    }

    #[test]
    fn empty_collection_renders_empty_grid() {
        let page = home_page(&site(), &[]);
        let html = render(&page.body);

        assert!(html.contains(r#"<div class="card-grid"></div>"#));
    }

    #[test]
    fn featured_list_has_no_upper_bound() {
        let materials: Vec<LearningMaterial> =
            (0..50).map(|i| material(&i.to_string(), true)).collect();

        let page = home_page(&site(), &materials);
        let html = render(&page.body);

        assert_eq!(card_keys(&html).len(), 50);
    }

    #[test]
    fn duplicate_ids_render_duplicate_keys() {
        let materials = vec![material("dup", true), material("dup", true)];

        let page = home_page(&site(), &materials);
        let html = render(&page.body);

        assert_eq!(card_keys(&html), vec!["dup", "dup"]);
    }

    #[test]
    fn missing_metadata_renders_with_blank_segments() {
        let page = home_page(&SiteMetadata::default(), &[]);

        assert_eq!(page.title, " · ");
    }

    #[test]
    fn carries_fixed_sections_and_trailing_cta() {
        let page = home_page(&site(), &[]);
        let html = render(&page.body);

        assert!(html.contains("Selamat Datang"));
        assert!(html.contains("Komunitas Developer ReactJS Indonesia"));
        assert!(html.contains("Kabar Gembira!"));
        assert!(html.contains("Merchandise Resmi ReactJS Indonesia"));
        assert!(html.contains("Ingin Belajar React?"));
        assert!(html.contains(r#"href="https://www.meetup.com/reactindonesia/""#));
        assert!(html.contains(r#"href="/learning""#));
        assert!(html.contains("Lihat Selengkapnya"));
    }

    #[test]
    fn end_to_end_scenario() {
        let materials = vec![
            LearningMaterial {
                id: "1".to_string(),
                kind: "Article".to_string(),
                title: "Intro".to_string(),
                description: "Pengenalan React".to_string(),
                url: "/a".to_string(),
                featured: true,
            },
            LearningMaterial {
                id: "2".to_string(),
                kind: "Video".to_string(),
                title: "Hooks".to_string(),
                description: "Belajar hooks".to_string(),
                url: "/b".to_string(),
                featured: false,
            },
        ];

        let page = home_page(&site(), &materials);
        let html = render(&page.body);

        assert_eq!(page.title, "ReactJS ID · Komunitas");
        assert_eq!(card_keys(&html), vec!["1"]);
        assert!(html.contains("Intro"));
        assert!(!html.contains("Hooks"));
    }
}
