//! Learning catalog assembler: every material, featured or not.

use beranda_content::{LearningMaterial, SiteMetadata};

use crate::dom::Element;
use crate::page::Page;
use crate::ui::{card_grid, learning_card, paragraph, section, SectionStyle, GRAY_08};

/// Assemble the `/learning` catalog page.
pub fn learning_page(site: &SiteMetadata, materials: &[LearningMaterial]) -> Page {
    let style = SectionStyle {
        full_width: true,
        heading_color: Some(GRAY_08),
        ..Default::default()
    };

    let cards = materials.iter().map(learning_card);

    let body = Element::new("main").class("page").child(section(
        "Materi Pembelajaran",
        "Belajar React",
        style,
        vec![
            paragraph(
                "Kumpulan materi pembelajaran React dan React Native yang dikurasi oleh \
                 komunitas, dari pengenalan dasar sampai topik lanjutan.",
            ),
            card_grid(cards),
        ],
    ));

    Page {
        title: format!("Materi Pembelajaran · {}", site.title),
        description: site.description.clone(),
        body: body.into(),
    }
}
