//! Product gallery and manufacturer-section image extraction.

use dealpage_core::FieldValue;
use scraper::{ElementRef, Html};

use crate::extract::dom::{all, first, img_src, selector, spaced_text};

/// Galleries with fewer images than this are assumed incomplete and are
/// topped up from the alternate-thumbnails strip.
const MIN_GALLERY_IMAGES: usize = 3;

/// Gallery chain: every image carrying the dynamic-image data attribute, in
/// document order with first-seen dedup; supplemented (not replaced) from
/// the alternate-thumbnails container whenever the primary pass found fewer
/// than [`MIN_GALLERY_IMAGES`].
pub(crate) fn amazon_product_images(doc: &Html) -> FieldValue {
    let mut images: Vec<String> = Vec::new();
    for img in all(doc, "img[data-a-dynamic-image]") {
        push_unique(&mut images, img_src(img));
    }

    if images.len() < MIN_GALLERY_IMAGES {
        if let Some(thumbs) = first(doc, "#altImages") {
            tracing::debug!(
                primary = images.len(),
                "sparse gallery, supplementing from alternate thumbnails"
            );
            for img in images_within(thumbs) {
                push_unique(&mut images, img_src(img));
            }
        }
    }

    FieldValue::from_list(images)
}

/// Manufacturer chain: images under the well-known manufacturer id, then
/// images under any section whose visible text mentions the manufacturer
/// heading. Both paths drop images with a missing or empty `src`.
pub(crate) fn manufacturer_images(doc: &Html) -> FieldValue {
    let from_id: Vec<String> = first(doc, "#manufacturer")
        .map(|el| images_within(el).into_iter().filter_map(img_src).collect())
        .unwrap_or_default();
    if !from_id.is_empty() {
        return FieldValue::from_list(from_id);
    }

    let from_heading: Vec<String> = all(doc, "div")
        .into_iter()
        .find(|el| spaced_text(*el).contains("From the manufacturer"))
        .map(|el| images_within(el).into_iter().filter_map(img_src).collect())
        .unwrap_or_default();
    FieldValue::from_list(from_heading)
}

fn images_within(el: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    match selector("img") {
        Some(sel) => el.select(&sel).collect(),
        None => Vec::new(),
    }
}

fn push_unique(images: &mut Vec<String>, src: Option<String>) {
    if let Some(src) = src {
        if !images.contains(&src) {
            images.push(src);
        }
    }
}
