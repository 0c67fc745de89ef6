//! Small navigation helpers over the parsed markup tree.
//!
//! Every helper degrades to "nothing found" rather than failing: the field
//! strategy chains in [`super::fields`] treat any `None`/empty result as a
//! strategy miss and move on.

use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector, treating a parse failure as "matches nothing".
/// The selectors used by the field extractors are fixed strings, so this
/// only fires if one of them is broken at compile time of the chain itself.
pub(crate) fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// First element in document order matching `css`.
pub(crate) fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    doc.select(&sel).next()
}

/// All elements in document order matching `css`.
pub(crate) fn all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => doc.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// First descendant of `el` matching `css`.
pub(crate) fn first_within<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    el.select(&sel).next()
}

/// The visible text fragments of `el`, each trimmed, empties dropped, in
/// document order.
pub(crate) fn text_fragments(el: ElementRef<'_>) -> Vec<String> {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Visible text of `el` with fragments concatenated directly (no separator),
/// trimmed as a whole. Suitable for short leaf nodes such as titles and
/// prices.
pub(crate) fn compact_text(el: ElementRef<'_>) -> String {
    text_fragments(el).concat().trim().to_string()
}

/// Visible text of `el` with a single space at every fragment boundary, so
/// words from adjacent nodes never run together.
pub(crate) fn spaced_text(el: ElementRef<'_>) -> String {
    text_fragments(el).join(" ")
}

/// `src` attribute of an image element, empties filtered out.
pub(crate) fn img_src(el: ElementRef<'_>) -> Option<String> {
    el.value()
        .attr("src")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Whether `el` holds only text children (no nested elements). Mirrors the
/// "single string node" matching used when hunting for label-like spans.
pub(crate) fn is_leaf_text(el: ElementRef<'_>) -> bool {
    el.children().all(|child| child.value().is_text())
}
