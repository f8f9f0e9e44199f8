// src/core/html.rs
//! DOM helpers on top of `scraper`.
//!
//! CSS selectors cover "find anywhere" queries. Some pages are only stable
//! along an exact child chain (`a > div > div.details`), and some values are
//! the element's *own* text nodes rather than all descendant text; `Step`,
//! `walk` and `own_text` cover those.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

/// All descendant text, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Direct text-node children, in document order.
pub fn own_text<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .collect()
}

pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// The `n`th `<table>` of the document.
pub fn nth_table(doc: &Html, n: usize) -> Result<ElementRef<'_>> {
    let sel = selector("table")?;
    doc.select(&sel)
        .nth(n)
        .ok_or_else(|| ScrapeError::structure(format!("table #{n} not found")))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassRule {
    Any,
    /// Whole `class` attribute equals the value.
    Exact(&'static str),
    /// `class` attribute contains the value as a substring.
    Contains(&'static str),
}

/// One child-axis step: tag name plus a rule on the `class` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub tag: &'static str,
    pub class: ClassRule,
}

impl Step {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: ClassRule::Any }
    }

    pub const fn class_is(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class: ClassRule::Exact(class) }
    }

    pub const fn class_has(tag: &'static str, fragment: &'static str) -> Self {
        Self { tag, class: ClassRule::Contains(fragment) }
    }

    pub fn matches(&self, el: ElementRef<'_>) -> bool {
        if el.value().name() != self.tag {
            return false;
        }
        let class = el.value().attr("class");
        match self.class {
            ClassRule::Any => true,
            ClassRule::Exact(c) => class == Some(c),
            ClassRule::Contains(c) => class.is_some_and(|v| v.contains(c)),
        }
    }
}

/// Follow `path` from `from` along the child axis. Matches come back in
/// document order.
pub fn walk<'a>(from: ElementRef<'a>, path: &[Step]) -> Vec<ElementRef<'a>> {
    let mut frontier = vec![from];
    for &step in path {
        frontier = frontier
            .into_iter()
            .flat_map(|el| child_elements(el).filter(move |c| step.matches(*c)))
            .collect();
        if frontier.is_empty() {
            break;
        }
    }
    frontier
}

/// Own text nodes of every element at the end of `path`, flattened.
pub fn walk_text<'a>(from: ElementRef<'a>, path: &[Step]) -> Vec<&'a str> {
    walk(from, path).into_iter().flat_map(own_text).collect()
}
