/// A section counts as current once the viewport top is this close to it.
pub const SECTION_LEAD_PX: f64 = 200.0;

pub const ACTIVE_LINK_COLOR: &str = "#00f0ff";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset<'a> {
    pub id: &'a str,
    pub top: f64,
}

/// Picks the last section, in document order, whose top is within reach.
pub fn current_section<'a>(scroll_y: f64, sections: &[SectionOffset<'a>]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - SECTION_LEAD_PX)
        .last()
        .map(|section| section.id)
}

/// Inline color for a nav link; empty means the stylesheet default.
pub fn link_color(href: &str, current: Option<&str>) -> &'static str {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(current)) if target == current => ACTIVE_LINK_COLOR,
        _ => "",
    }
}
