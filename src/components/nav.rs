use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SITE_NAME;
use crate::effects::anchor::AnchorLink;
use crate::effects::highlight::{current_section, link_color, SectionOffset};
use crate::effects::navbar::NavbarMode;

/// A page section the navbar tracks. `label` is `None` for sections that
/// take part in highlighting but get no link of their own.
#[derive(Clone, PartialEq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: Option<&'static str>,
    pub node: NodeRef,
}

impl NavSection {
    pub fn new(id: &'static str, label: Option<&'static str>) -> Self {
        Self { id, label, node: NodeRef::default() }
    }

    fn offset(&self) -> Option<SectionOffset<'static>> {
        let element = self.node.cast::<HtmlElement>()?;
        Some(SectionOffset { id: self.id, top: f64::from(element.offset_top()) })
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sections: Vec<NavSection>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    // Re-renders on every window scroll event.
    let (_, scroll_y) = use_window_scroll();

    let mode = NavbarMode::from_scroll(scroll_y);
    let offsets: Vec<SectionOffset> = props.sections.iter().filter_map(NavSection::offset).collect();
    let current = current_section(scroll_y, &offsets);

    {
        use_effect_with_deps(
            move |(mode, current)| {
                debug!("Navbar {:?}, current section {:?}", mode, current);
                || ()
            },
            (mode, current),
        );
    }

    html! {
        <nav class="navbar" style={mode.style().to_css()}>
            <div class="nav-container">
                <AnchorLink href="#home" class="logo">{SITE_NAME}</AnchorLink>
                <ul class="nav-links">
                    { for props.sections.iter().filter_map(|section| {
                        let label = section.label?;
                        let href = format!("#{}", section.id);
                        let color = link_color(&href, current);
                        let style = (!color.is_empty()).then(|| AttrValue::from(format!("color: {};", color)));
                        Some(html! {
                            <li key={section.id}>
                                <AnchorLink href={href} {style}>{label}</AnchorLink>
                            </li>
                        })
                    }) }
                </ul>
            </div>
        </nav>
    }
}
