use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// The element id an in-page link points at, if it names one.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the target of `href` to the top of the viewport.
/// Returns false when there is nothing to scroll to.
pub fn scroll_to_fragment(document: &Document, href: &str) -> bool {
    let Some(target) = fragment_id(href).and_then(|id| document.get_element_by_id(id)) else {
        debug!("No scroll target for {}", href);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Click handler for a `#fragment` link. Default navigation is always
/// suppressed, even when the fragment resolves to nothing.
pub fn anchor_click(href: AttrValue) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let document = e
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .and_then(|node| node.owner_document());
        if let Some(document) = document {
            scroll_to_fragment(&document, &href);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = anchor_click(props.href.clone());

    html! {
        <a href={props.href.clone()} class={props.class.clone()} style={props.style.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
