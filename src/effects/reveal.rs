use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Everything on the page that fades in when scrolled into view.
pub const ANIMATED_SELECTOR: &str = ".card, .service-card, .pricing-card, .step, .why-card";

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(20px)";
const SHOWN_OPACITY: &str = "1";
const SHOWN_TRANSFORM: &str = "translateY(0)";
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Stop watching an element once it has been revealed.
    pub unobserve_after_reveal: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px",
            unobserve_after_reveal: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection report in. Returns true when this report is
    /// the one that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

struct RevealTarget {
    element: Element,
    state: RevealState,
}

/// Owns the observer and its callback. Dropping it stops all watching.
pub struct RevealAnimator {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealAnimator {
    /// Hides every animatable element under `root` and starts watching them.
    pub fn attach(root: &Element, options: RevealOptions) -> Result<Self, JsValue> {
        let found = root.query_selector_all(ANIMATED_SELECTOR)?;
        let mut targets = Vec::with_capacity(found.length() as usize);
        for index in 0..found.length() {
            let Some(element) = found.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            apply_style(&element, HIDDEN_OPACITY, HIDDEN_TRANSFORM, Some(TRANSITION))?;
            targets.push(RevealTarget { element, state: RevealState::Hidden });
        }

        let targets = Rc::new(RefCell::new(targets));
        let unobserve = options.unobserve_after_reveal;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let element = entry.target();
                let mut targets = targets.borrow_mut();
                let Some(target) = targets.iter_mut().find(|t| t.element == element) else {
                    continue;
                };
                if !target.state.observe(entry.is_intersecting()) {
                    continue;
                }
                if let Err(e) = apply_style(&element, SHOWN_OPACITY, SHOWN_TRANSFORM, None) {
                    warn!("Failed to reveal element: {:?}", e);
                }
                debug!("Revealed <{}> {}", element.tag_name().to_lowercase(), element.class_name());
                if unobserve {
                    observer.unobserve(&element);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for index in 0..found.length() {
            if let Some(element) = found.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
        debug!("Watching {} elements for reveal", found.length());

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn apply_style(
    element: &Element,
    opacity: &str,
    transform: &str,
    transition: Option<&str>,
) -> Result<(), JsValue> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = element.style();
    style.set_property("opacity", opacity)?;
    style.set_property("transform", transform)?;
    if let Some(transition) = transition {
        style.set_property("transition", transition)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);

        assert!(state.observe(true));
        assert_eq!(state, RevealState::Revealed);

        assert!(!state.observe(true));
    }

    #[test]
    fn leaving_the_viewport_does_not_hide_again() {
        let mut state = RevealState::Hidden;
        state.observe(true);
        state.observe(false);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn default_options_match_the_page_effect() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -100px 0px");
        assert!(options.unobserve_after_reveal);
    }
}
