//! Scroll-triggered reveal state for page sections.
//!
//! Sections render their entrance through CSS transitions keyed on a
//! `revealed` class; this module only decides when that class is on.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal the first time the section shows up, then stay.
    Once,
    /// Play on enter, reverse only when scrolled back above the trigger.
    Reversible,
    /// Follow intersection exactly.
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealTrigger {
    /// Section top crosses 80% of the viewport height.
    pub const SECTION: RevealTrigger = RevealTrigger { threshold: 0.0, root_margin: "0px 0px -20% 0px" };
    /// Footer top crosses 90% of the viewport height.
    pub const FOOTER: RevealTrigger = RevealTrigger { threshold: 0.0, root_margin: "0px 0px -10% 0px" };
    /// 30% of the section on screen.
    pub const TEAM: RevealTrigger = RevealTrigger { threshold: 0.3, root_margin: "0px" };
}

/// Next reveal flag. `top` is the element's bounding top in viewport px; a
/// positive value on exit means it left through the bottom.
pub fn next_reveal(mode: RevealMode, revealed: bool, intersecting: bool, top: f64) -> bool {
    if intersecting {
        return true;
    }
    match mode {
        RevealMode::Once => revealed,
        RevealMode::Reversible => revealed && top <= 0.0,
        RevealMode::Toggle => false,
    }
}

/// CSS class list for a revealable block.
pub fn reveal_class(base: &'static str, revealed: bool) -> Classes {
    classes!(base, "reveal", revealed.then_some("revealed"))
}

/// Inline stagger for the n-th child of a revealed block.
pub fn stagger_style(index: usize, step_secs: f64, base_secs: f64) -> String {
    format!("transition-delay: {:.2}s;", base_secs + index as f64 * step_secs)
}

/// Watch `node` and report its reveal flag.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger, mode: RevealMode) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut cleanup: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let mut current = false;
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, _observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                // isIntersecting stays true below the threshold ratio
                                let intersecting = entry.is_intersecting()
                                    && entry.intersection_ratio() >= trigger.threshold;
                                let top = entry.bounding_client_rect().top();
                                current = next_reveal(mode, current, intersecting, top);
                                revealed.set(current);
                            }
                        },
                    );

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(trigger.threshold));
                    init.set_root_margin(trigger.root_margin);

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Some((observer, callback));
                        }
                        Err(e) => {
                            gloo_console::error!("IntersectionObserver unavailable:", e);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = cleanup {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_always_reveals() {
        for mode in [RevealMode::Once, RevealMode::Reversible, RevealMode::Toggle] {
            assert!(next_reveal(mode, false, true, 400.0));
        }
    }

    #[test]
    fn once_never_hides() {
        assert!(next_reveal(RevealMode::Once, true, false, 900.0));
        assert!(!next_reveal(RevealMode::Once, false, false, 900.0));
    }

    #[test]
    fn reversible_hides_only_when_leaving_through_bottom() {
        // scrolled back up, section is below the trigger line
        assert!(!next_reveal(RevealMode::Reversible, true, false, 850.0));
        // scrolled past, section is above the viewport
        assert!(next_reveal(RevealMode::Reversible, true, false, -1200.0));
        assert!(!next_reveal(RevealMode::Reversible, false, false, -1200.0));
    }

    #[test]
    fn toggle_follows_intersection() {
        assert!(!next_reveal(RevealMode::Toggle, true, false, -10.0));
        assert!(!next_reveal(RevealMode::Toggle, true, false, 10.0));
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_style(0, 0.1, 0.4), "transition-delay: 0.40s;");
        assert_eq!(stagger_style(3, 0.1, 0.4), "transition-delay: 0.70s;");
    }
}
