use gloo_timers::callback::Timeout;
use web_sys::{Element, Event, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::forms::{payload, FormError, FormFields, FormState};

/// True when an element spanning `top..bottom` (viewport coordinates) sits
/// at least `margin` px inside a viewport of height `viewport`.
pub fn enters_view(top: f64, bottom: f64, viewport: f64, margin: f64) -> bool {
    top < viewport - margin && bottom > margin
}

/// Position of `client` within `origin..origin + extent`, as a fraction.
/// A collapsed extent reads as the centre.
pub fn normalize(client: f64, origin: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        0.5
    } else {
        (client - origin) / extent
    }
}

/// Flips to true the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state_eq(|| false);

    let check = {
        let in_view = in_view.clone();
        move || {
            if *in_view {
                return;
            }
            let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) else {
                return;
            };
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            let rect = element.get_bounding_client_rect();
            if enters_view(rect.top(), rect.bottom(), viewport, config::IN_VIEW_MARGIN_PX) {
                in_view.set(true);
            }
        }
    };

    {
        // content already on screen at mount never sees a scroll event
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    *in_view
}

/// Whether the window has scrolled past `threshold` px.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    let update = {
        let scrolled = scrolled.clone();
        move || {
            if let Some(window) = web_sys::window() {
                let offset = window.scroll_y().unwrap_or_default();
                scrolled.set(offset > threshold);
            }
        }
    };

    {
        let update = update.clone();
        use_effect_with_deps(
            move |_| {
                update();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| update());

    *scrolled
}

/// Pointer position relative to `node`, each axis as a fraction of its size.
/// Starts at the top-left corner until the pointer first moves.
#[hook]
pub fn use_pointer_in(node: NodeRef) -> (f64, f64) {
    let position = use_state_eq(|| (0.0, 0.0));

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                position.set((
                    normalize(e.client_x() as f64, rect.left(), rect.width()),
                    normalize(e.client_y() as f64, rect.top(), rect.height()),
                ));
            }
        });
    }

    *position
}

pub struct FormHandle<F> {
    pub state: UseStateHandle<FormState<F>>,
    /// Validation failure from the last submit attempt, cleared on edit.
    pub error: Option<FormError>,
    pub on_input: Callback<(&'static str, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Controlled form wiring: edits update the state, a valid submit logs the
/// payload and clears the form after [`config::SUBMIT_ACK_MS`]. The pending
/// reset is cancelled if the page unmounts first.
#[hook]
pub fn use_form<F: FormFields + 'static>(label: &'static str) -> FormHandle<F> {
    let state = use_state(FormState::<F>::default);
    let error = use_state(|| None::<FormError>);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let state = state.clone();
        let error = error.clone();
        Callback::from(move |(name, value): (&'static str, String)| {
            let mut next = (*state).clone();
            match next.set(name, value) {
                Ok(()) => {
                    state.set(next);
                    error.set(None);
                }
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            let json = match next.submit() {
                Ok(fields) => payload(fields),
                Err(err) => {
                    log::debug!("{} not submitted: {}", label, err);
                    error.set(Some(err));
                    return;
                }
            };
            gloo_console::log!(format!("{} submitted: {}", label, json));
            state.set(next);

            let state = state.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(config::SUBMIT_ACK_MS, move || {
                let mut cleared = (*state).clone();
                cleared.reset();
                state.set(cleared);
            }));
        })
    };

    FormHandle {
        state,
        error: (*error).clone(),
        on_input,
        on_submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_the_fold_is_not_in_view() {
        assert!(!enters_view(900.0, 1200.0, 800.0, 50.0));
    }

    #[test]
    fn element_peeking_less_than_the_margin_is_not_in_view() {
        assert!(!enters_view(770.0, 1000.0, 800.0, 50.0));
        assert!(enters_view(740.0, 1000.0, 800.0, 50.0));
    }

    #[test]
    fn element_scrolled_past_the_top_is_not_in_view() {
        assert!(!enters_view(-400.0, 30.0, 800.0, 50.0));
        assert!(enters_view(-400.0, 300.0, 800.0, 50.0));
    }

    #[test]
    fn normalize_maps_into_unit_range() {
        assert_eq!(normalize(150.0, 100.0, 200.0), 0.25);
        assert_eq!(normalize(300.0, 100.0, 200.0), 1.0);
        assert_eq!(normalize(42.0, 0.0, 0.0), 0.5);
    }
}
