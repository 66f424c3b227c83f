//! Module with [`AnalyzeForm`] and its blocking [`Overlay`].

use leptos::{component, create_node_ref, html::Input, view, IntoView, ReadSignal, SignalGet as _};
use web_sys::SubmitEvent;

/// Form with the url input and `Analyze` button.
///
/// Both are read-only while `locked`. Submitting passes the current url to `on_submit`.
#[component]
pub fn AnalyzeForm<F: Fn(String) + 'static>(
    locked: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView {
    let url_element = create_node_ref::<Input>();

    let on_form_submit = move |event: SubmitEvent| {
        event.prevent_default(); // Prevent page reload

        let Some(url_element) = url_element.get() else {
            return;
        };
        on_submit(url_element.value());
    };

    view! {
        <form id="my-form" on:submit=on_form_submit>
            <label for="url">Url</label>
            <input type="url" id="url" name="url" placeholder="https://example.com" required=true
                readonly=locked node_ref=url_element autocapitalize="false" autocorrect="false"
                spellcheck="false"/>
            <input type="submit" value="Analyze" readonly=locked disabled=locked/>
        </form>
    }
}

/// Overlay with a loading indicator blocking the page while `locked`.
#[component]
pub fn Overlay(locked: ReadSignal<bool>) -> impl IntoView {
    let display = move || {
        if locked.get() {
            "display: block"
        } else {
            "display: none"
        }
    };

    view! {
        <div id="lock-modal" style=display/>
        <div id="loading-circle" style=display/>
    }
}
