//! Web App with the url analysis form.

#![allow(clippy::empty_structs_with_brackets, clippy::same_name_method)] // Triggered by leptos
#![allow(clippy::missing_docs_in_private_items)]

use std::rc::Rc;

use detective_cycle::{Config, FormGate, ResultRenderer, SubmissionCycle, WatchdogTimer};
use leptos::{component, create_signal, spawn_local, view, IntoView};
use tracing::{debug, info};

use crate::{
    components::{AnalyzeForm, Overlay, ResultBox},
    platform::{BrowserClock, FetchDispatcher, LockSignal, ResultSignal},
};

mod components;
mod logger;
mod platform;

/// Main component.
#[component]
fn App() -> impl IntoView {
    let config = Config::default();

    let (locked, set_locked) = create_signal(false);
    let (result, set_result) = create_signal(None);

    let cycle = Rc::new(SubmissionCycle::new(
        FormGate::new(LockSignal(set_locked)),
        FetchDispatcher::new(config.endpoint),
        WatchdogTimer::new(BrowserClock, config.watchdog_timeout),
        ResultRenderer::new(ResultSignal(set_result)),
    ));

    let on_submit = move |url: String| {
        let cycle = Rc::clone(&cycle);
        spawn_local(async move {
            let outcome = cycle.run(url).await;
            debug!(?outcome, "Submission cycle finished");
        });
    };

    view! {
        <div class="container">
            <h1>Detective</h1>
            <AnalyzeForm locked=locked on_submit=on_submit/>
            <ResultBox result=result/>
        </div>
        <Overlay locked=locked/>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(error) = logger::init() {
        web_sys::console::error_1(&format!("Failed to initialize logger: {error}").into());
    }
    info!("Hello from Detective!");

    leptos::mount_to_body(App)
}
