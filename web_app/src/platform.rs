//! Browser implementations of the submission cycle seams.

use std::{future::Future, time::Duration};

use detective_cycle::{
    AnalysisError, Clock, Dispatch, DispatchError, LockSurface, ResultSink, ResultView,
    data_model::{AnalysisRequest, AnalysisResult},
    dispatch,
};
use gloo_timers::future::TimeoutFuture;
use leptos::{SignalSet as _, WriteSignal};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, RequestInit, Response};

/// Content type of both the request and the response.
const JSON_CONTENT_TYPE: &str = "application/json";

/// [`Dispatch`] sending requests with the browser `fetch` API.
#[derive(Debug, Clone)]
pub struct FetchDispatcher {
    /// Endpoint path relative to the page.
    endpoint: String,
}

impl FetchDispatcher {
    pub const fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    /// Perform the request, aborting it if the returned future is dropped.
    async fn post(&self, request: &AnalysisRequest) -> Result<AnalysisResult, DispatchError> {
        let body = dispatch::encode_request(request)?;

        let headers = Headers::new().map_err(transport_error)?;
        headers
            .set("Content-Type", JSON_CONTENT_TYPE)
            .map_err(transport_error)?;
        headers
            .set("Accept", JSON_CONTENT_TYPE)
            .map_err(transport_error)?;

        let abort = AbortOnDrop(AbortController::new().map_err(transport_error)?);

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        init.set_signal(Some(&abort.0.signal()));

        let window = web_sys::window()
            .ok_or_else(|| DispatchError::Transport("No window found".to_owned()))?;
        let response = JsFuture::from(window.fetch_with_str_and_init(&self.endpoint, &init))
            .await
            .map_err(transport_error)?;
        let response = response
            .dyn_into::<Response>()
            .map_err(transport_error)?;

        let text = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        let text = text.as_string().unwrap_or_default();

        dispatch::decode_response(response.status(), &text)
    }
}

impl Dispatch for FetchDispatcher {
    fn submit(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> {
        async move { dispatch::settle(self.post(&request).await) }
    }
}

/// Aborts the in-flight `fetch` once the request future is gone.
struct AbortOnDrop(AbortController);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        // No-op if the response has already been read.
        self.0.abort();
    }
}

fn transport_error(error: JsValue) -> DispatchError {
    DispatchError::Transport(format!("{error:?}"))
}

/// [`Clock`] backed by `setTimeout`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Sleep = TimeoutFuture;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        gloo_timers::future::sleep(duration)
    }
}

/// [`LockSurface`] driving the `locked` signal read by the form and the overlay.
#[derive(Debug, Clone, Copy)]
pub struct LockSignal(pub WriteSignal<bool>);

impl LockSurface for LockSignal {
    fn set_locked(&self, locked: bool) {
        self.0.set(locked);
    }
}

/// [`ResultSink`] driving the signal read by the result box.
#[derive(Debug, Clone, Copy)]
pub struct ResultSignal(pub WriteSignal<Option<ResultView>>);

impl ResultSink for ResultSignal {
    fn show(&self, view: ResultView) {
        self.0.set(Some(view));
    }
}
