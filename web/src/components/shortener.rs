//! Shortener form component

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use shorturl_shared::ShortenTransport;

use crate::page;

#[component]
pub fn ShortenerForm<T>(transport: T) -> impl IntoView
where
    T: ShortenTransport + Clone + Send + 'static,
{
    let long_input: NodeRef<html::Input> = NodeRef::new();
    let (short_text, set_short_text) = signal(String::new());

    // every submit runs on its own; the last reply to arrive is what stays on screen
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let long_url = long_input
            .get()
            .map(|input| input.value())
            .unwrap_or_default();
        let origin = page::origin();
        let transport = transport.clone();

        leptos::task::spawn_local(async move {
            let shown = shorturl_shared::submit(&transport, &origin, long_url).await;
            set_short_text.set(shown);
        });
    };

    view! {
        <div class="card">
            <h2>"🔗 Shorten a link"</h2>
            <form id="shortenerForm" on:submit=on_submit>
                <div class="input-group">
                    <input
                        type="text"
                        name="longid"
                        placeholder="https://example.com/very/long/url"
                        node_ref=long_input
                    />
                    <button type="submit">"Shorten"</button>
                </div>
            </form>

            // rendered as a text node, never parsed as markup
            <div class="result">
                <div id="shortid" class="result-value">{move || short_text.get()}</div>
            </div>
        </div>
    }
}

// ==============================================================================
// tests (browser only: wasm-pack test --headless --firefox web)
// ==============================================================================

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use leptos::mount::mount_to;
    use shorturl_shared::TransportError;
    use std::sync::{Arc, Mutex};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlInputElement, SubmitEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    /// replies immediately and records every body it was given
    #[derive(Clone)]
    struct Recording {
        reply: fn() -> Result<String, TransportError>,
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl Recording {
        fn new(reply: fn() -> Result<String, TransportError>) -> Self {
            Self {
                reply,
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl ShortenTransport for Recording {
        async fn post_json(&self, body: String) -> Result<String, TransportError> {
            self.sent.lock().unwrap().push(body);
            (self.reply)()
        }
    }

    fn mount_form(transport: Recording) -> HtmlElement {
        let document = window().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();

        let mounted = mount_to(root.clone(), move || {
            view! { <ShortenerForm transport=transport /> }
        });
        // keep the view alive for the rest of the test run
        std::mem::forget(mounted);
        root
    }

    fn set_long_url(root: &HtmlElement, value: &str) {
        root.query_selector("input[name=longid]")
            .unwrap()
            .unwrap()
            .unchecked_into::<HtmlInputElement>()
            .set_value(value);
    }

    /// dispatch a cancelable submit and report whether navigation was stopped
    fn submit_form(root: &HtmlElement) -> bool {
        let init = SubmitEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let ev = web_sys::SubmitEvent::new_with_event_init_dict("submit", &init).unwrap();

        let form = root.query_selector("#shortenerForm").unwrap().unwrap();
        form.dispatch_event(&ev).unwrap();
        ev.default_prevented()
    }

    fn shown(root: &HtmlElement) -> String {
        root.query_selector("#shortid")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            window()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    async fn wait_for_text(root: &HtmlElement) -> String {
        for _ in 0..100 {
            let text = shown(root);
            if !text.is_empty() {
                return text;
            }
            sleep(10).await;
        }
        shown(root)
    }

    #[wasm_bindgen_test]
    async fn test_submit_prevents_navigation_and_shows_short_link() {
        let transport = Recording::new(|| Ok(r#"{"url":"abc123"}"#.to_string()));
        let root = mount_form(transport.clone());

        set_long_url(&root, "https://rust-lang.org");
        assert!(submit_form(&root));

        let text = wait_for_text(&root).await;
        assert_eq!(text, format!("{}/x/abc123", page::origin()));
        assert_eq!(transport.sent(), vec![r#"{"url":"https://rust-lang.org"}"#]);
    }

    #[wasm_bindgen_test]
    async fn test_input_is_read_when_submitted() {
        let transport = Recording::new(|| Ok(r#"{"url":"abc123"}"#.to_string()));
        let root = mount_form(transport.clone());

        set_long_url(&root, "https://first.example");
        assert!(submit_form(&root));
        set_long_url(&root, "");
        assert!(submit_form(&root));

        wait_for_text(&root).await;
        sleep(50).await;
        assert_eq!(
            transport.sent(),
            vec![r#"{"url":"https://first.example"}"#, r#"{"url":""}"#]
        );
    }

    #[wasm_bindgen_test]
    async fn test_transport_failure_is_shown() {
        let transport =
            Recording::new(|| Err(TransportError::Request("connection refused".to_string())));
        let root = mount_form(transport);

        assert!(submit_form(&root));
        let text = wait_for_text(&root).await;
        assert_eq!(text, "Error: request failed: connection refused");
    }

    #[wasm_bindgen_test]
    async fn test_reply_markup_is_written_as_text() {
        let transport = Recording::new(|| Ok("<b>Internal Server Error</b>".to_string()));
        let root = mount_form(transport);

        assert!(submit_form(&root));
        let text = wait_for_text(&root).await;
        assert_eq!(text, "Error: <b>Internal Server Error</b>");
        assert!(root.query_selector("#shortid b").unwrap().is_none());
    }
}
