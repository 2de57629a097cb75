//! ==============================================================================
//! lib.rs - Short URL web client
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the url shortening service.
//!     submits a long url from the page form and shows the short link
//!     (or the service's error text) underneath it.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the shorten api via fetch (gloo-net)
//!     - request/reply handling lives in shorturl-shared
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod page;

use api::GlooTransport;
use components::ShortenerForm;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("short url client using {}", api::shorten_endpoint());
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Short URL" />
        <header class="header">
            <h1>"Short URL"</h1>
        </header>
        <div class="container">
            <ShortenerForm transport=GlooTransport::default() />
        </div>
    }
}
