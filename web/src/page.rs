//! Page location helpers

use leptos::prelude::window;

/// scheme and host of the running page, e.g. `https://example.com:8080`
pub fn origin() -> String {
    let location = window().location();
    match (location.protocol(), location.host()) {
        (Ok(protocol), Ok(host)) => join_origin(&protocol, &host),
        _ => {
            log::warn!("page location unavailable, short links will be relative");
            String::new()
        }
    }
}

// location.protocol() keeps the trailing colon ("https:")
fn join_origin(protocol: &str, host: &str) -> String {
    format!("{}//{}", protocol, host)
}
