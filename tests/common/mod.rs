//! Test utilities shared by the htmx_filter integration tests

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Installs `env_logger` once per test binary; `RUST_LOG` controls the level
#[allow(dead_code)]
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Wraps `body` the way the host renders a content block
#[allow(dead_code)]
pub fn create_test_fragment(body: &str) -> String {
    format!(r#"<div class="content-block">{body}</div>"#)
}

/// A fragment exercising most htmx attributes at several nesting levels
#[allow(dead_code)]
pub fn create_htmx_fragment() -> String {
    r##"<section id="feed" hx-ext="sse" hx-headers='{"X-Token": "abc"}'>
  <h2>Latest</h2>
  <!-- polled every 5s -->
  <ul hx-get="/feed" hx-trigger="every 5s" hx-swap="innerHTML" class="items">
    <li data-id="1"><a href="/post/1" hx-boost="true">First</a></li>
    <li data-id="2"><a href="/post/2" data-hx-keep="yes">Second</a></li>
  </ul>
  <form hx-post="/comment" hx-target="#feed" method="post">
    <input name="body" hx-validate="true" required>
    <button type="submit" hx-disabled-elt="this">Send</button>
  </form>
</section>"##
        .to_string()
}
