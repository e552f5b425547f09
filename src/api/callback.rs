use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Html};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{management::fragment_param, types::PendingLogin};

/// Redirect target. The fragment never reaches the server, so the page posts
/// it to `/token` and then strips it from the address bar and history.
const CALLBACK_PAGE: &str = r#"<!doctype html>
<html>
  <head><meta charset="utf-8"><title>toptracks</title></head>
  <body>
    <h2 id="status">Completing login...</h2>
    <script>
      const fragment = window.location.hash.substring(1);
      history.replaceState(null, "", window.location.pathname);
      fetch("/token", { method: "POST", body: fragment })
        .then((res) => {
          document.getElementById("status").textContent = res.ok
            ? "Authentication finished. You can close this window."
            : "Login failed.";
        })
        .catch(() => {
          document.getElementById("status").textContent = "Login failed.";
        });
    </script>
  </body>
</html>
"#;

pub async fn callback() -> Html<&'static str> {
    Html(CALLBACK_PAGE)
}

/// Receives the forwarded fragment and hands it to the waiting login.
pub async fn token(
    Extension(shared_state): Extension<Arc<Mutex<PendingLogin>>>,
    body: String,
) -> (StatusCode, &'static str) {
    let mut pending = shared_state.lock().await;

    let returned_state = fragment_param(&body, "state");
    if returned_state.as_deref() != Some(pending.state.as_str()) {
        warn!("rejecting redirect fragment with mismatched state");
        return (StatusCode::BAD_REQUEST, "state mismatch");
    }

    debug!("redirect fragment received");
    pending.fragment = Some(body);
    (StatusCode::OK, "ok")
}
