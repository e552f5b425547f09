use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    error::{AppError, Result},
    server::start_api_server,
    types::PendingLogin,
    utils, warning,
};

/// Permissions requested on every login.
pub const SCOPES: [&str; 4] = [
    "playlist-read-private",
    "user-top-read",
    "playlist-modify-public",
    "playlist-modify-private",
];

const RESPONSE_TYPE: &str = "token";
const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

/// Builds the implicit-grant authorization URL.
///
/// The scopes are joined with `,`. `state` is echoed back by Spotify in the
/// redirect fragment and checked by the callback server.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config, "abc")?;
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=token&...
/// ```
pub fn authorize_url(config: &Config, state: &str) -> Result<Url> {
    let scope = SCOPES.join(",");
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("response_type", RESPONSE_TYPE),
            ("scope", scope.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| AppError::Config(format!("Invalid authorization URL: {}", e)))
}

/// Runs the browser side of the implicit grant and returns the raw fragment.
///
/// This function:
/// 1. Binds the local callback server on `SERVER_ADDRESS`
/// 2. Opens the authorization URL in the user's browser
/// 3. Waits until the callback page forwards the redirect fragment
///
/// The server is stopped before returning. `Ok(None)` means no fragment
/// arrived within the login timeout.
///
/// # Errors
///
/// Returns [`AppError::Config`] for an unparsable server address or
/// authorization URL, and [`AppError::Io`] if the server cannot bind.
pub async fn login(config: &Config) -> Result<Option<String>> {
    let state = utils::generate_state();
    let auth_url = authorize_url(config, &state)?;

    let shared_state = Arc::new(Mutex::new(PendingLogin {
        state,
        fragment: None,
    }));

    let addr = config.server_socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    debug!(%addr, "callback server listening");

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(listener, server_state).await {
            tracing::warn!(error = %e, "callback server stopped");
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let fragment = wait_for_fragment(shared_state, LOGIN_TIMEOUT).await;
    server.abort();

    Ok(fragment)
}

/// Polls the shared login state once per second until a fragment arrives
/// or `max_wait` is exceeded.
pub async fn wait_for_fragment(
    shared_state: Arc<Mutex<PendingLogin>>,
    max_wait: Duration,
) -> Option<String> {
    use std::time::Instant;

    let start = Instant::now();
    let poll = Duration::from_secs(1).min(max_wait);

    loop {
        {
            let mut lock = shared_state.lock().await;
            if let Some(fragment) = lock.fragment.take() {
                return Some(fragment);
            }
        }
        if start.elapsed() >= max_wait {
            return None;
        }
        tokio::time::sleep(poll).await;
    }
}
