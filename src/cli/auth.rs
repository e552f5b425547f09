use crate::{
    config::Config,
    error, info,
    management::{CredentialStore, Session},
    spotify, success,
};

pub async fn auth(config: &Config) {
    let session = Session::initialize(CredentialStore::new(), &mut None).await;
    if session.is_authenticated() {
        info!("Already authenticated. Run toptracks logout to switch accounts.");
        return;
    }

    info!("Waiting for Spotify authorization in your browser...");
    let mut fragment = match spotify::auth::login(config).await {
        Ok(Some(fragment)) => Some(fragment),
        Ok(None) => error!("Authentication failed or timed out."),
        Err(e) => error!("Login failed: {}", e),
    };

    let session = Session::initialize(CredentialStore::new(), &mut fragment).await;
    if session.is_authenticated() {
        success!("Authentication successful!");
    } else {
        error!("Authentication failed: Spotify did not return an access token.");
    }
}

pub async fn logout() {
    let mut session = Session::initialize(CredentialStore::new(), &mut None).await;
    if let Err(e) = session.logout().await {
        error!("Failed to clear stored credential: {}", e);
    }
    success!("Logged out.");
}
