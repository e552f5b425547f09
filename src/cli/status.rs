use colored::Colorize;

use crate::{
    info,
    management::{CredentialStore, Session},
    warning,
};

pub async fn status() {
    let session = Session::initialize(CredentialStore::new(), &mut None).await;

    if session.is_authenticated() {
        info!("Session: {}", "authenticated".green().bold());
    } else {
        warning!("Session: not authenticated. Run toptracks auth");
    }
    info!("Token file: {}", session.store().path().display());
}
