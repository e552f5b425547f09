mod composer;
mod session;
mod state;
mod store;

pub use composer::{Composition, MetricsMode, PlaylistComposer, PlaylistPreset};
pub use session::{Session, extract_token, fragment_param};
pub use state::AppState;
pub use store::CredentialStore;
