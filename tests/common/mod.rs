#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use toptracks::{
    management::CredentialStore,
    types::{Album, Artist, Track},
    utils,
};

// Helper function to create a test track
pub fn track(uri: &str, popularity: u8, release_date: &str, duration_ms: u64, artists: &[&str]) -> Track {
    Track {
        uri: uri.to_string(),
        name: format!("Song {}", uri),
        popularity,
        duration_ms,
        album: Album {
            name: "Album".to_string(),
            release_date: release_date.to_string(),
        },
        artists: artists
            .iter()
            .map(|name| Artist {
                name: name.to_string(),
                genres: Vec::new(),
            })
            .collect(),
    }
}

pub fn track_json(uri: &str, popularity: u8, release_date: &str, artist: &str) -> Value {
    json!({
        "uri": uri,
        "name": format!("Song {}", uri),
        "popularity": popularity,
        "duration_ms": 180000,
        "album": { "name": "Album", "release_date": release_date },
        "artists": [{ "name": artist }]
    })
}

// Each call gets its own slot under the system temp dir
pub fn temp_store() -> CredentialStore {
    let dir = std::env::temp_dir().join(format!("toptracks-test-{}", utils::generate_state()));
    CredentialStore::at(dir.join("cache/token"))
}

/// In-process stand-in for the Spotify Web API.
pub struct StubApi {
    pub tracks: Vec<Value>,
    pub top_tracks_status: AtomicU16,
    pub create_status: AtomicU16,
    pub add_status: AtomicU16,
    pub add_omits_snapshot: AtomicBool,
    pub top_tracks_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub add_calls: AtomicUsize,
    pub last_authorization: Mutex<Option<String>>,
    pub last_limit: Mutex<Option<String>>,
    pub created_body: Mutex<Option<Value>>,
    pub added_playlist: Mutex<Option<String>>,
    pub added_uris: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new(tracks: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            tracks,
            top_tracks_status: AtomicU16::new(200),
            create_status: AtomicU16::new(201),
            add_status: AtomicU16::new(201),
            add_omits_snapshot: AtomicBool::new(false),
            top_tracks_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            add_calls: AtomicUsize::new(0),
            last_authorization: Mutex::new(None),
            last_limit: Mutex::new(None),
            created_body: Mutex::new(None),
            added_playlist: Mutex::new(None),
            added_uris: Mutex::new(Vec::new()),
        })
    }

    pub fn total_calls(&self) -> usize {
        self.top_tracks_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.add_calls.load(Ordering::SeqCst)
    }
}

fn status(code: &AtomicU16) -> StatusCode {
    StatusCode::from_u16(code.load(Ordering::SeqCst)).unwrap()
}

fn record_auth(stub: &StubApi, headers: &HeaderMap) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *stub.last_authorization.lock().unwrap() = auth;
}

async fn top_tracks(
    State(stub): State<Arc<StubApi>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.top_tracks_calls.fetch_add(1, Ordering::SeqCst);
    record_auth(&stub, &headers);
    *stub.last_limit.lock().unwrap() = query.get("limit").cloned();

    let code = status(&stub.top_tracks_status);
    if !code.is_success() {
        return (code, Json(json!({ "error": { "status": code.as_u16() } }))).into_response();
    }
    (code, Json(json!({ "items": stub.tracks, "next": null }))).into_response()
}

async fn create_playlist(
    State(stub): State<Arc<StubApi>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.create_calls.fetch_add(1, Ordering::SeqCst);
    record_auth(&stub, &headers);
    *stub.created_body.lock().unwrap() = Some(body.clone());

    let code = status(&stub.create_status);
    if !code.is_success() {
        return (code, Json(json!({ "error": { "status": code.as_u16() } }))).into_response();
    }
    (
        code,
        Json(json!({
            "id": "pl123",
            "name": body["name"],
            "description": body["description"],
            "public": false,
            "external_urls": { "spotify": "https://open.spotify.com/playlist/pl123" }
        })),
    )
        .into_response()
}

async fn add_tracks(
    State(stub): State<Arc<StubApi>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    stub.add_calls.fetch_add(1, Ordering::SeqCst);
    *stub.added_playlist.lock().unwrap() = Some(id);
    *stub.added_uris.lock().unwrap() = body["uris"]
        .as_array()
        .map(|uris| {
            uris.iter()
                .filter_map(|u| u.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let code = status(&stub.add_status);
    if !code.is_success() {
        return (code, Json(json!({ "error": { "status": code.as_u16() } }))).into_response();
    }
    if stub.add_omits_snapshot.load(Ordering::SeqCst) {
        return (code, Json(json!({}))).into_response();
    }
    (code, Json(json!({ "snapshot_id": "snap1" }))).into_response()
}

/// Serves `stub` on an ephemeral port and returns its base URL.
pub async fn spawn_stub(stub: Arc<StubApi>) -> String {
    let app = Router::new()
        .route("/me/top/tracks", get(top_tracks))
        .route("/me/playlists", post(create_playlist))
        .route("/playlists/{id}/tracks", post(add_tracks))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
