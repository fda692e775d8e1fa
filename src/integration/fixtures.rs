//! Test fixtures for integration tests
//!
//! Provides a local stand-in for the timedtext endpoint so the client and the
//! handlers can be exercised without network access.

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Track list with three languages.
pub const TRACK_LIST: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript_list docid="1234">
<track id="0" name="" lang_code="en" lang_original="English" lang_translated="English"/>
<track id="1" name="" lang_code="de" lang_original="Deutsch" lang_translated="German"/>
<track id="2" name="" lang_code="fr" lang_original="Français" lang_translated="French"/>
</transcript_list>"#;

/// German transcript with two lines.
pub const TRANSCRIPT_DE: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0" dur="1.5">Hallo</text><text start="1.5" dur="2.25">Welt</text></transcript>"#;

/// The same transcript translated to English.
pub const TRANSCRIPT_EN: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0" dur="1.5">Hello</text><text start="1.5" dur="2.25">World</text></transcript>"#;

/// A caption body spanning two source lines.
pub const TRANSCRIPT_MULTILINE: &str = "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<transcript>\n<text start=\"10\" dur=\"2.5\">erste Zeile\nzweite Zeile</text>\n</transcript>\n";

/// Caption ending in a newline, followed by one with inline markup.
pub const TRANSCRIPT_MARKUP: &str = "<transcript><text start=\"0\" dur=\"1\">line one\nline two\n</text><text start=\"1\" dur=\"1\">a <font color=\"#E5E5E5\">b</font> c</text></transcript>";

/// Second line has a non-numeric start.
pub const TRANSCRIPT_BAD_START: &str = r#"<transcript><text start="1" dur="1">ok</text><text start="abc" dur="1">bad</text></transcript>"#;

/// Truncated document.
pub const TRANSCRIPT_BROKEN: &str = r#"<transcript><text start="1" dur="2">cut off"#;

#[derive(Clone, Default)]
struct MockState {
    last_query: Arc<Mutex<Option<String>>>,
}

/// Mock timedtext server bound to an ephemeral localhost port.
pub struct MockUpstream {
    addr: SocketAddr,
    state: MockState,
}

impl MockUpstream {
    /// Start the server on the current tokio runtime.
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/timedtext", get(timedtext))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// URL to use as the upstream base.
    pub fn base_url(&self) -> String {
        format!("http://{}/timedtext", self.addr)
    }

    /// Raw query string of the most recent request.
    pub fn last_query(&self) -> Option<String> {
        self.state.last_query.lock().unwrap().clone()
    }
}

async fn timedtext(
    State(state): State<MockState>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    *state.last_query.lock().unwrap() = raw;

    let id = params.get("v").map(String::as_str).unwrap_or("");
    let is_list = params.get("type").map(String::as_str) == Some("list");
    let translated = params.get("tlang").map(String::as_str) == Some("en");

    let body = match (id, is_list) {
        ("sample", true) => TRACK_LIST,
        ("sample", false) if translated => TRANSCRIPT_EN,
        ("sample", false) => TRANSCRIPT_DE,
        ("multiline", false) => TRANSCRIPT_MULTILINE,
        ("markup", false) => TRANSCRIPT_MARKUP,
        ("badstart", false) => TRANSCRIPT_BAD_START,
        ("broken", _) => TRANSCRIPT_BROKEN,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    ([("content-type", "text/xml; charset=UTF-8")], body).into_response()
}
