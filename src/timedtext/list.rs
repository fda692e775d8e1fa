//! Caption track list decoding

use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};

/// A caption language available for a video.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub lang_code: String,
}

/// All caption tracks of a video, in the order the upstream lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TranscriptList {
    pub track: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
struct RawTrackList {
    #[serde(rename = "track", default)]
    tracks: Vec<RawTrack>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    #[serde(rename = "@lang_code")]
    lang_code: Option<String>,
}

pub fn parse_list(body: &str) -> Result<TranscriptList> {
    let raw: RawTrackList = quick_xml::de::from_str(body)?;
    let track = raw
        .tracks
        .into_iter()
        .map(|t| {
            t.lang_code
                .map(|lang_code| LanguageEntry { lang_code })
                .ok_or(RelayError::MissingAttribute {
                    element: "track",
                    attribute: "lang_code",
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(TranscriptList { track })
}
