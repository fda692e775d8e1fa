//! Outbound timedtext URL construction.

use url::Url;

use crate::error::Result;

/// Transcript URL: `{base}?lang={lang}&v={id}`, plus `&tlang={tlang}` when a
/// translation language is requested.
pub fn transcript_url(base: &str, lang: &str, video_id: &str, tlang: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("lang", lang).append_pair("v", video_id);
        if !tlang.is_empty() {
            query.append_pair("tlang", tlang);
        }
    }
    Ok(url)
}

/// Track list URL: `{base}?v={id}&type=list`.
pub fn list_url(base: &str, video_id: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("v", video_id)
        .append_pair("type", "list");
    Ok(url)
}
