//! Feed transport: one search query in, raw candidates out.
//!
//! Talks to the Google News RSS search endpoint. Every request is
//! locale-qualified (`hl`/`gl`/`ceid`); failures are surfaced per call and
//! recovered at the per-query granularity by the pipeline.

use chrono::{DateTime, Utc};

use crate::config::Locale;
use crate::core::{NewsClient, NewsError, models::NewsCandidate};

/// Fetches one locale-qualified search query from the feed endpoint.
///
/// # Errors
///
/// Returns a `NewsError` if the request fails, the endpoint answers with a
/// non-success status, or the body cannot be parsed as RSS.
pub async fn fetch_search(
    client: &NewsClient,
    query: &str,
    locale: &Locale,
) -> Result<Vec<NewsCandidate>, NewsError> {
    let mut url = client.base_search().clone();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("hl", &locale.lang)
        .append_pair("gl", &locale.country)
        .append_pair("ceid", &locale.edition);

    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(NewsError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.bytes().await?;
    let channel = rss::Channel::read_from(&body[..])?;
    Ok(channel.items().iter().map(candidate_from_item).collect())
}

fn candidate_from_item(item: &rss::Item) -> NewsCandidate {
    NewsCandidate {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        published_at: item.pub_date().and_then(parse_pub_date),
        snippet: item.description().map(strip_markup).unwrap_or_default(),
        source: item.source().and_then(|s| s.title()).map(str::to_string),
    }
}

/// Feed timestamps are RFC 2822; tolerate RFC 3339 as a fallback.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Item descriptions embed anchor markup; keep only the text so scoring
/// sees words, not tags.
fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}
