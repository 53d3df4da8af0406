//! Relevance and recency ranking of raw feed candidates.
//!
//! The scorer is pure given its inputs; only [`Scorer::rank`] reads the
//! wall clock, and [`Scorer::rank_at`] takes the anchor time explicitly so
//! tests stay deterministic.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::config::IngestConfig;
use crate::core::models::{NewsCandidate, ScoredArticle};

/// A keyword family with a shared weight.
///
/// When `once` is set the weight is awarded at most once no matter how many
/// members of the group match.
struct KeywordGroup {
    keywords: &'static [&'static str],
    weight: u32,
    once: bool,
}

const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["STOCK"],
        weight: 5,
        once: false,
    },
    KeywordGroup {
        keywords: &["SHARE"],
        weight: 4,
        once: false,
    },
    KeywordGroup {
        keywords: &["MARKET"],
        weight: 3,
        once: false,
    },
    KeywordGroup {
        keywords: &[
            "EARNINGS", "RESULT", "Q1", "Q2", "Q3", "Q4", "REVENUE", "PROFIT",
        ],
        weight: 5,
        once: true,
    },
];

/// Filters, dedupes, time-windows, scores, and ranks candidates.
pub struct Scorer {
    exchange_tag: String,
    recency: Duration,
}

impl Scorer {
    /// Creates a scorer from the run configuration.
    #[must_use]
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            exchange_tag: config.exchange_tag.to_uppercase(),
            recency: Duration::days(config.recency_days),
        }
    }

    /// Ranks `candidates` for a symbol, anchored at the current time.
    ///
    /// Returns the full ranked sequence; truncation to the per-symbol save
    /// cap is the pipeline's job.
    #[must_use]
    pub fn rank(
        &self,
        candidates: Vec<NewsCandidate>,
        ticker: &str,
        display_name: &str,
    ) -> Vec<ScoredArticle> {
        self.rank_at(candidates, ticker, display_name, Utc::now())
    }

    /// Deterministic core of [`Scorer::rank`]: `now` anchors the recency window.
    #[must_use]
    pub fn rank_at(
        &self,
        candidates: Vec<NewsCandidate>,
        ticker: &str,
        display_name: &str,
        now: DateTime<Utc>,
    ) -> Vec<ScoredArticle> {
        let sym_u = ticker.to_uppercase();
        let name_u = display_name.to_uppercase();
        let name_parts: Vec<&str> = name_u.split_whitespace().filter(|p| p.len() > 3).collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut scored = Vec::new();
        for cand in candidates {
            if cand.title.is_empty() || cand.link.is_empty() {
                continue;
            }
            // Search/redirect endpoints point back into the search UI, not
            // at an article.
            if cand.link.contains("/search?") {
                continue;
            }
            // First occurrence wins; later duplicates are dropped silently.
            if !seen.insert(cand.link.clone()) {
                continue;
            }
            // Missing timestamps are never treated as stale.
            if let Some(ts) = cand.published_at
                && now - ts > self.recency
            {
                continue;
            }

            let head_u = format!("{} {}", cand.title, cand.snippet).to_uppercase();
            let score = self.score_text(&head_u, &sym_u, &name_u, &name_parts);
            scored.push(ScoredArticle {
                headline: cand.title,
                url: cand.link,
                source: cand.source,
                published_at: cand.published_at,
                score,
            });
        }

        // Stable sort: score descending, ties by publish time descending
        // with missing timestamps last.
        scored.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                let a_ts = a.published_at.map_or(i64::MIN, |t| t.timestamp());
                let b_ts = b.published_at.map_or(i64::MIN, |t| t.timestamp());
                b_ts.cmp(&a_ts)
            })
        });
        scored
    }

    fn score_text(&self, head_u: &str, sym_u: &str, name_u: &str, name_parts: &[&str]) -> u32 {
        let mut score = 0;
        if !sym_u.is_empty() && head_u.contains(sym_u) {
            score += 6;
        }
        if !name_u.is_empty() && head_u.contains(name_u) {
            score += 8;
        }
        // Additive per token, not capped.
        for part in name_parts {
            if head_u.contains(part) {
                score += 3;
            }
        }
        if !self.exchange_tag.is_empty() && head_u.contains(self.exchange_tag.as_str()) {
            score += 3;
        }
        for group in KEYWORD_GROUPS {
            for kw in group.keywords {
                if head_u.contains(kw) {
                    score += group.weight;
                    if group.once {
                        break;
                    }
                }
            }
        }
        score
    }
}
