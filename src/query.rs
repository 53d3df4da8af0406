//! Query derivation: a symbol in, a prioritized list of search queries out.

/// Strips everything outside the ticker's legal alphabet
/// (alphanumeric plus `.`, `_`, `-`).
fn sanitize_ticker(ticker: &str) -> String {
    ticker
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Builds the prioritized query list for one symbol.
///
/// Pure and deterministic. Order matters: the pipeline consumes these in
/// sequence and may stop early, so the highest-precision formulations come
/// first. Name-based queries use the display name verbatim (quoted);
/// ticker-based queries use the sanitized ticker.
#[must_use]
pub fn build_queries(ticker: &str, display_name: &str, exchange_tag: &str) -> Vec<String> {
    let tick = sanitize_ticker(ticker);
    vec![
        format!("\"{display_name}\" stock price"),
        format!("\"{display_name}\" share news"),
        format!("\"{tick}\" {exchange_tag}"),
        format!("\"{display_name}\" results"),
        format!("\"{display_name}\" earnings"),
        format!("\"{display_name}\" business news"),
        format!("\"{tick}\" stock"),
    ]
}
