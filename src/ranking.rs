//! Tiered weighting and result ranking.
//!
//! Implements a three-tier match score where a stronger match kind always
//! dominates a weaker one for a given field: equality beats prefix beats
//! substring. A candidate's weight is the sum of its per-field scores, each
//! field credited once with the best tier any token achieves on it, capped
//! at the configured maximum. The minimum weight is a pass/fail threshold
//! applied after capping, never a clamp floor.

use crate::address;
use crate::candidate::ContactCandidate;
use crate::config::SearchConfig;
use crate::interface::SearchResult;

/// Field equals token (case-insensitive).
pub const EXACT_MATCH_WEIGHT: u32 = 100;
/// Field starts with token.
pub const PREFIX_MATCH_WEIGHT: u32 = 70;
/// Token occurs elsewhere in the field.
pub const SUBSTRING_MATCH_WEIGHT: u32 = 40;

/// A candidate paired with its weight for one query.
pub(crate) struct ScoredCandidate<'a> {
    pub candidate: &'a ContactCandidate,
    pub weight: u32,
}

/// Best tier a single token achieves on a single lowercased field.
fn match_tier(field_lower: &str, token_lower: &str) -> u32 {
    if field_lower == token_lower {
        EXACT_MATCH_WEIGHT
    } else if field_lower.starts_with(token_lower) {
        PREFIX_MATCH_WEIGHT
    } else if field_lower.contains(token_lower) {
        SUBSTRING_MATCH_WEIGHT
    } else {
        0
    }
}

fn field_score(field_lower: &str, tokens_lower: &[String]) -> u32 {
    tokens_lower
        .iter()
        .map(|token| match_tier(field_lower, token))
        .max()
        .unwrap_or(0)
}

/// Weight of one candidate against the tokenized filter.
///
/// An empty token list scores 0: no filter text finds nothing, leaving only
/// the synthetic entry to the ranker.
pub(crate) fn score_candidate(
    candidate: &ContactCandidate,
    tokens_lower: &[String],
    max_weight: u32,
) -> u32 {
    if tokens_lower.is_empty() {
        return 0;
    }
    let total = candidate
        .fields_lower()
        .iter()
        .fold(0u32, |sum, field| sum.saturating_add(field_score(field, tokens_lower)));
    total.min(max_weight)
}

/// Threshold, sort, truncate, and append the synthetic typed-address entry.
///
/// Sorting is stable on weight descending, so equal weights keep source
/// enumeration order. The synthetic entry is appended after truncation and
/// does not count against the limit; it carries weight 0 to mark it as
/// "typed, not matched".
pub(crate) fn rank(
    scored: Vec<ScoredCandidate<'_>>,
    config: &SearchConfig,
    raw_filter: &str,
    default_domain: Option<&str>,
    tokens_lower: &[String],
) -> Vec<SearchResult> {
    let mut kept: Vec<ScoredCandidate<'_>> = scored
        .into_iter()
        .filter(|entry| entry.weight > 0 && entry.weight >= config.min_weight)
        .collect();

    kept.sort_by(|a, b| b.weight.cmp(&a.weight));

    if config.limited_search {
        kept.truncate(config.search_limit as usize);
    }

    let mut results: Vec<SearchResult> = kept
        .iter()
        .map(|entry| to_result(entry, tokens_lower))
        .collect();

    if let Some(typed) = address::interpret(raw_filter, default_domain) {
        let key = typed.canonical_key();
        let represented = kept.iter().any(|entry| entry.candidate.has_address_key(&key));
        if !represented {
            results.push(SearchResult {
                display_name: String::new(),
                matched_identifier: typed.to_string(),
                is_address: true,
                weight: 0,
            });
        }
    }

    results
}

fn to_result(entry: &ScoredCandidate<'_>, tokens_lower: &[String]) -> SearchResult {
    let candidate = entry.candidate;
    let identifier = best_identifier(candidate, tokens_lower);
    SearchResult {
        display_name: candidate.display_name().to_string(),
        matched_identifier: identifier.to_string(),
        is_address: address::parse(identifier).is_some(),
        weight: entry.weight,
    }
}

/// The identifier that earned the candidate its weight: the highest-tier
/// identifier field, first one on a tie. A candidate matched only on its
/// display name reports its first identifier (addresses come first).
fn best_identifier<'a>(candidate: &'a ContactCandidate, tokens_lower: &[String]) -> &'a str {
    let mut best: Option<(&str, u32)> = None;
    // fields_lower()[0] is the display name; identifiers start at index 1.
    for (identifier, field) in candidate.identifiers().zip(&candidate.fields_lower()[1..]) {
        let score = field_score(field, tokens_lower);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((identifier, score));
        }
    }
    match best {
        Some((identifier, _)) => identifier,
        None => candidate.identifiers().next().unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ContactCard;

    fn candidate(name: &str, phones: &[&str], sips: &[&str]) -> ContactCandidate {
        ContactCandidate::new(ContactCard {
            display_name: name.to_string(),
            username: None,
            phone_numbers: phones.iter().map(|s| s.to_string()).collect(),
            sip_addresses: sips.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_lowercase()).collect()
    }

    // ── match_tier ───────────────────────────────────────────────

    #[test]
    fn test_tier_exact() {
        assert_eq!(match_tier("alice", "alice"), EXACT_MATCH_WEIGHT);
    }

    #[test]
    fn test_tier_prefix() {
        assert_eq!(match_tier("alice martin", "ali"), PREFIX_MATCH_WEIGHT);
    }

    #[test]
    fn test_tier_substring() {
        assert_eq!(match_tier("alice martin", "mar"), SUBSTRING_MATCH_WEIGHT);
    }

    #[test]
    fn test_tier_no_occurrence() {
        assert_eq!(match_tier("alice martin", "bob"), 0);
    }

    // ── score_candidate ──────────────────────────────────────────

    #[test]
    fn test_score_sums_fields() {
        let c = candidate("Alicia Keys", &[], &["sip:alicia@example.com"]);
        // Name prefix (70) + address substring (40)
        assert_eq!(score_candidate(&c, &tokens(&["ali"]), 1000), 110);
    }

    #[test]
    fn test_score_field_credited_once_across_tokens() {
        let c = candidate("Anna Maria", &[], &[]);
        // Both tokens hit the one name field; best tier wins, no summing
        assert_eq!(
            score_candidate(&c, &tokens(&["anna", "maria"]), 1000),
            PREFIX_MATCH_WEIGHT
        );
    }

    #[test]
    fn test_score_exact_beats_prefix_on_same_field() {
        let c = candidate("Anna", &[], &[]);
        assert_eq!(
            score_candidate(&c, &tokens(&["anna", "an"]), 1000),
            EXACT_MATCH_WEIGHT
        );
    }

    #[test]
    fn test_score_clamped_to_max_weight() {
        let c = candidate("Alicia Keys", &[], &["sip:alicia@example.com"]);
        assert_eq!(score_candidate(&c, &tokens(&["ali"]), 100), 100);
    }

    #[test]
    fn test_score_empty_tokens_is_zero() {
        let c = candidate("Alice Martin", &["+33600000000"], &[]);
        assert_eq!(score_candidate(&c, &[], 1000), 0);
    }

    #[test]
    fn test_score_case_insensitive() {
        let c = candidate("ALICE Martin", &[], &[]);
        assert_eq!(score_candidate(&c, &tokens(&["aLiCe"]), 1000), PREFIX_MATCH_WEIGHT);
    }

    // ── rank ─────────────────────────────────────────────────────

    fn config() -> SearchConfig {
        SearchConfig::default()
    }

    #[test]
    fn test_rank_discards_below_min_weight() {
        let a = candidate("Alice", &[], &[]);
        let b = candidate("Bob", &[], &[]);
        let toks = tokens(&["alice"]);
        let scored = vec![
            ScoredCandidate { candidate: &a, weight: 100 },
            ScoredCandidate { candidate: &b, weight: 0 },
        ];
        let mut cfg = config();
        cfg.min_weight = 50;
        let results = rank(scored, &cfg, "alice", None, &toks);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Alice");
    }

    #[test]
    fn test_rank_discards_zero_weight_even_at_min_zero() {
        let a = candidate("Bob", &[], &[]);
        let toks = tokens(&["alice"]);
        let scored = vec![ScoredCandidate { candidate: &a, weight: 0 }];
        let results = rank(scored, &config(), "alice", None, &toks);
        assert!(results.is_empty());
    }

    #[test]
    fn test_rank_sorts_descending_with_stable_ties() {
        let a = candidate("Ann A", &[], &[]);
        let b = candidate("Ann B", &[], &[]);
        let c = candidate("Ann C", &[], &[]);
        let toks = tokens(&["ann"]);
        let scored = vec![
            ScoredCandidate { candidate: &a, weight: 70 },
            ScoredCandidate { candidate: &b, weight: 100 },
            ScoredCandidate { candidate: &c, weight: 70 },
        ];
        let results = rank(scored, &config(), "ann", None, &toks);
        let names: Vec<&str> = results.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Ann B", "Ann A", "Ann C"]);
    }

    #[test]
    fn test_rank_truncates_when_limited() {
        let a = candidate("Ann A", &[], &[]);
        let b = candidate("Ann B", &[], &[]);
        let c = candidate("Ann C", &[], &[]);
        let toks = tokens(&["ann"]);
        let scored = vec![
            ScoredCandidate { candidate: &a, weight: 70 },
            ScoredCandidate { candidate: &b, weight: 70 },
            ScoredCandidate { candidate: &c, weight: 70 },
        ];
        let mut cfg = config();
        cfg.limited_search = true;
        cfg.search_limit = 2;
        let results = rank(scored, &cfg, "ann", None, &toks);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display_name, "Ann A");
        assert_eq!(results[1].display_name, "Ann B");
    }

    #[test]
    fn test_rank_appends_typed_address_after_truncation() {
        let a = candidate("Ann A", &[], &[]);
        let b = candidate("Ann B", &[], &[]);
        let toks = tokens(&["ann@example", "com"]);
        let scored = vec![
            ScoredCandidate { candidate: &a, weight: 70 },
            ScoredCandidate { candidate: &b, weight: 70 },
        ];
        let mut cfg = config();
        cfg.limited_search = true;
        cfg.search_limit = 1;
        let results = rank(scored, &cfg, "ann@example.com", None, &toks);
        assert_eq!(results.len(), 2);
        let typed = &results[1];
        assert_eq!(typed.display_name, "");
        assert_eq!(typed.matched_identifier, "sip:ann@example.com");
        assert!(typed.is_address);
        assert_eq!(typed.weight, 0);
    }

    #[test]
    fn test_rank_skips_typed_address_already_represented() {
        let a = candidate("Ann", &[], &["sip:ann@example.com"]);
        let toks = tokens(&["ann@example", "com"]);
        let scored = vec![ScoredCandidate { candidate: &a, weight: 80 }];
        let results = rank(scored, &config(), "Ann@Example.com", None, &toks);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Ann");
    }

    #[test]
    fn test_rank_completes_typed_username_with_default_domain() {
        let toks = tokens(&["bob"]);
        let results = rank(Vec::new(), &config(), "bob", Some("example.com"), &toks);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matched_identifier, "sip:bob@example.com");
    }

    #[test]
    fn test_rank_no_typed_entry_for_plain_text() {
        let toks = tokens(&["bob"]);
        let results = rank(Vec::new(), &config(), "bob", None, &toks);
        assert!(results.is_empty());
    }

    // ── matched identifier selection ─────────────────────────────

    #[test]
    fn test_matched_identifier_prefers_highest_tier() {
        let c = candidate(
            "Carol",
            &["+33611111111"],
            &["sip:carol@example.com"],
        );
        let toks = tokens(&["+336"]);
        let scored = vec![ScoredCandidate {
            candidate: &c,
            weight: score_candidate(&c, &toks, 1000),
        }];
        let results = rank(scored, &config(), "+336", None, &toks);
        assert_eq!(results[0].matched_identifier, "+33611111111");
        assert!(!results[0].is_address);
    }

    #[test]
    fn test_matched_identifier_falls_back_to_address_on_name_match() {
        let c = candidate("Alice Martin", &["+33600000000"], &["sip:alice@example.com"]);
        let toks = tokens(&["martin"]);
        let scored = vec![ScoredCandidate {
            candidate: &c,
            weight: score_candidate(&c, &toks, 1000),
        }];
        let results = rank(scored, &config(), "martin", None, &toks);
        assert_eq!(results[0].matched_identifier, "sip:alice@example.com");
        assert!(results[0].is_address);
    }
}
