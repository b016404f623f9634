use std::cmp::Ordering;

use crate::models::{CodeRecord, SUGGESTION_LIMIT};

// Acceptance floor for normalized similarity. Equivalent to a Fuse-style
// distance threshold of 0.3: one edit in a ten-character query still passes,
// unrelated text lands well below.
const SIMILARITY_FLOOR: f64 = 0.7;

#[derive(Debug, Clone, Copy)]
struct ScoredCandidate {
    index: usize,
    score: f64,
}

fn score_ordering(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Approximate lookup over the four crosswalk fields. Returns at most
/// [`SUGGESTION_LIMIT`] records ranked by best-field similarity, ties keeping
/// dataset order. A trimmed-empty query yields nothing. Pure function of
/// `(dataset, query)`; callers re-run it on every keystroke.
#[must_use]
pub fn fuzzy_match(dataset: &[CodeRecord], query: &str) -> Vec<CodeRecord> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let query_lower = trimmed.to_lowercase();

    let mut scored = Vec::new();
    for (index, record) in dataset.iter().enumerate() {
        let score = record
            .searchable_fields()
            .iter()
            .map(|field| field_similarity(&query_lower, field))
            .fold(0.0_f64, f64::max);
        if score >= SIMILARITY_FLOOR {
            scored.push(ScoredCandidate { index, score });
        }
    }

    // sort_by is stable, so equal scores preserve dataset order.
    scored.sort_by(score_ordering);
    scored.truncate(SUGGESTION_LIMIT);
    scored
        .into_iter()
        .map(|candidate| dataset[candidate.index].clone())
        .collect()
}

/// Position-independent similarity of `query_lower` to one field: a
/// case-insensitive containment hit is a perfect score, otherwise the best
/// normalized edit distance against character windows of the field sized to
/// the query (give or take one character). Where the match sits inside the
/// field never affects the score.
pub(crate) fn field_similarity(query_lower: &str, field: &str) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    let field_lower = field.to_lowercase();
    if field_lower.contains(query_lower) {
        return 1.0;
    }
    best_window_similarity(query_lower, &field_lower)
}

fn best_window_similarity(query_lower: &str, field_lower: &str) -> f64 {
    let field_chars: Vec<char> = field_lower.chars().collect();
    let query_len = query_lower.chars().count();
    let mut best = strsim::normalized_levenshtein(field_lower, query_lower);

    let min_len = query_len.saturating_sub(1).max(1);
    let max_len = (query_len + 1).min(field_chars.len());
    for window_len in min_len..=max_len {
        for window in field_chars.windows(window_len) {
            let candidate: String = window.iter().collect();
            let similarity = strsim::normalized_levenshtein(&candidate, query_lower);
            if similarity > best {
                best = similarity;
            }
            if best >= 1.0 {
                return best;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(codigo_mk: &str, desc_mk: &str, codigo_sap: &str, desc_sap: &str) -> CodeRecord {
        CodeRecord {
            codigo_mk: codigo_mk.to_string(),
            desc_mk: desc_mk.to_string(),
            codigo_sap: codigo_sap.to_string(),
            desc_sap: desc_sap.to_string(),
        }
    }

    fn fixture() -> Vec<CodeRecord> {
        vec![
            record("MK100", "Tornillo hex", "SAP1", "Tornillo hexagonal"),
            record("MK200", "Cable UTP", "SAP2", "Cable UTP cat6"),
            record("MK300", "Guante nitrilo", "SAP3", "Guante nitrilo talla M"),
        ]
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        assert!(fuzzy_match(&fixture(), "").is_empty());
        assert!(fuzzy_match(&fixture(), "   ").is_empty());
    }

    #[test]
    fn substring_hit_is_a_perfect_score() {
        assert_eq!(field_similarity("tornillo", "Tornillo hexagonal"), 1.0);
        // Position inside the field is irrelevant.
        assert_eq!(field_similarity("hexagonal", "Tornillo hexagonal"), 1.0);
    }

    #[test]
    fn one_letter_typo_is_tolerated() {
        let results = fuzzy_match(&fixture(), "tornilo hex");
        assert!(results.iter().any(|r| r.codigo_mk == "MK100"));
    }

    #[test]
    fn unrelated_text_is_rejected() {
        assert!(fuzzy_match(&fixture(), "impresora laser").is_empty());
    }

    #[test]
    fn matches_by_code_as_well_as_description() {
        // Near-miss codes (MK100, MK300) may pass the floor too; the exact
        // code must rank first.
        let results = fuzzy_match(&fixture(), "MK200");
        assert_eq!(results[0].desc_mk, "Cable UTP");
    }

    #[test]
    fn exact_substring_outranks_typo_match() {
        let dataset = vec![
            record("MK1", "Tornilo hex", "S1", ""),
            record("MK2", "Tornillo hex", "S2", ""),
        ];
        let results = fuzzy_match(&dataset, "tornillo hex");
        assert_eq!(results[0].codigo_mk, "MK2");
    }

    #[test]
    fn result_length_never_exceeds_the_suggestion_limit() {
        let dataset: Vec<CodeRecord> = (0..20)
            .map(|i| record(&format!("MK{i}"), "Tornillo hex", "SAP", "Tornillo"))
            .collect();
        let results = fuzzy_match(&dataset, "tornillo");
        assert_eq!(results.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn ties_keep_dataset_order() {
        let dataset: Vec<CodeRecord> = (0..5)
            .map(|i| record(&format!("MK{i}"), "Tornillo hex", "SAP", ""))
            .collect();
        let results = fuzzy_match(&dataset, "tornillo hex");
        let codes: Vec<&str> = results.iter().map(|r| r.codigo_mk.as_str()).collect();
        assert_eq!(codes, ["MK0", "MK1", "MK2", "MK3", "MK4"]);
    }
}
