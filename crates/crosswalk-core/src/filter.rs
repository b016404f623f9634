use crate::models::{OrderRecord, SUGGESTION_LIMIT};

/// Case-insensitive substring filter over document number, short text, and
/// vendor name. An empty query is the identity filter; dataset order is
/// preserved and nothing is ranked. Missing fields are empty strings and
/// never match a non-empty query.
#[must_use]
pub fn filter_orders(dataset: &[OrderRecord], query: &str) -> Vec<OrderRecord> {
    let query_lower = query.to_lowercase();
    if query_lower.is_empty() {
        return dataset.to_vec();
    }
    dataset
        .iter()
        .filter(|record| order_matches(record, &query_lower))
        .cloned()
        .collect()
}

fn order_matches(record: &OrderRecord, query_lower: &str) -> bool {
    [
        record.documento_compras.as_str(),
        record.texto_breve.as_str(),
        record.nombre_de_proveedor.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query_lower))
}

/// Dropdown view of a filtered result: the first [`SUGGESTION_LIMIT`]
/// entries, or nothing while the trimmed query is empty.
#[must_use]
pub fn order_suggestions(filtered: &[OrderRecord], query: &str) -> Vec<OrderRecord> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    filtered.iter().take(SUGGESTION_LIMIT).cloned().collect()
}
