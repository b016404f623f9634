/// Whether a query "looks numeric": all whitespace stripped, the remainder
/// must be non-empty and parse entirely as a number. The non-empty check is
/// explicit because a bare numeric parse of `""` is ambiguous. `NaN` spellings
/// are text, not numbers.
#[must_use]
pub fn is_numeric_query(query: &str) -> bool {
    let stripped: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    !stripped.is_empty() && stripped.parse::<f64>().is_ok_and(|value| !value.is_nan())
}
