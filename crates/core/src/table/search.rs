//! Free-text search across every field of a record.

use serde_json::Value;

use crate::constants::SEARCH_FIELD_SEPARATOR;
use crate::records::Record;

/// Text form of a value used for matching.
///
/// Scalars render as their plain text (`null` as the empty string). Arrays and
/// objects flatten to their non-empty scalar leaves joined by a space, so a
/// query can reach into nested investor lists and similar structures.
pub fn searchable_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            let mut leaves = Vec::new();
            collect_leaves(value, &mut leaves);
            leaves.join(SEARCH_FIELD_SEPARATOR)
        }
    }
}

fn collect_leaves(value: &Value, leaves: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_leaves(item, leaves)),
        Value::Object(fields) => fields.values().for_each(|field| collect_leaves(field, leaves)),
        scalar => {
            let text = searchable_text(scalar);
            if !text.is_empty() {
                leaves.push(text);
            }
        }
    }
}

/// Case-folds text for matching.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Whether any own field of the record contains the already case-folded query.
pub fn record_matches(record: &Record, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true;
    }
    record
        .values()
        .any(|value| fold_case(&searchable_text(value)).contains(folded_query))
}

/// Returns the records matching `query`, in their original order.
/// An empty query matches everything.
pub fn filter_records<T>(items: &[T], query: &str) -> Vec<T>
where
    T: AsRef<Record> + Clone,
{
    let folded = fold_case(query);
    items
        .iter()
        .filter(|item| record_matches(item.as_ref(), &folded))
        .cloned()
        .collect()
}
