//! Stable, direction-aware ordering of records by an arbitrary field.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::search::searchable_text;
use crate::records::Record;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort key (a field name or dotted path) and direction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub id: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(id: impl Into<String>) -> Self {
        Sort {
            id: id.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Sort {
            id: id.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Rank of a value's type in the cross-type total order.
/// Missing and null share the lowest rank.
fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Ascending total order over optional JSON values.
///
/// Missing and null values are equal to each other and sort before every
/// defined value. Numbers compare numerically, strings lexicographically,
/// booleans `false < true`, arrays element-wise, and objects by their
/// flattened text. Values of different types order by type rank.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x.cmp(&y)
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x.cmp(&y)
            } else {
                let x = x.as_f64().unwrap_or(0.0);
                let y = y.as_f64().unwrap_or(0.0);
                x.total_cmp(&y)
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Array(x)), Some(Value::Array(y))) => {
            for (left, right) in x.iter().zip(y.iter()) {
                let ordering = compare_values(Some(left), Some(right));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            x.len().cmp(&y.len())
        }
        (Some(x @ Value::Object(_)), Some(y @ Value::Object(_))) => {
            searchable_text(x).cmp(&searchable_text(y))
        }
        _ => Ordering::Equal,
    }
}

/// Compares two records on `sort.id` in `sort.direction`.
pub fn compare_records(a: &Record, b: &Record, sort: &Sort) -> Ordering {
    sort.direction
        .apply(compare_values(a.get_path(&sort.id), b.get_path(&sort.id)))
}

/// Returns a new vector ordered by `compare`, keeping the original relative
/// order of elements that compare equal.
///
/// Each element is decorated with its original index and the index breaks
/// ties, so the result does not depend on the stability of the underlying sort.
pub fn stable_sort_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, &T)> = items.iter().enumerate().collect();
    decorated.sort_unstable_by(|(ia, a), (ib, b)| compare(a, b).then_with(|| ia.cmp(ib)));
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Sorts records (or rows wrapping a record) by a field.
pub fn sort_records<T>(items: &[T], sort: &Sort) -> Vec<T>
where
    T: AsRef<Record> + Clone,
{
    stable_sort_by(items, |a, b| compare_records(a.as_ref(), b.as_ref(), sort))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .map(|v| Record::from_value(v).unwrap())
            .collect()
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records.iter().filter_map(Record::id).collect()
    }

    #[test]
    fn test_sorts_strings_ascending_and_descending() {
        let rows = records(vec![
            json!({"id": 1, "companyName": "Beta"}),
            json!({"id": 2, "companyName": "Alpha"}),
            json!({"id": 3, "companyName": "Gamma"}),
        ]);

        assert_eq!(ids(&sort_records(&rows, &Sort::asc("companyName"))), ["2", "1", "3"]);
        assert_eq!(ids(&sort_records(&rows, &Sort::desc("companyName"))), ["3", "1", "2"]);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let rows = records(vec![
            json!({"id": 1, "shares": 100}),
            json!({"id": 2, "shares": 9}),
            json!({"id": 3, "shares": 25.5}),
        ]);

        assert_eq!(ids(&sort_records(&rows, &Sort::asc("shares"))), ["2", "3", "1"]);
    }

    #[test]
    fn test_equal_keys_keep_original_order_in_both_directions() {
        let rows = records(vec![
            json!({"id": 1, "city": "Manila"}),
            json!({"id": 2, "city": "Cebu"}),
            json!({"id": 3, "city": "Manila"}),
            json!({"id": 4, "city": "Cebu"}),
        ]);

        assert_eq!(ids(&sort_records(&rows, &Sort::asc("city"))), ["2", "4", "1", "3"]);
        assert_eq!(ids(&sort_records(&rows, &Sort::desc("city"))), ["1", "3", "2", "4"]);
    }

    #[test]
    fn test_missing_and_null_sort_first_and_tie() {
        let rows = records(vec![
            json!({"id": 1, "foundedDate": "2020-01-01"}),
            json!({"id": 2}),
            json!({"id": 3, "foundedDate": null}),
            json!({"id": 4, "foundedDate": "2019-05-01"}),
        ]);

        assert_eq!(
            ids(&sort_records(&rows, &Sort::asc("foundedDate"))),
            ["2", "3", "4", "1"]
        );
        assert_eq!(
            ids(&sort_records(&rows, &Sort::desc("foundedDate"))),
            ["1", "4", "2", "3"]
        );
    }

    #[test]
    fn test_mixed_types_use_type_rank() {
        assert_eq!(
            compare_values(Some(&json!(10)), Some(&json!("10"))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&json!(false)), Some(&json!(0))),
            Ordering::Less
        );
        assert_eq!(compare_values(None, Some(&json!(false))), Ordering::Less);
        assert_eq!(compare_values(None, Some(&Value::Null)), Ordering::Equal);
    }

    #[test]
    fn test_sorts_on_nested_path() {
        let rows = records(vec![
            json!({"id": 1, "startup": {"companyName": "Zeta"}}),
            json!({"id": 2, "startup": {"companyName": "Eta"}}),
        ]);

        assert_eq!(
            ids(&sort_records(&rows, &Sort::asc("startup.companyName"))),
            ["2", "1"]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let rows = records(vec![json!({"id": 2, "n": 2}), json!({"id": 1, "n": 1})]);
        let before = rows.clone();
        let _ = sort_records(&rows, &Sort::asc("n"));
        assert_eq!(rows, before);
    }
}
