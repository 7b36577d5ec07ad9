use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::records::Record;

/// A typed row paired with its record form, so the table engine can sort and
/// search it by field name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableRow<T> {
    pub record: Record,
    pub value: T,
}

impl<T: Serialize> TableRow<T> {
    pub fn new(value: T) -> Result<Self> {
        let record = Record::from_serializable(&value)?;
        Ok(TableRow { record, value })
    }

    pub fn many(values: Vec<T>) -> Result<Vec<Self>> {
        values.into_iter().map(TableRow::new).collect()
    }
}

impl<T> TableRow<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> AsRef<Record> for TableRow<T> {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}
