//! Raw records and the collaborators that supply them.

pub(crate) mod input_format;
mod records_model;
mod records_service;
mod records_traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use records_model::{EntityKind, Record, RecordKind, Resource};
pub use records_service::RecordService;
pub use records_traits::{RecordSourceTrait, ResourceSourceTrait};
