//! Startup and investor profiles and the company directory.

mod directory_service;
mod profiles_model;

pub use directory_service::*;
pub use profiles_model::*;
