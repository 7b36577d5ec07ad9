//! Capview Client - HTTP record and profile-picture source.
//!
//! Implements [`capview_core::records::RecordSourceTrait`] and
//! [`capview_core::records::ResourceSourceTrait`] over the record API. The
//! API location and credentials are passed in through [`ClientConfig`].

mod client;
pub mod config;

pub use client::ApiClient;
pub use config::ClientConfig;
