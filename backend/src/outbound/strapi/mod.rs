//! Strapi outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `RemoteContentSource` port against the Strapi collection API.

mod dto;
mod http_source;

pub use http_source::{StrapiHttpSource, StrapiSourceBuildError};
