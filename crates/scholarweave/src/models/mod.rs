//! Data models for upstream works, normalized papers and HTTP bodies.
//!
//! Upstream models decode leniently: absent and `null` fields fall back to
//! their defaults so one sparse record never fails a whole page.

mod paper;
mod responses;
mod work;

pub use paper::{Author, Paper, SOURCE_OPENALEX};
pub use responses::{
    ErrorEnvelope, HealthStatus, RootInfo, SearchMeta, SearchResponse, ServiceStatus,
};
pub use work::{Authorship, Work, WorkAuthor, WorkList, WorkListMeta};

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
