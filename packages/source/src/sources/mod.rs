//! Concrete city data source implementations.
//!
//! Each module implements the [`FieldSource`](crate::FieldSource) trait for
//! a specific city's provider schema.

pub mod irvine;
pub mod pasadena;

use crate::FieldSource;
use crate::city_def::AdapterKind;

/// Returns the source implementation for an adapter kind.
#[must_use]
pub fn source_for(adapter: AdapterKind) -> &'static dyn FieldSource {
    match adapter {
        AdapterKind::Pasadena => &pasadena::PasadenaSource,
        AdapterKind::Irvine => &irvine::IrvineSource,
    }
}
