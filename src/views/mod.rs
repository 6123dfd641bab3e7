//! Display artifacts computed from the filtered view.
//!
//! Everything here is pure: a function of the [`FilteredView`] and a few view
//! parameters. Drawing the artifacts with egui lives in `crate::ui`.
//!
//! [`FilteredView`]: crate::data::filter::FilteredView

pub mod histogram;
pub mod scatter;
pub mod table;

use crate::error::ViewError;

pub type ViewResult<T> = Result<T, ViewError>;
