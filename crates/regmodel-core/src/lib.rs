//! Core register model functionality.

mod error;
pub mod model;
mod width;

pub use self::{
    error::{CatalogError, RegisterError},
    model::{Register, RegisterModel},
    width::{Width, WidthSet, suffix},
};
