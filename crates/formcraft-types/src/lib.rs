//! Field entity model for formcraft forms
//!
//! A form is an ordered collection of [`Field`]s, each placed on one step
//! (page) of a multi-step form. This crate holds the data types every other
//! formcraft crate speaks in:
//!
//! - [`Field`], [`FieldType`], [`ValidationRules`] - one configured input
//! - [`FieldDraft`] / [`FieldUpdate`] - creation input and partial update
//! - [`FieldValue`] - a candidate value entered into a field
//! - [`Device`] / [`Theme`] - builder preview presets
//!
//! The serialized shape (camelCase keys, `"type"` tag) is the on-disk format
//! of saved forms.

pub mod device;
pub mod field;
pub mod value;

pub use device::{Device, Theme, UnknownVariant};
pub use field::{
    compute_total_steps, create_field, fields_in_step, Field, FieldDraft, FieldType, FieldUpdate,
    ValidationRules,
};
pub use value::FieldValue;
