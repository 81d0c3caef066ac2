//! formcraft validation engine
//!
//! Checks a candidate [`FieldValue`] against the constraints declared on a
//! [`Field`]. Checks run in a fixed order and the first failure wins:
//!
//! 1. required
//! 2. minimum length
//! 3. maximum length
//! 4. pattern
//!
//! [`validate_fields`] and [`validate_step`] run the engine over many fields at
//! once and collect one message per failing field.
//!
//! [`FieldValue`]: formcraft_types::FieldValue
//! [`Field`]: formcraft_types::Field

pub mod engine;
pub mod pattern;
pub mod report;

pub use engine::{validate, MSG_INVALID_FORMAT, MSG_REQUIRED};
pub use pattern::matches_pattern;
pub use report::{validate_fields, validate_step, ErrorMap};
