//! Form domain layer
//!
//! Maps each wizard step onto editable fields and turns key input into
//! profile updates or button actions.

mod field;
mod form_state;

pub use field::{
    ChildKey, DisabilityKey, FieldBinding, FieldKind, FormAction, FormField, LifePolicyKey,
    OptionKey,
};
pub use form_state::{fields_for_step, Form, FormEffect, FormInput, WizardForm};
