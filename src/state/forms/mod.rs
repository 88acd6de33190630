//! Form domain layer

mod field;
mod form_state;

pub use field::{FocusTarget, Gender, PetType, Preference};
pub use form_state::{Form, FormValues, PetEntry, SignupForm};
