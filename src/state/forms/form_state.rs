//! Form state management and the signup form struct

use super::field::{FocusTarget, Gender, PetType, Preference};
use crate::validation::{self, ErrorMap};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;
use validator::Validate;

/// Trait for common form navigation operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// One row in the dynamic pets list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct PetEntry {
    /// Generated token used as list identity; not guarded against collisions
    pub id: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
}

impl PetEntry {
    /// Create an empty entry with a fresh identity and the default type
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            pet_type: PetType::Frog,
        }
    }
}

impl Default for PetEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete value object behind the signup form.
///
/// Serializes with the camelCase keys used as field paths in [`ErrorMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub last_name: String,
    pub gender: Gender,
    pub preferences: Vec<Preference>,
    pub email: String,
    pub pass: String,
    #[validate(nested)]
    pub pets: Vec<PetEntry>,
}

/// Signup form: values plus the interaction state around them
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub values: FormValues,
    /// Full error map from the latest validation pass
    pub errors: ErrorMap,
    /// Field paths the user has edited or left, gating inline error display
    pub touched: HashSet<String>,
    /// Disables the submit control while the handler runs
    pub submitting: bool,
    active_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus targets in tab order for the current values.
    ///
    /// Static fields and options first, then name/type/remove per pet,
    /// then the Add Pet and Submit buttons.
    pub fn targets(&self) -> Vec<FocusTarget> {
        let mut targets = vec![FocusTarget::FirstName, FocusTarget::LastName];
        targets.extend(Gender::OPTIONS.map(FocusTarget::GenderOption));
        targets.extend(Preference::OPTIONS.map(FocusTarget::PreferenceOption));
        targets.push(FocusTarget::Email);
        targets.push(FocusTarget::Pass);
        for index in 0..self.values.pets.len() {
            targets.push(FocusTarget::PetName(index));
            targets.push(FocusTarget::PetType(index));
            targets.push(FocusTarget::PetRemove(index));
        }
        targets.push(FocusTarget::AddPet);
        targets.push(FocusTarget::Submit);
        targets
    }

    /// The currently focused control
    pub fn active_target(&self) -> FocusTarget {
        let targets = self.targets();
        targets[self.active_index.min(targets.len() - 1)]
    }

    /// Whether `target` currently has focus
    pub fn is_active(&self, target: FocusTarget) -> bool {
        self.active_target() == target
    }

    /// Leaving a field counts as a validation pass, like editing it
    pub fn blur_active(&mut self) {
        if let Some(path) = self.active_target().path() {
            self.touched.insert(path);
            self.revalidate();
        }
    }

    /// Push a character into the focused text field
    pub fn push_char(&mut self, c: char) {
        let target = self.active_target();
        let Some(text) = self.text_value_mut(target) else {
            return;
        };
        text.push(c);
        self.touch(target);
        self.revalidate();
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) {
        let target = self.active_target();
        let Some(text) = self.text_value_mut(target) else {
            return;
        };
        text.pop();
        self.touch(target);
        self.revalidate();
    }

    /// Select a gender radio option
    pub fn select_gender(&mut self, gender: Gender) {
        self.values.gender = gender;
        self.touch(FocusTarget::GenderOption(gender));
        self.revalidate();
    }

    /// Toggle a preference checkbox; insertion order is toggle order
    pub fn toggle_preference(&mut self, preference: Preference) {
        if let Some(position) = self.values.preferences.iter().position(|p| *p == preference) {
            self.values.preferences.remove(position);
        } else {
            self.values.preferences.push(preference);
        }
        self.touch(FocusTarget::PreferenceOption(preference));
        self.revalidate();
    }

    /// Cycle the type select of the pet at `index`
    pub fn cycle_pet_type(&mut self, index: usize) {
        let Some(pet) = self.values.pets.get_mut(index) else {
            return;
        };
        pet.pet_type = pet.pet_type.next();
        self.touch(FocusTarget::PetType(index));
        self.revalidate();
    }

    /// Append a new pet row with a fresh identity and default type
    pub fn add_pet(&mut self) {
        self.values.pets.push(PetEntry::new());
        self.revalidate();
    }

    /// Remove the pet row at `index`; later rows shift down by one.
    ///
    /// Touched state for pet paths is dropped wholesale since the indices in
    /// those paths no longer line up.
    pub fn remove_pet(&mut self, index: usize) {
        if index >= self.values.pets.len() {
            return;
        }
        self.values.pets.remove(index);
        self.touched.retain(|path| !path.starts_with("pets."));
        let count = self.field_count();
        if self.active_index >= count {
            self.active_index = count - 1;
        }
        self.revalidate();
    }

    /// Mark every field path touched (submit attempt)
    pub fn touch_all(&mut self) {
        for target in self.targets() {
            if let Some(path) = target.path() {
                self.touched.insert(path);
            }
        }
    }

    /// Recompute the full error map from the current values
    pub fn revalidate(&mut self) {
        self.errors = validation::validate(&self.values);
    }

    /// Inline error for a field path, shown only once the path is touched
    pub fn visible_error(&self, path: &str) -> Option<&str> {
        if !self.touched.contains(path) {
            return None;
        }
        self.errors.get(path).map(String::as_str)
    }

    /// Clear the form back to initial defaults
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.touched.clear();
        self.active_index = 0;
    }

    fn touch(&mut self, target: FocusTarget) {
        if let Some(path) = target.path() {
            self.touched.insert(path);
        }
    }

    fn text_value_mut(&mut self, target: FocusTarget) -> Option<&mut String> {
        match target {
            FocusTarget::FirstName => Some(&mut self.values.first_name),
            FocusTarget::LastName => Some(&mut self.values.last_name),
            FocusTarget::Email => Some(&mut self.values.email),
            FocusTarget::Pass => Some(&mut self.values.pass),
            FocusTarget::PetName(index) => self.values.pets.get_mut(index).map(|pet| &mut pet.name),
            _ => None,
        }
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        self.targets().len()
    }
    fn active_field(&self) -> usize {
        self.active_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_index = index.min(self.field_count() - 1);
    }
}
