//! Form field option values

use serde::Serialize;

/// Gender radio group value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gender {
    /// Serializes as the empty string, matching an untouched radio group
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    /// The selectable options, in display order
    pub const OPTIONS: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Preference checkbox value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Preference {
    Chocolate,
    Toffee,
    #[serde(rename = "Chewing-gum")]
    ChewingGum,
}

impl Preference {
    /// The selectable options, in display order
    pub const OPTIONS: [Preference; 3] =
        [Preference::Chocolate, Preference::Toffee, Preference::ChewingGum];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chocolate => "Chocolate",
            Self::Toffee => "Toffee",
            Self::ChewingGum => "Chewing Gum",
        }
    }
}

/// Pet type select value
///
/// Serialized casing is uneven (`cat` vs `Dog`/`Frog`) and kept as-is so
/// submitted snapshots keep the established wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PetType {
    #[serde(rename = "cat")]
    Cat,
    Dog,
    #[default]
    Frog,
}

impl PetType {
    pub fn next(&self) -> Self {
        match self {
            Self::Cat => Self::Dog,
            Self::Dog => Self::Frog,
            Self::Frog => Self::Cat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Dog => "Dog",
            Self::Frog => "Frog",
        }
    }
}

/// A focusable control in the signup form, in tab order.
///
/// Each radio and checkbox option is its own target, matching the
/// one-control-per-option layout of the rendered form. Pet indices refer to
/// the current pet list and shift when entries are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstName,
    LastName,
    GenderOption(Gender),
    PreferenceOption(Preference),
    Email,
    Pass,
    PetName(usize),
    PetType(usize),
    PetRemove(usize),
    AddPet,
    Submit,
}

impl FocusTarget {
    /// Field path used for touched tracking and error lookup,
    /// e.g. `lastName` or `pets.0.name`. Buttons have no path.
    pub fn path(&self) -> Option<String> {
        match self {
            Self::FirstName => Some("firstName".to_string()),
            Self::LastName => Some("lastName".to_string()),
            Self::GenderOption(_) => Some("gender".to_string()),
            Self::PreferenceOption(_) => Some("preferences".to_string()),
            Self::Email => Some("email".to_string()),
            Self::Pass => Some("pass".to_string()),
            Self::PetName(index) => Some(format!("pets.{index}.name")),
            Self::PetType(index) => Some(format!("pets.{index}.type")),
            Self::PetRemove(_) | Self::AddPet | Self::Submit => None,
        }
    }

    /// Whether this target accepts text editing keys
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::Pass | Self::PetName(_)
        )
    }
}
