//! Form rendering module

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
