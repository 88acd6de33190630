//! Signup form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FocusTarget, Gender, PetEntry, Preference, SignupForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the signup form with all fields and the pets roster
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let pet_count = form.values.pets.len();

    let block = Block::default()
        .title(" Signup ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(3),             // First Name
        Constraint::Length(3),             // Last Name
        Constraint::Length(1),             // Gender label
        Constraint::Length(BUTTON_HEIGHT), // Gender options
        Constraint::Length(1),             // Preferences label
        Constraint::Length(BUTTON_HEIGHT), // Preference options
        Constraint::Length(3),             // Mail
        Constraint::Length(3),             // Password
        Constraint::Length(BUTTON_HEIGHT), // Add Pet
    ];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(pet_count));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    draw_field(
        frame,
        chunks[0],
        "First Name",
        &form.values.first_name,
        "First Name",
        form.visible_error("firstName"),
        form.is_active(FocusTarget::FirstName),
    );
    draw_field(
        frame,
        chunks[1],
        "Last Name",
        &form.values.last_name,
        "Last Name",
        form.visible_error("lastName"),
        form.is_active(FocusTarget::LastName),
    );

    frame.render_widget(
        Paragraph::new("Gender:").style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
    draw_gender_options(frame, chunks[3], form);

    frame.render_widget(
        Paragraph::new("Preferences:").style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
    draw_preference_options(frame, chunks[5], form);

    draw_field(
        frame,
        chunks[6],
        "Mail",
        &form.values.email,
        "Mail",
        form.visible_error("email"),
        form.is_active(FocusTarget::Email),
    );
    draw_field(
        frame,
        chunks[7],
        "Password",
        &form.values.pass,
        "Password",
        form.visible_error("pass"),
        form.is_active(FocusTarget::Pass),
    );

    let add_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(0)])
        .split(chunks[8]);
    render_button(
        frame,
        add_chunks[0],
        "Add Pet",
        form.is_active(FocusTarget::AddPet),
        true,
    );

    for (index, pet) in form.values.pets.iter().enumerate() {
        draw_pet_row(frame, chunks[9 + index], form, index, pet);
    }

    let submit_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(chunks[9 + pet_count]);
    render_button(
        frame,
        submit_chunks[0],
        "submit",
        form.is_active(FocusTarget::Submit),
        !form.submitting,
    );
}

fn draw_gender_options(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, option) in Gender::OPTIONS.iter().enumerate() {
        let marker = if form.values.gender == *option {
            "(•)"
        } else {
            "( )"
        };
        render_button(
            frame,
            chunks[index],
            &format!("{marker} {}", option.label()),
            form.is_active(FocusTarget::GenderOption(*option)),
            true,
        );
    }
}

fn draw_preference_options(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(17),
            Constraint::Length(14),
            Constraint::Length(19),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, option) in Preference::OPTIONS.iter().enumerate() {
        let marker = if form.values.preferences.contains(option) {
            "[x]"
        } else {
            "[ ]"
        };
        render_button(
            frame,
            chunks[index],
            &format!("{marker} {}", option.label()),
            form.is_active(FocusTarget::PreferenceOption(*option)),
            true,
        );
    }
}

/// One pet row: name field, type select, remove button
fn draw_pet_row(frame: &mut Frame, area: Rect, form: &SignupForm, index: usize, pet: &PetEntry) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(5),
        ])
        .split(area);

    draw_field(
        frame,
        chunks[0],
        "Pet Name",
        &pet.name,
        "Select Pet",
        form.visible_error(&format!("pets.{index}.name")),
        form.is_active(FocusTarget::PetName(index)),
    );
    render_button(
        frame,
        chunks[1],
        &format!("< {} >", pet.pet_type.label()),
        form.is_active(FocusTarget::PetType(index)),
        true,
    );
    render_button(
        frame,
        chunks[2],
        "x",
        form.is_active(FocusTarget::PetRemove(index)),
        true,
    );
}
