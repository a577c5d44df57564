//! # Rendering Module
//!
//! Turns API results into terminal text. Every function returns a `String`
//! so output can be asserted on without capturing stdout; the handlers in
//! `commands.rs` decide where it goes.
//!
//! Layout math (width, truncation) stays Unicode-aware via `unicode-width`;
//! colors come from `colored` and are switched off when stdout is not a
//! terminal (see `cli::init_output`).

use colored::*;
use docfind::api::{CmdMessage, MessageLevel};
use docfind::avatar::{experience_label, image_url};
use docfind::filter::{FilterState, SortBy};
use docfind::model::Doctor;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
const CARD_INDENT: &str = "     ";
const INTRO_WIDTH: usize = 70;

pub fn render_summary(count: usize, sort_by: Option<SortBy>) -> String {
    let mut output = format!("Found {} doctors", count);
    if let Some(sort_by) = sort_by {
        let sorted = format!("Sorted by: {}", sort_by.label());
        let gap = LINE_WIDTH.saturating_sub(output.width() + sorted.width()).max(2);
        output.push_str(&" ".repeat(gap));
        output.push_str(&sorted.dimmed().to_string());
    }
    output.push('\n');
    output
}

pub fn render_doctor_list(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return format!(
            "{}\n",
            "No doctors found matching your criteria".dimmed()
        );
    }

    let mut output = String::new();
    for (i, doctor) in doctors.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&render_card(i + 1, doctor));
    }
    output
}

fn render_card(position: usize, doctor: &Doctor) -> String {
    let mut output = String::new();

    let idx = format!("{:>3}. ", position);
    let fee = doctor.fees.trim();
    let available = LINE_WIDTH.saturating_sub(idx.width() + fee.width() + 1);
    let name = truncate_to_width(&doctor.name, available);
    let padding = " ".repeat(available.saturating_sub(name.width()) + 1);
    output.push_str(&format!(
        "{}{}{}{}\n",
        idx.yellow(),
        name.bold(),
        padding,
        fee.green()
    ));

    let specialities: Vec<&str> = doctor.speciality_names().collect();
    if !specialities.is_empty() {
        output.push_str(&format!("{}{}\n", CARD_INDENT, specialities.join(", ").cyan()));
    }

    let mut details = vec![experience_label(&doctor.experience)];
    if !doctor.languages.is_empty() {
        details.push(doctor.languages.join(", "));
    }
    output.push_str(&format!("{}{}\n", CARD_INDENT, details.join(" · ")));

    let clinic: Vec<&str> = [
        doctor.clinic.name.as_str(),
        doctor.clinic.address.locality.as_str(),
        doctor.clinic.address.city.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if !clinic.is_empty() {
        output.push_str(&format!("{}{}\n", CARD_INDENT, clinic.join(", ")));
    }

    let mut badges = Vec::new();
    if doctor.video_consult {
        badges.push("Video Consult".green().to_string());
    }
    if doctor.in_clinic {
        badges.push("In Clinic".magenta().to_string());
    }
    if !badges.is_empty() {
        output.push_str(&format!("{}{}\n", CARD_INDENT, badges.join("  ")));
    }

    let intro = doctor.doctor_introduction.trim();
    if !intro.is_empty() {
        let intro = truncate_to_width(&intro.replace('\n', " "), INTRO_WIDTH);
        output.push_str(&format!("{}{}\n", CARD_INDENT, intro.italic()));
    }

    output.push_str(&format!(
        "{}{}\n",
        CARD_INDENT,
        image_url(doctor, false).dimmed()
    ));
    output
}

pub fn render_suggestions(suggestions: &[Doctor]) -> String {
    let mut output = String::new();
    for (i, doctor) in suggestions.iter().enumerate() {
        output.push_str(&format!("  {} {}\n", format!("{}.", i + 1).yellow(), doctor.name));
    }
    output
}

/// Speciality checklist; `selected` names are ticked.
pub fn render_specialities(available: &[String], selected: &[String]) -> String {
    if available.is_empty() {
        return format!("{}\n", "No specialities available.".dimmed());
    }
    let mut output = String::new();
    for name in available {
        let mark = if selected.iter().any(|s| s == name) {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };
        output.push_str(&format!("  {} {}\n", mark, name));
    }
    output
}

pub fn render_filters(state: &FilterState) -> String {
    let unset = || "-".dimmed().to_string();

    let search = if state.search.is_empty() {
        unset()
    } else {
        state.search.clone()
    };
    let consultation = state
        .consultation_type
        .map(|t| t.as_param().to_string())
        .unwrap_or_else(|| "All".to_string());
    let specialities = if state.specialities.is_empty() {
        unset()
    } else {
        state.specialities.join(", ")
    };
    let sort = state
        .sort_by
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| "None".to_string());

    format!(
        "  Search:        {}\n  Consultation:  {}\n  Specialities:  {}\n  Sort by:       {}\n",
        search, consultation, specialities, sort
    )
}

pub fn render_url(url: &str) -> String {
    format!("{} {}\n", "URL:".dimmed(), url.underline())
}

pub fn render_error_panel(message: &str) -> String {
    format!(
        "{}\n  {}\n",
        "Error loading doctors".red().bold(),
        message.red()
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    eprint!("{}", render_messages(messages));
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
