//! Plain stdout messages printed outside the full-screen UI.

use std::fmt::Display;

use crossterm::style::{Attribute, Color, Stylize};

const SUCCESS: Color = Color::AnsiValue(34);
const ERROR: Color = Color::AnsiValue(196);
const INFO: Color = Color::AnsiValue(244);

pub fn print_info(message: &str) {
    println!("{}", message.with(INFO).attribute(Attribute::Italic));
}

pub fn print_success(message: &str) {
    println!("{}", message.with(SUCCESS).bold());
}

pub fn print_error(message: &str, err: &dyn Display) {
    println!("{} {err}", message.with(ERROR).bold());
}
