//! User-facing status lines: one icon, one colour per severity.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Section header printed above each table
pub fn header<T: fmt::Display>(msg: T) {
    let style = Style::new().bold().fg(Colour::Cyan);
    println!("\n{}", style.paint(format!("=== {msg} ===")));
}

/// Dimmed trailing note (hidden rows, hints)
pub fn note<T: fmt::Display>(msg: T) {
    println!("{}", Style::new().dimmed().paint(msg.to_string()));
}
