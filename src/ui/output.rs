use crate::classify::Classification;
use crate::syntax::TextRange;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::TREE, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

/// Report a successful move.
pub fn moved(kind: &str, caret: usize, selection: Option<TextRange>) {
    let target = match selection {
        Some(range) => format!("{} {}", caret, format!("[{}]", range).style(theme().range.clone())),
        None => caret.style(theme().range.clone()).to_string(),
    };
    println!("{} {} {}", Icons::TARGET, kind.style(theme().kind.clone()), target);
}

pub fn no_movement(motion: &str) {
    println!(
        "{} {} {}",
        Icons::STOP,
        dim("no movement possible for"),
        motion.style(theme().warn.clone())
    );
}

/// One line of a tree dump; trivial nodes are dimmed, the node under the
/// caret is marked.
pub fn tree_line(
    depth: usize,
    kind: &str,
    range: TextRange,
    classification: Classification,
    current: bool,
) {
    let marker = if current { Icons::CURRENT } else { " " };
    let indent = "  ".repeat(depth);
    let label = match classification {
        Classification::Significant => kind.style(theme().kind.clone()).to_string(),
        Classification::Trivial => kind.style(theme().trivial.clone()).to_string(),
    };
    println!(
        "{} {}{} {} {}",
        marker,
        indent,
        Icons::BRANCH.style(theme().dim.clone()),
        label,
        range.style(theme().range.clone())
    );
}
