#![allow(clippy::module_inception)]

use std::fmt::Display;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod samples;
pub mod semantic;

extern crate regex;

/// A location in the source text: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// The position of the first character of a source text.
    pub fn start() -> Self {
        Position::new(0, 1, 1)
    }

    /// Used for nodes that were not built from source, e.g. in tests.
    pub fn null() -> Self {
        Position::new(0, 0, 0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` inside that line. An offset at or past the
/// end of the source resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        last = Some((line_number, line.to_string(), line.len()));
        start = end;
        line_number += 1;
    }

    if pos >= source.len() {
        // Trailing newline means EOF sits on a fresh, empty line.
        if source.ends_with('\n') || source.is_empty() {
            return Some((line_number, String::new(), 0));
        }
        return last;
    }

    None
}

/// Renders an error as a caret diagnostic pointing into `source`.
///
/// ```text
/// Error: TypeMismatch (BinaryOp `add` expects `Integer`, received `Integer` and `Text`)
/// -> main.vls
///   |
/// 5 | print(x add y);
///   | ------^
/// ```
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) =
        get_line_at_position(source, error.get_position().offset)
    else {
        output.push_str(&format!("   {}\n", error));
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    // Offsets are in bytes, the caret is drawn in characters
    let line_column = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = line_column.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

/// Runs the whole front end over `source`: tokenize, parse, analyze.
///
/// Returns the validated program, or the first error from whichever stage
/// failed.
pub fn compile(source: &str) -> Result<Program, Error> {
    let program = parser::parser::parse(source)?;
    semantic::analyzer::analyze(&program)?;
    debug!(statements = program.body.len(), "program validated");

    Ok(program)
}
