use crate::core::{AssetType, Location};
use anyhow::Result;
use console::Term;
use std::io::{BufRead, IsTerminal};

/// Outcome of a numbered menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice<T> {
    Selected(T),
    /// Non-numeric or out-of-range input.
    Invalid,
}

impl<T> MenuChoice<T> {
    fn from_index(input: &str, options: &[T]) -> Self
    where
        T: Copy,
    {
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => MenuChoice::Selected(options[n - 1]),
            _ => MenuChoice::Invalid,
        }
    }
}

pub fn parse_location(input: &str) -> MenuChoice<Location> {
    MenuChoice::from_index(input, &Location::ALL)
}

pub fn parse_asset_type(input: &str) -> MenuChoice<AssetType> {
    MenuChoice::from_index(input, &AssetType::ALL)
}

pub fn location_menu() -> String {
    let mut menu = String::from("Välj Land/Kontor:");
    for (i, location) in Location::ALL.iter().enumerate() {
        menu.push_str(&format!("\n{}. {} ({})", i + 1, location, location.currency()));
    }
    menu
}

pub fn asset_type_menu() -> String {
    let mut menu = String::from("Välj Tillgångstyp:");
    for (i, asset_type) in AssetType::ALL.iter().enumerate() {
        let label = match asset_type {
            AssetType::Laptop => "Laptops/Datorer",
            AssetType::Mobiltelefon => "Mobiltelefoner",
        };
        menu.push_str(&format!("\n{}. {}", i + 1, label));
    }
    menu
}

pub fn is_affirmative(key: char) -> bool {
    key.eq_ignore_ascii_case(&'y')
}

/// Source of user input. `None` means the input stream is closed.
pub trait Prompt {
    fn read_line(&mut self) -> Result<Option<String>>;

    /// A single keystroke. Falls back to the first character of a line.
    fn read_key(&mut self) -> Result<Option<char>> {
        Ok(self
            .read_line()?
            .map(|line| line.trim().chars().next().unwrap_or('\n')))
    }
}

/// Reads from the process's stdin, using raw keystrokes when attached to a terminal.
pub struct TerminalPrompt {
    term: Term,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_key(&mut self) -> Result<Option<char>> {
        if !(self.term.is_term() && std::io::stdin().is_terminal()) {
            return self
                .read_line()
                .map(|line| line.map(|l| l.trim().chars().next().unwrap_or('\n')));
        }
        let key = self.term.read_char()?;
        self.term.write_line(&key.to_string())?;
        Ok(Some(key))
    }
}
