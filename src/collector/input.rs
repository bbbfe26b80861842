//! Input sources for interactive collection
//!
//! [`InputSource`] abstracts the blocking "ask a question, get a line"
//! capability so attribute collection can run against the console or
//! against scripted answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{theme::ColorfulTheme, Input};
use log::debug;

use crate::error::{OktaError, Result};

/// Blocking prompt capability
pub trait InputSource {
    /// Ask for one value; fails with `InputAborted` when input is closed
    fn prompt(&mut self, label: &str) -> Result<String>;
}

/// Console input: dialoguer on a terminal, plain line reads otherwise
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn prompt(&mut self, label: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| OktaError::InputAborted(e.to_string()));
        }

        eprint!("{}: ", label);
        let _ = io::stderr().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Err(OktaError::InputAborted("end of input".to_string())),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => Err(OktaError::InputAborted(e.to_string())),
        }
    }
}

/// Pre-recorded answers, consumed in order
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Labels prompted so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| OktaError::InputAborted(format!("no scripted answer for '{}'", label)))
    }
}

/// Ask until the answer is `y` or `n`
pub fn ask_yes_no(input: &mut dyn InputSource, question: &str) -> Result<bool> {
    loop {
        let answer = input.prompt(question)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => debug!("Unrecognized answer '{}', asking again", other),
        }
    }
}

/// Ask until the answer is non-empty
pub fn prompt_required(input: &mut dyn InputSource, label: &str) -> Result<String> {
    loop {
        let answer = input.prompt(label)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        println!("{} is required.", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut input = ScriptedInput::new(["Jane", "Doe"]);
        assert_eq!(input.prompt("First name").unwrap(), "Jane");
        assert_eq!(input.prompt("Last name").unwrap(), "Doe");
        assert_eq!(input.asked(), &["First name", "Last name"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_exhausted_aborts() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        match input.prompt("Email") {
            Err(OktaError::InputAborted(msg)) => assert!(msg.contains("Email")),
            other => panic!("Expected InputAborted, got {:?}", other),
        }
    }

    #[test]
    fn test_ask_yes_no_repeats_until_valid() {
        let mut input = ScriptedInput::new(["maybe", "", "Y"]);
        assert!(ask_yes_no(&mut input, "Continue? (y/n)").unwrap());
        assert_eq!(input.asked().len(), 3);
    }

    #[test]
    fn test_prompt_required_skips_blank() {
        let mut input = ScriptedInput::new(["  ", " Admins "]);
        assert_eq!(prompt_required(&mut input, "Group name").unwrap(), "Admins");
        assert_eq!(input.asked().len(), 2);
    }

    #[test]
    fn test_ask_yes_no_no() {
        let mut input = ScriptedInput::new(["n"]);
        assert!(!ask_yes_no(&mut input, "Continue? (y/n)").unwrap());
    }

    #[test]
    fn test_ask_yes_no_propagates_abort() {
        let mut input = ScriptedInput::new(["what"]);
        assert!(matches!(
            ask_yes_no(&mut input, "Continue? (y/n)"),
            Err(OktaError::InputAborted(_))
        ));
    }
}
