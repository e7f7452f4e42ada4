//! Interactive question collaborators

use anyhow::{anyhow, Result};
use dialoguer::{Confirm, Input};
use std::cell::RefCell;
use std::collections::HashMap;

/// A single question asked by the collector.
pub struct Question<'a> {
    /// Answer key, e.g. `projectName`
    pub name: &'a str,
    pub message: &'a str,
    pub default: Option<String>,
}

impl<'a> Question<'a> {
    pub fn new(name: &'a str, message: &'a str) -> Self {
        Question {
            name,
            message,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default.filter(|value| !value.is_empty());
        self
    }
}

pub trait Prompter {
    /// Asks for free text, returning the default when the answer is left empty
    fn input(&self, question: &Question) -> Result<String>;

    /// Asks a yes/no question
    fn confirm(&self, question: &Question, default: bool) -> Result<bool>;

    /// Shows a message without expecting an answer
    fn say(&self, message: &str);
}

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct TerminalPrompter {}

impl Prompter for TerminalPrompter {
    fn input(&self, question: &Question) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(question.message)
            .allow_empty(true);
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }
        let answer = input
            .interact_text()
            .map_err(|e| anyhow!("Prompt error: {e}"))?;
        Ok(answer)
    }

    fn confirm(&self, question: &Question, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question.message)
            .default(default)
            .interact()
            .map_err(|e| anyhow!("Prompt error: {e}"))
    }

    fn say(&self, message: &str) {
        println!("{message}");
    }
}

/// Prompter answering from a fixed script of answers keyed by question name.
///
/// Questions without a scripted answer take their default, which makes it
/// suitable for non-interactive runs and tests.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: HashMap<String, String>,
    flags: HashMap<String, bool>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn answer(mut self, name: &str, value: &str) -> Self {
        self.answers.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.to_owned(), value);
        self
    }

    /// Names of the questions asked so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn record(&self, question: &Question) {
        self.asked.borrow_mut().push(question.name.to_owned());
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, question: &Question) -> Result<String> {
        self.record(question);
        match self.answers.get(question.name) {
            Some(answer) if !answer.is_empty() => Ok(answer.clone()),
            _ => Ok(question.default.clone().unwrap_or_default()),
        }
    }

    fn confirm(&self, question: &Question, default: bool) -> Result<bool> {
        self.record(question);
        Ok(self.flags.get(question.name).copied().unwrap_or(default))
    }

    fn say(&self, message: &str) {
        log::debug!("{message}");
    }
}
