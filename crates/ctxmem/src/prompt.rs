//! Terminal prompts.

use std::cell::RefCell;

use colored::Colorize;
use ctxmem_core::host::{PickItem, Prompter};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tracing::debug;

/// [`Prompter`] backed by dialoguer widgets on stdin/stderr.
#[derive(Default)]
pub struct TerminalPrompter {
    /// Answer for the next `input` call, taken instead of prompting.
    preset_input: RefCell<Option<String>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next text prompt with `text` (e.g. passed on the command line).
    pub fn with_input(text: Option<String>) -> Self {
        Self {
            preset_input: RefCell::new(text),
        }
    }
}

/// Picker row: label, then description and detail when present.
fn item_line(item: &PickItem) -> String {
    let mut line = item.label.bold().to_string();
    if let Some(description) = &item.description {
        line.push_str(&format!("  {}", description.dimmed()));
    }
    if let Some(detail) = &item.detail {
        line.push_str(&format!("\n    {}", detail));
    }
    line
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, placeholder: &str) -> Option<String> {
        if let Some(text) = self.preset_input.borrow_mut().take() {
            return Some(text);
        }

        eprintln!("{}", placeholder.dimmed());
        match Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(error = %e, "Input prompt aborted");
                None
            }
        }
    }

    fn pick(&self, placeholder: &str, items: &[PickItem]) -> Option<usize> {
        let lines: Vec<String> = items.iter().map(item_line).collect();
        match Select::with_theme(&ColorfulTheme::default())
            .with_prompt(placeholder)
            .items(lines.as_slice())
            .default(0)
            .interact_opt()
        {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "Picker aborted");
                None
            }
        }
    }

    fn info(&self, message: &str) {
        println!("{}", message.green());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn info_with_actions(&self, message: &str, actions: &[&str]) -> Option<usize> {
        println!("{} {}", "💡".yellow(), message.cyan());
        match Select::with_theme(&ColorfulTheme::default())
            .items(actions)
            .default(0)
            .interact_opt()
        {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "Action prompt aborted");
                None
            }
        }
    }
}
