//! The player interface boundary: everything the core needs from the
//! outside world, and the console implementation of it.
//!
//! The core only ever asks for a name, a menu choice, or delivery of a
//! message. Invalid input never crosses this boundary; `choose` re-prompts
//! until it can return a valid index.

use std::io::{self, Write};

use crossterm::style::Stylize;

pub trait PlayerInterface {
    /// Returns the entered character name, possibly empty. Blank names are
    /// defaulted by character creation, not here.
    fn prompt_name(&mut self) -> String;

    /// Presents a numbered menu and returns the index of the selection.
    /// Always returns a valid index into `options`.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> usize;

    /// Delivers informational or narrative text.
    fn notify(&mut self, message: &str);
}

impl<I: PlayerInterface + ?Sized> PlayerInterface for &mut I {
    fn prompt_name(&mut self) -> String {
        (**self).prompt_name()
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> usize {
        (**self).choose(prompt, options)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// Line-based stdin/stdout implementation with styled prompts.
#[derive(Debug, Default)]
pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            // stdin closed: nothing further can be asked of the player
            Ok(0) | Err(_) => {
                println!();
                std::process::exit(0);
            }
            Ok(_) => line.trim().to_string(),
        }
    }
}

impl PlayerInterface for ConsoleInterface {
    fn prompt_name(&mut self) -> String {
        print!("{}", "Enter your name: ".bold());
        let _ = io::stdout().flush();
        self.read_line()
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> usize {
        loop {
            println!("{}", prompt.bold());
            for (number, option) in options.iter().enumerate() {
                println!("  {}. {}", number + 1, option);
            }
            print!("Enter a number: ");
            let _ = io::stdout().flush();
            if let Ok(choice) = self.read_line().parse::<usize>() {
                if (1..=options.len()).contains(&choice) {
                    return choice - 1;
                }
            }
            println!("{}\n", "Invalid input, please try again.".red());
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
