//! Field prompts: one retry loop per semantic field type.
//!
//! Each prompt returns only once the input satisfies its [`FieldKind`]
//! grammar, in canonical form.

use crate::crypto::hex_digest;
use crate::utils::{
    format::capitalize,
    sanitize::{FieldKind, Sanitize},
    terminal::{PromptResult, Terminal},
};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Prompts for a username (5-32 chars, alphanumeric plus single `.`/`_` separators).
    pub fn input_username(&mut self) -> PromptResult<String> {
        self.ask(
            "Enter username (Minimum 5 Characters): ",
            false,
            &[Sanitize::Field(FieldKind::Username)],
        )
    }

    /// Prompts for a password and returns its hex digest.
    ///
    /// Without `reconfirm` any non-empty entry is accepted as is (a login).
    /// With `reconfirm` the entry must satisfy the password grammar and be typed
    /// again identically; answering `0` at the confirmation restarts from the
    /// first entry.
    pub fn input_password(&mut self, reconfirm: bool) -> PromptResult<String> {
        loop {
            let password = self.prompt_line("Enter Password: ", false)?;
            if !reconfirm {
                return Ok(hex_digest(&password));
            }

            let grammar = [Sanitize::Field(FieldKind::Password)];
            if let Err(e) = Sanitize::execute(&password, &grammar) {
                self.say(e)?;
                continue;
            }

            loop {
                let confirm = self.prompt_line("Confirm Password (Enter 0 to reset): ", false)?;
                if confirm == password {
                    return Ok(hex_digest(&password));
                }
                if confirm == "0" {
                    break;
                }
                self.say("Passwords Mismatched")?;
            }
        }
    }

    /// Prompts for a name of the given kind (`"First"`, `"Company"`, ...) and
    /// returns it title-cased.
    pub fn input_name(&mut self, kind: &str, allow_empty: bool) -> PromptResult<String> {
        let name = self.ask(
            &format!("Enter {} Name: ", kind),
            allow_empty,
            &[Sanitize::Field(FieldKind::Name)],
        )?;
        Ok(capitalize(&name))
    }

    pub fn input_phone(&mut self, allow_empty: bool) -> PromptResult<String> {
        self.ask(
            "Enter Phone Number (10 Digits): ",
            allow_empty,
            &[Sanitize::Field(FieldKind::Phone)],
        )
    }

    pub fn input_email(&mut self, allow_empty: bool) -> PromptResult<String> {
        self.ask(
            "Enter Email: ",
            allow_empty,
            &[Sanitize::Field(FieldKind::Email)],
        )
    }

    /// Prompts for a calendar-valid `dd/mm/yyyy` date and returns it as typed.
    pub fn input_date(&mut self, label: &str) -> PromptResult<String> {
        self.ask(
            &format!("Enter {} (dd/mm/yyyy): ", label),
            false,
            &[Sanitize::Field(FieldKind::Date)],
        )
    }
}
