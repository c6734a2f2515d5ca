// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use dialoguer::{Confirm as ConfirmPrompt, theme::ColorfulTheme};

use crate::error::Result;

/// Asks the user whether a destructive action should go ahead.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Blocking yes/no prompt on the terminal. Defaults to "no".
#[derive(Default)]
pub struct DialoguerConfirm {
    theme: ColorfulTheme,
}

impl Confirm for DialoguerConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = ConfirmPrompt::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

/// Answers yes without asking (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
