//! Shared helpers for changepack-core integration tests

use std::collections::VecDeque;
use std::path::Path;

use changepack_core::{ConfirmationPort, Decision, Prompt, Result};

/// Answers prompts from a fixed script and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<(Prompt, Decision)>,
    pub asked: Vec<Prompt>,
}

#[allow(dead_code)]
impl ScriptedConfirm {
    /// A port that must never be asked anything.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[(Prompt, Decision)]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl ConfirmationPort for ScriptedConfirm {
    fn confirm(&mut self, prompt: Prompt, _archive: &Path) -> Result<Decision> {
        self.asked.push(prompt);
        match self.answers.pop_front() {
            Some((expected, decision)) => {
                assert_eq!(expected, prompt, "prompts asked out of order");
                Ok(decision)
            }
            None => panic!("unexpected prompt: {prompt:?}"),
        }
    }
}
