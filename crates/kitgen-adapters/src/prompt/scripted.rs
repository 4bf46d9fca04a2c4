//! Scripted prompter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use kitgen_core::{
    application::{ApplicationError, ports::Prompter},
    error::KitResult,
};

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

/// Answers questions from a fixed list and records what was asked.
///
/// Running out of answers is an error so tests notice extra questions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    script: Arc<Mutex<Script>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Arc::new(Mutex::new(Script {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
            })),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .asked
            .clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .answers
            .len()
    }
}

impl Prompter for ScriptedPrompter {
    fn note(&self, _lines: &[String]) -> KitResult<()> {
        Ok(())
    }

    fn ask(&self, question: &str) -> KitResult<String> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| ApplicationError::AdapterState("script poisoned".into()))?;
        script.asked.push(question.to_string());
        script.answers.pop_front().ok_or_else(|| {
            ApplicationError::AdapterState(format!("no scripted answer for '{question}'")).into()
        })
    }
}
