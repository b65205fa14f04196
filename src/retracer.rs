use log::{debug, trace};
use serde::Serialize;
use std::fmt;

///
/// One step of the way home: its position in the return path (starting at 1)
/// and the action that undoes the matching logged action.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnStep {
    pub step: usize,
    pub action: String,
}

impl fmt::Display for ReturnStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.step, self.action)
    }
}

///
/// Stack of the actions taken so far. Actions are kept exactly as given;
/// only `invert` looks at the keyword.
///
#[derive(Debug, Default, Clone)]
pub struct ActionLog {
    actions: Vec<String>,
}

impl ActionLog {
    pub fn new() -> ActionLog {
        ActionLog {
            actions: Vec::new(),
        }
    }

    pub fn log(&mut self, action: impl Into<String>) {
        let action = action.into();
        trace!("Logging action {:?}", action);
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Logged actions, oldest first
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    ///
    /// Drains the log, most recent action first, and returns the inverted
    /// actions numbered in the order they were popped.
    ///
    pub fn retrace(&mut self) -> Vec<ReturnStep> {
        debug!("Retracing {} actions", self.actions.len());
        let mut steps = Vec::with_capacity(self.actions.len());
        while let Some(action) = self.actions.pop() {
            steps.push(ReturnStep {
                step: steps.len() + 1,
                action: invert(&action),
            });
        }
        steps
    }
}

///
/// Returns the action that undoes `action`.
///
/// Turns are mirrored by swapping the keyword; anything after the keyword is
/// kept as is. `FWD` and unknown keywords pass through unchanged.
///
pub fn invert(action: &str) -> String {
    let trimmed = action.trim_start();
    let keyword = trimmed.split_whitespace().next().unwrap_or("");
    let rest = &trimmed[keyword.len()..];
    match keyword {
        "LEFT" => format!("RIGHT{}", rest),
        "RIGHT" => format!("LEFT{}", rest),
        _ => action.to_string(),
    }
}
