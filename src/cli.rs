//! Navigation steps accepted by the `navigate` command.

use std::str::FromStr;

use crate::navigation::{NavigationState, Router, RouterError};

/// One scripted navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Push(String),
    Replace(String),
    Named(String),
    Back,
    Forward,
    External(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid step \"{0}\" (expected push:/p, replace:/p, name:N, back, forward, external:URL)")]
pub struct StepParseError(pub String);

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => return Ok(Step::Back),
            "forward" => return Ok(Step::Forward),
            _ => {}
        }

        let (kind, arg) = s
            .split_once(':')
            .filter(|(_, arg)| !arg.is_empty())
            .ok_or_else(|| StepParseError(s.to_string()))?;

        match kind {
            "push" => Ok(Step::Push(arg.to_string())),
            "replace" => Ok(Step::Replace(arg.to_string())),
            "name" => Ok(Step::Named(arg.to_string())),
            "external" => Ok(Step::External(arg.to_string())),
            _ => Err(StepParseError(s.to_string())),
        }
    }
}

impl Step {
    /// Apply the step. `Ok(None)` means an external URL was not ours.
    pub fn apply(&self, router: &mut Router) -> Result<Option<NavigationState>, RouterError> {
        Ok(match self {
            Step::Push(to) => Some(router.push(to)),
            Step::Replace(to) => Some(router.replace(to)),
            Step::Named(name) => Some(router.push_named(name)?),
            Step::Back => Some(router.back()),
            Step::Forward => Some(router.forward()),
            Step::External(url) => router.sync_external(url),
        })
    }
}
