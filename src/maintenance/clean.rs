//! Cache and journal cleanup
//!
//! The plan is fixed. By default it is only shown; with `--apply` every
//! action runs through the elevation wrapper, and a failing action does not
//! stop the next one.

use serde::Serialize;
use tracing::{info, warn};

use crate::elevate::Elevator;

/// A single cleanup step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanAction {
    pub name: &'static str,
    #[serde(serialize_with = "serialize_command")]
    pub command: &'static [&'static str],
}

fn serialize_command<S: serde::Serializer>(
    command: &&'static [&'static str],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&command.join(" "))
}

impl CleanAction {
    /// Command line as typed by a user
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Default cleanup plan
pub const CLEAN_PLAN: &[CleanAction] = &[
    CleanAction {
        name: "DNF cache cleanup",
        command: &["dnf", "clean", "all"],
    },
    CleanAction {
        name: "Shrink journal logs (1 week)",
        command: &["journalctl", "--vacuum-time=7d"],
    },
];

/// Whether the plan is only shown or actually run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanMode {
    DryRun,
    Apply,
}

impl CleanMode {
    pub fn from_apply_flag(apply: bool) -> Self {
        if apply {
            Self::Apply
        } else {
            Self::DryRun
        }
    }
}

impl std::fmt::Display for CleanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DryRun => write!(f, "DRY-RUN"),
            Self::Apply => write!(f, "APPLY"),
        }
    }
}

/// What happened when one action ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub name: String,
    pub command: String,
    /// `true` when the command exited successfully
    pub success: bool,
    /// Trimmed stdout, or stderr if stdout was empty
    pub output: String,
}

/// Report for one `fedcare clean` invocation
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub mode: CleanMode,
    pub actions: Vec<CleanAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ActionOutcome>>,
}

/// Build the plan, running it through `elevator` in apply mode
pub fn run_clean(mode: CleanMode, elevator: &Elevator) -> CleanReport {
    let actions = CLEAN_PLAN.to_vec();

    let results = match mode {
        CleanMode::DryRun => None,
        CleanMode::Apply => Some(actions.iter().map(|a| run_action(a, elevator)).collect()),
    };

    CleanReport {
        mode,
        actions,
        results,
    }
}

fn run_action(action: &CleanAction, elevator: &Elevator) -> ActionOutcome {
    let (success, output) = match elevator.run(action.command) {
        Ok(out) => {
            let stdout = String::from_utf8_lossy(&out.stdout).trim().to_string();
            let text = if stdout.is_empty() {
                String::from_utf8_lossy(&out.stderr).trim().to_string()
            } else {
                stdout
            };
            (out.status.success(), text)
        }
        Err(e) => (false, e.to_string()),
    };

    if success {
        info!(action = action.name, "cleanup action finished");
    } else {
        warn!(action = action.name, output = %output, "cleanup action failed");
    }

    ActionOutcome {
        name: action.name.to_string(),
        command: action.command_line(),
        success,
        output,
    }
}
