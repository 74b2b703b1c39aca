//! Feeds a script of actions through a store and records what happened.

use derive_getters::Getters;
use derive_new::new;
use katatoe::{Action, ApplicationState, Store, TapError};
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// An accepted action and the state it produced.
#[derive(Debug, Clone, Serialize, new, Getters)]
pub struct Step {
    /// Zero-based position in the script.
    index: usize,
    /// Dispatched action.
    action: Action,
    /// State after the action.
    state: ApplicationState,
}

/// An action the store refused.
#[derive(Debug, Clone, Serialize, new, Getters)]
pub struct Rejection {
    /// Zero-based position in the script.
    index: usize,
    /// Refused action.
    action: Action,
    /// Why it was refused.
    #[serde(serialize_with = "serialize_display")]
    error: TapError,
}

fn serialize_display<S: serde::Serializer>(error: &TapError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

/// Everything a scripted run produced.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct Report {
    /// State before the first action.
    initial: ApplicationState,
    /// Accepted actions, in order.
    steps: Vec<Step>,
    /// Refused actions, in order.
    rejections: Vec<Rejection>,
    /// True if the run stopped early on a rejection.
    aborted: bool,
}

impl Report {
    /// State after the last accepted action.
    pub fn final_state(&self) -> &ApplicationState {
        self.steps
            .last()
            .map(|step| &step.state)
            .unwrap_or(&self.initial)
    }
}

/// Dispatches `actions` in order.
///
/// Rejected actions are recorded and skipped; with `stop_on_error` the
/// run ends at the first one.
#[instrument(skip(store, actions), fields(count = actions.len()))]
pub fn run_script<R: Rng>(store: &mut Store<R>, actions: &[Action], stop_on_error: bool) -> Report {
    let mut report = Report {
        initial: store.state().clone(),
        steps: Vec::new(),
        rejections: Vec::new(),
        aborted: false,
    };

    for (index, &action) in actions.iter().enumerate() {
        match store.dispatch(action) {
            Ok(state) => report.steps.push(Step::new(index, action, state.clone())),
            Err(error) => {
                warn!(index, %action, %error, "Skipping rejected action");
                report.rejections.push(Rejection::new(index, action, error));
                if stop_on_error {
                    report.aborted = true;
                    break;
                }
            }
        }
    }

    info!(
        accepted = report.steps.len(),
        rejected = report.rejections.len(),
        status = %report.final_state().status(),
        "Script finished"
    );
    report
}
