use crate::{PageOutcome, RunState, Step, StopReason};

/// Pure update function: applies one page outcome and returns the next step.
///
/// Any page with at least one listing clears the failure counter; empty
/// pages and failed pages count toward the threshold identically.
pub fn update(mut state: RunState, outcome: PageOutcome) -> (RunState, Step) {
    let step = match outcome {
        PageOutcome::Listings(records) => {
            state.apply_listings(records);
            Step::Continue
        }
        PageOutcome::Empty | PageOutcome::Failed => {
            if state.apply_failure() {
                Step::Stop(StopReason::FailureThreshold)
            } else {
                Step::Continue
            }
        }
    };

    (state, step)
}
