use crate::search::{Plan, SearchProblem};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("action {action} at step {step} is not applicable")]
    NotApplicable { step: usize, action: String },
    #[error("plan ends without reaching a goal state")]
    GoalNotReached,
}

/// Replay `plan` against `problem`, step by step, and check that it ends in a
/// goal state. Search bugs tend to show up here as plans that walk through
/// states with no matching transition.
pub fn validate<P>(plan: &Plan<P::Action>, problem: &P) -> Result<(), ValidateError>
where
    P: SearchProblem,
    P::Action: PartialEq + Display,
{
    let mut current_state = problem.get_start_state();
    for (step, action) in plan.steps().iter().enumerate() {
        let successors = problem.get_successors(&current_state);
        match successors
            .into_iter()
            .find(|successor| successor.action == *action)
        {
            Some(successor) => current_state = successor.state,
            None => {
                return Err(ValidateError::NotApplicable {
                    step,
                    action: action.to_string(),
                })
            }
        }
    }

    if !problem.is_goal_state(&current_state) {
        return Err(ValidateError::GoalNotReached);
    }

    Ok(())
}
