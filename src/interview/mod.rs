//! Interview flow: the fixed problem catalog and the session manager

mod manager;
pub mod problems;

pub use manager::{InterviewManager, NextProblem, SessionStarted};
pub use problems::{Difficulty, Problem};
