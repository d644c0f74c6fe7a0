//! Submission cycle: the submit-to-outcome interval of one form post.

mod phase;

pub use phase::SubmissionPhase;
