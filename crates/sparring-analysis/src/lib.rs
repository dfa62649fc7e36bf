//! Training reports: weaknesses and recommendations from a learner's history.
//!
//! [`generate_report`] turns a [`ProgressSnapshot`] (aggregate results, per-opponent
//! adaptation scores and explicitly recorded weaknesses) into a [`Report`]:
//!
//! - **Summary** - games played, `W-D-L` record, win rate and signed rating change
//! - **Weaknesses** ([`analyze_weaknesses`]) - recorded weaknesses plus one derived
//!   `style-adaptation` entry per opponent scored below [`LOW_ADAPTATION_THRESHOLD`]
//! - **Strengths** - well-handled styles and a strong overall win rate
//! - **Recommendations** ([`recommend`]) - what to practice next, never empty
//! - **Style performance** - best and worst style with an overall assessment
//!
//! The analysis is pure and never fails: zero games or an empty history are valid
//! input and produce a neutral report with [`WeaknessList::NoneFound`].

pub use self::{progress::*, recommendation::*, report::*, weakness::*};

mod progress;
mod recommendation;
mod report;
mod weakness;
