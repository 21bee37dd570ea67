pub mod activity;
pub mod case;
pub mod time_point;
pub mod verdict;

pub use activity::Activity;
pub use case::{Case, CrimeWindow, Suspect};
pub use time_point::TimePoint;
pub use verdict::{AlibiVerdict, SuspectEvaluation};
