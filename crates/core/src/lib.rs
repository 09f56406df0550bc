#![forbid(unsafe_code)]

pub mod gate;
pub mod model;
pub mod time;
pub mod token;
pub mod wizard;

pub use gate::{Destination, GateDecision, GuestDecision, SessionGate};
pub use time::Clock;
pub use token::{DecodeError, JwtClaimsDecoder, TokenDecoder};
pub use wizard::{QuizOutcome, QuizStep, QuizSubmission, QuizWizard, SubmitFailure, WizardError};
