mod create_profile;
mod guard;
mod landing;
mod monster;
mod placeholders;
mod quiz;
mod ribbon;
mod sign_in;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use create_profile::CreateProfileView;
pub use guard::{
    GuardFailure, Guarded, ProtectedPage, use_guest_route, use_protected_route, use_quiz_route,
};
pub use landing::LandingView;
pub use monster::MonsterView;
pub use placeholders::{AccountView, PastWorkoutsView, WorkoutLogView};
pub use quiz::QuizView;
pub use ribbon::{RibbonBar, RibbonPage};
pub use sign_in::SignInView;
pub use state::{ViewError, ViewState, view_state_from_resource};
