use dioxus::prelude::*;
use dioxus_router::Routable;

use fiend_core::Destination;

use crate::views::{
    AccountView, CreateProfileView, LandingView, MonsterView, PastWorkoutsView, QuizView,
    SignInView, WorkoutLogView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
    #[route("/sign-in", SignInView)] SignIn {},
    #[route("/create-profile", CreateProfileView)] CreateProfile {},
    #[route("/quiz", QuizView)] Quiz {},
    #[route("/monster", MonsterView)] Monster {},
    #[route("/account", AccountView)] Account {},
    #[route("/workout-log", WorkoutLogView)] WorkoutLog {},
    #[route("/past-workouts", PastWorkoutsView)] PastWorkouts {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::SignIn => Route::SignIn {},
            Destination::Home => Route::Monster {},
            Destination::Onboarding => Route::Quiz {},
        }
    }
}
