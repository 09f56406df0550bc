mod account;
mod claims;
mod ids;
mod monster;
mod quiz;

pub use ids::{UserId, UserIdError};

pub use account::{AccountError, CreateAccount, CreateAccountDraft, SignIn, SignInDraft};
pub use claims::SessionClaims;
pub use monster::{MonsterInfo, MonsterStage, UserStatus};
pub use quiz::{
    AnswerSet, CompletedAnswers, DaysPerWeek, Equipment, ExperienceLevel, QuizError, QuizField,
    Species,
};
