//! The first-time quiz as an explicit state machine.
//!
//! The cursor moves one step at a time, forward moves are gated on the
//! current step's answer, and a submission holds the wizard until the
//! backend answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::gate::Destination;
use crate::model::{
    AnswerSet, CompletedAnswers, DaysPerWeek, Equipment, ExperienceLevel, QuizError, Species,
    UserId,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuizStep {
    #[default]
    Intro,
    Species,
    Experience,
    Frequency,
    Equipment,
}

impl QuizStep {
    pub const ALL: [QuizStep; 5] = [
        QuizStep::Intro,
        QuizStep::Species,
        QuizStep::Experience,
        QuizStep::Frequency,
        QuizStep::Equipment,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            QuizStep::Intro => 0,
            QuizStep::Species => 1,
            QuizStep::Experience => 2,
            QuizStep::Frequency => 3,
            QuizStep::Equipment => 4,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for QuizStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizStep::Intro => "intro",
            QuizStep::Species => "species",
            QuizStep::Experience => "experience",
            QuizStep::Frequency => "frequency",
            QuizStep::Equipment => "equipment",
        };
        f.write_str(name)
    }
}

/// Why a submission did not go through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SubmitFailure {
    #[error("the server rejected the quiz (status {0})")]
    Rejected(u16),
    #[error("the server could not be reached")]
    Transport,
    #[error("the server took too long to answer")]
    TimedOut,
}

impl SubmitFailure {
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            SubmitFailure::Rejected(_) => "We couldn't save your answers. Please try again.",
            SubmitFailure::Transport | SubmitFailure::TimedOut => {
                "Unable to connect to server! Please try again later!"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Failed(SubmitFailure),
    Submitted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("cannot leave {0} before answering it")]
    NextBlocked(QuizStep),
    #[error("already on the first step")]
    PreviousBlocked,
    #[error("answer belongs to the {expected} step, wizard is on {actual}")]
    WrongStep { expected: QuizStep, actual: QuizStep },
    #[error(transparent)]
    Incomplete(#[from] QuizError),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("no submission is in flight")]
    NotInFlight,
    #[error("the quiz was already submitted")]
    AlreadySubmitted,
}

/// Payload handed to the submission endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub user_id: UserId,
    pub quiz_results: CompletedAnswers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    /// The wizard is done; navigate to the destination.
    Completed(Destination),
    /// Answers and step are preserved so the user can resubmit.
    Retry(SubmitFailure),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizWizard {
    step: QuizStep,
    answers: AnswerSet,
    submission: SubmissionState,
}

impl QuizWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> QuizStep {
        self.step
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    #[must_use]
    pub fn last_failure(&self) -> Option<SubmitFailure> {
        match self.submission {
            SubmissionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    fn is_locked(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::InFlight | SubmissionState::Submitted
        )
    }

    fn is_answered(&self, step: QuizStep) -> bool {
        match step {
            QuizStep::Intro => true,
            QuizStep::Species => self.answers.species.is_some(),
            QuizStep::Experience => self.answers.experience.is_some(),
            QuizStep::Frequency => self.answers.days_per_week.is_some(),
            QuizStep::Equipment => self.answers.equipment.is_some(),
        }
    }

    /// Next is never offered on the last step; Submit replaces it.
    #[must_use]
    pub fn shows_next(&self) -> bool {
        self.step.next().is_some()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.is_locked() && self.shows_next() && self.is_answered(self.step)
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.is_locked() && self.step.previous().is_some()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_locked() && self.step == QuizStep::Equipment && self.answers.is_complete()
    }

    /// Advance one step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NextBlocked` when the current answer is unset or
    /// the wizard is on the last step; state is left unchanged.
    pub fn next(&mut self) -> Result<QuizStep, WizardError> {
        self.ensure_unlocked()?;
        match self.step.next() {
            Some(next) if self.is_answered(self.step) => {
                self.step = next;
                Ok(next)
            }
            _ => Err(WizardError::NextBlocked(self.step)),
        }
    }

    /// Go back one step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::PreviousBlocked` on the intro step.
    pub fn previous(&mut self) -> Result<QuizStep, WizardError> {
        self.ensure_unlocked()?;
        let previous = self.step.previous().ok_or(WizardError::PreviousBlocked)?;
        self.step = previous;
        Ok(previous)
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStep` unless the wizard is on the species step.
    pub fn select_species(&mut self, species: Species) -> Result<(), WizardError> {
        self.ensure_on(QuizStep::Species)?;
        self.answers.species = Some(species);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStep` unless the wizard is on the experience step.
    pub fn select_experience(&mut self, level: ExperienceLevel) -> Result<(), WizardError> {
        self.ensure_on(QuizStep::Experience)?;
        self.answers.experience = Some(level);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStep` unless the wizard is on the frequency step.
    pub fn select_days(&mut self, days: DaysPerWeek) -> Result<(), WizardError> {
        self.ensure_on(QuizStep::Frequency)?;
        self.answers.days_per_week = Some(days);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStep` unless the wizard is on the equipment step.
    pub fn select_equipment(&mut self, equipment: Equipment) -> Result<(), WizardError> {
        self.ensure_on(QuizStep::Equipment)?;
        self.answers.equipment = Some(equipment);
        Ok(())
    }

    /// Lock the wizard and package the answers for the backend.
    ///
    /// # Errors
    ///
    /// Returns `WrongStep` off the equipment step, `Incomplete` when an answer
    /// is unset, `SubmissionInFlight` while a previous submit is pending and
    /// `AlreadySubmitted` after success.
    pub fn begin_submit(&mut self, user_id: &UserId) -> Result<QuizSubmission, WizardError> {
        self.ensure_on(QuizStep::Equipment)?;
        let quiz_results = self.answers.complete()?;
        self.submission = SubmissionState::InFlight;
        Ok(QuizSubmission {
            user_id: user_id.clone(),
            quiz_results,
        })
    }

    /// Record the backend's answer to the in-flight submission.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotInFlight` if `begin_submit` was not called.
    pub fn finish_submit(
        &mut self,
        result: Result<(), SubmitFailure>,
    ) -> Result<QuizOutcome, WizardError> {
        if self.submission != SubmissionState::InFlight {
            return Err(WizardError::NotInFlight);
        }
        match result {
            Ok(()) => {
                self.submission = SubmissionState::Submitted;
                Ok(QuizOutcome::Completed(Destination::Home))
            }
            Err(failure) => {
                self.submission = SubmissionState::Failed(failure);
                Ok(QuizOutcome::Retry(failure))
            }
        }
    }

    fn ensure_unlocked(&self) -> Result<(), WizardError> {
        match self.submission {
            SubmissionState::InFlight => Err(WizardError::SubmissionInFlight),
            SubmissionState::Submitted => Err(WizardError::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Failed(_) => Ok(()),
        }
    }

    fn ensure_on(&self, expected: QuizStep) -> Result<(), WizardError> {
        self.ensure_unlocked()?;
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}
