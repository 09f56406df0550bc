use fiend_core::model::{DaysPerWeek, Equipment, ExperienceLevel, Species};
use fiend_core::{QuizStep, QuizWizard, WizardError};

/// One selectable answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizChoice {
    Species(Species),
    Experience(ExperienceLevel),
    Days(DaysPerWeek),
    Equipment(Equipment),
}

impl QuizChoice {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            QuizChoice::Species(species) => species.label().to_string(),
            QuizChoice::Experience(level) => level.label().to_string(),
            QuizChoice::Days(days) => days.to_string(),
            QuizChoice::Equipment(equipment) => equipment.label().to_string(),
        }
    }
}

/// Navigation intents. Submission is handled by the view since it goes
/// through the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Next,
    Previous,
    Choose(QuizChoice),
}

/// # Errors
///
/// Passes through the wizard's refusal; the wizard is unchanged in that case.
pub fn apply_intent(wizard: &mut QuizWizard, intent: QuizIntent) -> Result<(), WizardError> {
    match intent {
        QuizIntent::Next => wizard.next().map(|_| ()),
        QuizIntent::Previous => wizard.previous().map(|_| ()),
        QuizIntent::Choose(QuizChoice::Species(species)) => wizard.select_species(species),
        QuizIntent::Choose(QuizChoice::Experience(level)) => wizard.select_experience(level),
        QuizIntent::Choose(QuizChoice::Days(days)) => wizard.select_days(days),
        QuizIntent::Choose(QuizChoice::Equipment(equipment)) => {
            wizard.select_equipment(equipment)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub choice: QuizChoice,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub step: QuizStep,
    pub prompt: &'static str,
    pub options: Vec<QuizOptionVm>,
    pub preview_key: Option<String>,
    pub show_previous: bool,
    pub show_next: bool,
    pub next_label: &'static str,
    pub next_enabled: bool,
    pub show_submit: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub failure: Option<&'static str>,
}

fn prompt(step: QuizStep) -> &'static str {
    match step {
        QuizStep::Intro => {
            "Welcome to the first time quiz! We'll gather some information about what your \
             workout life looks like, and what monster is right for you!"
        }
        QuizStep::Species => "Which Monster would you like?",
        QuizStep::Experience => "How much experience do you have?",
        QuizStep::Frequency => "How many Days a week do you plan to work out?",
        QuizStep::Equipment => "What kind of equipment do you have available?",
    }
}

fn options(wizard: &QuizWizard) -> Vec<QuizOptionVm> {
    let answers = wizard.answers();
    let choices: Vec<(QuizChoice, bool)> = match wizard.step() {
        QuizStep::Intro => Vec::new(),
        QuizStep::Species => Species::ALL
            .into_iter()
            .map(|s| (QuizChoice::Species(s), answers.species == Some(s)))
            .collect(),
        QuizStep::Experience => ExperienceLevel::ALL
            .into_iter()
            .map(|l| (QuizChoice::Experience(l), answers.experience == Some(l)))
            .collect(),
        QuizStep::Frequency => DaysPerWeek::all()
            .map(|d| (QuizChoice::Days(d), answers.days_per_week == Some(d)))
            .collect(),
        QuizStep::Equipment => Equipment::ALL
            .into_iter()
            .map(|e| (QuizChoice::Equipment(e), answers.equipment == Some(e)))
            .collect(),
    };
    choices
        .into_iter()
        .map(|(choice, selected)| QuizOptionVm {
            choice,
            label: choice.label(),
            selected,
        })
        .collect()
}

impl QuizVm {
    #[must_use]
    pub fn from_wizard(wizard: &QuizWizard) -> Self {
        let step = wizard.step();
        let on_last = !wizard.shows_next();
        let preview_key = match (step, wizard.answers().species) {
            (QuizStep::Species, Some(species)) => Some(format!("{}-1", species.wire_name())),
            _ => None,
        };
        Self {
            step,
            prompt: prompt(step),
            options: options(wizard),
            preview_key,
            show_previous: step.previous().is_some(),
            show_next: !on_last,
            next_label: if step == QuizStep::Intro {
                "Take Quiz"
            } else {
                "Next"
            },
            next_enabled: wizard.can_go_next(),
            show_submit: on_last,
            submit_enabled: wizard.can_submit(),
            submit_label: if wizard.is_submitting() {
                "Submitting..."
            } else {
                "Submit"
            },
            failure: wizard.last_failure().map(|failure| failure.user_message()),
        }
    }
}
