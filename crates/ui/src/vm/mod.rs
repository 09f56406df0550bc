mod monster_vm;
mod quiz_vm;

pub use monster_vm::{MonsterVm, map_monster};
pub use quiz_vm::{QuizChoice, QuizIntent, QuizOptionVm, QuizVm, apply_intent};
