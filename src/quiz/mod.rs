//! Flashcard and multiple-choice quiz selection

pub mod selection;

pub use selection::{pick_flashcard, select_distractors, Quiz, QuizError, DISTRACTOR_COUNT};
