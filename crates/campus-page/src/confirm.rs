//! Confirmation before destructive clicks.

/// Asks the user a yes/no question.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompt for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}
