use uuid::Uuid;

use crate::application::ports::AnswerIndexSource;

/// Draws placeholder answer indices from UUID v4 randomness.
pub struct RandomAnswerIndex;

impl AnswerIndexSource for RandomAnswerIndex {
    fn pick(&self, upper: usize) -> usize {
        (Uuid::new_v4().as_u128() % upper.max(1) as u128) as usize
    }
}
