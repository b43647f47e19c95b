/// Supplies the index of the option marked correct on mock quiz questions.
pub trait AnswerIndexSource: Send + Sync {
    /// Returns a value in `0..upper`. `upper` is never zero.
    fn pick(&self, upper: usize) -> usize;
}
