mod random_answer_index;

pub use random_answer_index::RandomAnswerIndex;
