mod generator_factory;
mod heuristic_generator;
mod llm_generator;

pub use generator_factory::ContentGeneratorFactory;
pub use heuristic_generator::HeuristicContentGenerator;
pub use llm_generator::LlmContentGenerator;
