pub mod generators;
pub mod llm;
pub mod observability;
pub mod quiz;
pub mod text_processing;
