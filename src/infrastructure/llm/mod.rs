mod openai_client;

pub use openai_client::{DEFAULT_OPENAI_BASE_URL, OpenAiClient};
