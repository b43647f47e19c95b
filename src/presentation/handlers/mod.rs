mod analyze;
mod error;
mod health;
mod quiz;
mod slides;
mod upload;

pub use analyze::{AnalyzeRequest, analyze_handler};
pub use error::{ErrorResponse, status_for};
pub use health::health_handler;
pub use quiz::{QuizRequest, QuizResponse, quiz_handler};
pub use slides::{SlidesRequest, SlidesResponse, slides_handler};
pub use upload::upload_slides_handler;
