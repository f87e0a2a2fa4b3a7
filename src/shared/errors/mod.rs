pub mod app_error;
pub mod response;

pub use app_error::{AppError, AppResult};
pub use response::ProblemDetails;
