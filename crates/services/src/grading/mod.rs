mod draft;
mod session;

pub use crate::error::GradingError;
pub use draft::Draft;
pub use session::{GradingDeps, GradingSession};
