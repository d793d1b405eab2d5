mod certification_handler;
mod organization_handler;
mod project_handler;

pub use certification_handler::*;
pub use organization_handler::*;
pub use project_handler::*;
