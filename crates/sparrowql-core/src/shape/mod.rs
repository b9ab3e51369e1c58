mod project_error;
mod projector;
mod result_shape;

pub use project_error::ProjectError;
pub use projector::project;
pub use result_shape::ResultShape;
