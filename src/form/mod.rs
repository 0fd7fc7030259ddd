mod error;
mod session;
mod state;
mod validation;

pub use error::{FieldIssue, ValidationErrors};
pub use session::FormSession;
pub use state::FormState;
pub use validation::FormValidator;
