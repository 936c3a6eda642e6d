pub use event::FormEvent;
pub use model::{FormModel, FormSubmitError};

mod event;
mod model;
pub mod validate;
