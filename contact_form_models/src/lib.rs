pub mod email_address;
pub mod form;
mod macros;
