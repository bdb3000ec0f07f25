pub mod error;
pub mod numeric;
