//! Request extractors.

mod claims;
mod validated;

pub use claims::CurrentUser;
pub use validated::{ValidatedJson, ValidatedJsonRejection};
