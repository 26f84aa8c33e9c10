mod classification;
mod form_factor;
mod version;

pub use classification::*;
pub use form_factor::*;
pub use version::*;
