pub mod bearer;
pub mod factory;
pub mod gate;
pub mod rejection;
pub mod secret;
pub mod token;

pub use factory::build_auth_gate;
pub use gate::{AuthGate, Outcome};
pub use rejection::RejectionReason;
pub use secret::SigningSecret;
pub use token::{Claims, TokenValidator};
