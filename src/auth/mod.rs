/// Authentication module
///
/// Password hashing/verification, session token issuance/validation,
/// and strict bearer-header parsing.

mod bearer;
mod claims;
mod password;
mod token;

pub use bearer::parse_bearer;
pub use claims::Claims;
pub use password::hash_password;
pub use password::verify_password;
pub use token::decode_token;
pub use token::issue_token;
