pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_absent_user, verify_password};
pub use token::{Claims, TokenService};
