//! Compile-time settings. Nothing here is read from the environment.

/// Secret used to sign every token issued by this process.
pub const SIGNING_KEY: &[u8] = b"YourSuperSecretKey";

/// The only origin allowed to call the API from a browser.
pub const ALLOWED_ORIGIN: &str = "http://localhost:3002";

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "password";

pub const TOKEN_TTL_MINUTES: i64 = 15;

pub const BIND_ADDRESS: &str = "0.0.0.0:8080";
