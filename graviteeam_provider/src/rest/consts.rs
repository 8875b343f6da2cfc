pub const ACCEPT_HEADER: &str = "Accept";
pub const JSON: &str = "application/json";
pub const USER_AGENT: &str = concat!("graviteeam/", env!("CARGO_PKG_VERSION"));

/// Prefix of every management API path.
pub const MANAGEMENT_PATH: &str = "management";
pub const TOKEN_PATH: &str = "auth/token";

/// Items requested per page on list endpoints.
pub const PAGE_SIZE: u64 = 50;
