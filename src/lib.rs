//! Authorizing API requests without effort.
//!
//! # Example
//!
//! ```
//! use http::Method;
//! use reqauth::{ApiKey, Authorizations, Password, RequestDescriptor, SecurityRequirement};
//!
//! fn main() -> reqauth::Result<()> {
//!     let mut auths = Authorizations::new();
//!     auths.add_one("api_key", ApiKey::query("key", "abc123"));
//!     auths.add_one("basic", Password::new("user", "pass"));
//!
//!     // Operation declares which authorizations it accepts.
//!     let securities: Vec<SecurityRequirement> = serde_json::from_str(r#"["api_key"]"#)?;
//!
//!     let mut req = RequestDescriptor::new(Method::GET, "http://example.com/pets");
//!     assert!(auths.apply(&mut req, Some(securities.as_slice()))?);
//!     assert_eq!(req.url, "http://example.com/pets?key=abc123");
//!     Ok(())
//! }
//! ```
//!
//! # Available Authorizations
//!
//! - [ApiKey][crate::ApiKey] for keys in query or header.
//! - [Cookie][crate::Cookie] for session cookies.
//! - [Password][crate::Password] for HTTP Basic.
//! - [Oauth1Signer][crate::Oauth1Signer] for OAuth 1.0 HMAC signatures.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod encode;
pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod cookie;
pub use cookie::{Cookie, CookieStore, MemoryCookieJar};
mod request;
pub use request::RequestDescriptor;

mod api_key;
pub use api_key::{ApiKey, ApiKeyLocation};
mod password;
pub use password::Password;
pub mod oauth1;
pub use oauth1::Oauth1Signer;

mod authorization;
pub use authorization::Authorization;
mod registry;
pub use registry::{Authorizations, SecurityRequirement};
