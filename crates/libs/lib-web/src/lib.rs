//! # Web Library
//!
//! HTTP surface of the blog: router, middleware, extractors, services and
//! handlers.
//!
//! | Method | Path | Auth | Success |
//! |--------|------|------|---------|
//! | `POST` | `/auth/register` | - | 201 public user |
//! | `POST` | `/auth/login` | - | 201 `{access_token}` |
//! | `GET`  | `/auth/profile` | bearer | 200 `{userId, username}` |
//! | `POST` | `/posts` | bearer | 201 post with author |
//! | `GET`  | `/posts` | - | 200 all posts with authors |
//! | `GET`  | `/health` | - | 200 `OK` |

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;

#[cfg(test)]
pub(crate) mod test_utils;

pub use server::{create_router, start_server, AppState, ServerConfig};
