//! # Post Handler Tests

mod create;

use crate::test_utils::{body_json, get_request, json_request, registered_token, test_app, test_state};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
