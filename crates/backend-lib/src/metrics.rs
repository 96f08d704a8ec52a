// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const LOGIN_SUCCESS: &str = "auth.login.success";
pub const LOGIN_FAILURE: &str = "auth.login.failure";
pub const SESSION_ISSUED: &str = "session.issued";
pub const SESSION_REPLACED: &str = "session.replaced";
pub const SESSION_ACTIVE: &str = "session.active";
pub const ITEM_CREATED: &str = "item.created";
pub const ITEM_DELETED: &str = "item.deleted";
