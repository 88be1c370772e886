//! Thin HTTP handlers: parse the request, call exactly one store
//! operation, map the outcome to a status code and JSON body.

pub mod auth;
pub mod courses;
pub mod users;
pub mod valuations;
