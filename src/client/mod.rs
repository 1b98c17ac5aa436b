//! Module for the http transport.
//!
//! A request is described by an [HttpAction], which turns an endpoint into a [reqwest::Request].
//! An [HttpClient] executes an action against the endpoint it was set up for,
//! and returns the status code and the body.
//!
//! [ReqwestClient] is the implementation used by the `etcd_stats` executable.
//! The tests use their own [HttpClient] implementations to check the request and hand back a canned response.
//!
mod structs;
mod functions;

pub use structs::*;
