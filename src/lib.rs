//! Read the statistics an etcd cluster publishes on its `/v2/stats` endpoints.
//!
//! - [stats]: the leader stats reader and the stats structs.
//! - [client]: the http transport the stats reader sends its requests through.
//! - [logformat]: the log line formatter used by the `etcd_stats` executable.
//! - [utility]: option handling for the executable.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod client;
pub mod logformat;
pub mod stats;
pub mod utility;
