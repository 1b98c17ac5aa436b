//! Module for reading `/v2/stats/leader` on an etcd member.
//!
//! The `/v2/stats/leader` endpoint reports the replication health of the followers, as seen by the leader:
//! - The id of the leader.
//! - Per follower id ([FollowerStats]):
//!   - counts: the number of failed and successful raft requests to the follower.
//!   - latency: current, average, standard deviation, minimum and maximum, in milliseconds.
//!
//! Only the leader has followers to report on. A member that is not the leader answers with an empty or absent
//! `followers` object. Either way, a decoded [LeaderStats] always has a followers map, which may be empty.
//!
//! The leader stats are read via [StatsApi::leader], implemented by [HttpStatsApi] on top of any [crate::client::HttpClient].
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
