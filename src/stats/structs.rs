//! The structs
//!
use std::collections::HashMap;
use async_trait::async_trait;
use reqwest::StatusCode;
use crate::client::BoxError;

/// A JSON null decodes as the default value, the same as an absent field.
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The struct that is used to parse the JSON returned from /v2/stats/leader using serde.
///
/// ```text
/// {"leader":"94088180e21eb87b","followers":{"6e3bd23ae5f1eae0":{"counts":{"fail":0,"success":745},"latency":{...}}}}
/// ```
/// Deserializing goes through [RawLeaderStats], so an absent or null `followers` ends up as an empty map.
/// A null in any other field decodes as its zero value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "RawLeaderStats")]
pub struct LeaderStats {
    /// The id of the current leader.
    pub leader: String,
    pub followers: HashMap<String, FollowerStats>,
}

/// The shape of /v2/stats/leader as it is on the wire, before normalization into [LeaderStats].
#[derive(Deserialize, Debug, Default)]
pub struct RawLeaderStats {
    #[serde(default, alias = "Leader", deserialize_with = "deserialize_null_default")]
    pub leader: String,
    #[serde(alias = "Followers")]
    pub followers: Option<HashMap<String, Option<FollowerStats>>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FollowerStats {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub counts: Counts,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub latency: Latency,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Counts {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub fail: u64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub success: u64,
}

/// Latency to a follower, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Latency {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub current: f64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub average: f64,
    #[serde(rename = "standardDeviation", deserialize_with = "deserialize_null_default")]
    pub standard_deviation: f64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub minimum: f64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub maximum: f64,
}

/// Reading the stats.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Returns the current leader stats.
    async fn leader(&self) -> Result<LeaderStats, StatsError>;
}

/// [StatsApi] over http, sending the requests via the client it is constructed with.
#[derive(Debug, Clone)]
pub struct HttpStatsApi<C> {
    pub(crate) client: C,
}

/// The request for the leader stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsActionLeader;

#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    /// The request could not be sent or the response could not be read, including timeouts.
    #[error("transport error")]
    Transport(#[source] BoxError),
    #[error("unexpected status code {0}")]
    UnexpectedStatus(StatusCode),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
