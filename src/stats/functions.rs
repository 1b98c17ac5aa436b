//! The impls and functions.
//!
use std::collections::HashMap;
use async_trait::async_trait;
use colored::*;
use itertools::Itertools;
use reqwest::{Method, Request, StatusCode, Url};
use crate::client::{HttpAction, HttpClient};
use crate::stats::{HttpStatsApi, LeaderStats, RawLeaderStats, StatsActionLeader, StatsApi, StatsError};

const V2_STATS_PREFIX: &str = "/v2/stats";

impl From<RawLeaderStats> for LeaderStats {
    fn from(raw: RawLeaderStats) -> Self {
        let followers: HashMap<_, _> = raw.followers
            .unwrap_or_default()
            .into_iter()
            .map(|(id, follower)| (id, follower.unwrap_or_default()))
            .collect();
        LeaderStats {
            leader: raw.leader,
            followers,
        }
    }
}

impl LeaderStats {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn print(
        &self,
        endpoint: &Url,
    )
    {
        println!("{} leader: {}", endpoint, self.leader);
        for (id, follower) in self.followers.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            let fail = if follower.counts.fail > 0 {
                follower.counts.fail.to_string().red()
            } else {
                follower.counts.fail.to_string().normal()
            };
            println!("{} follower: {:16} fail: {:>8} success: {:>10} latency ms current: {:>10.6} average: {:>10.6} stddev: {:>10.6} min: {:>10.6} max: {:>10.6}",
                     endpoint,
                     id,
                     fail,
                     follower.counts.success,
                     follower.latency.current,
                     follower.latency.average,
                     follower.latency.standard_deviation,
                     follower.latency.minimum,
                     follower.latency.maximum,
            );
        }
    }
}

impl<C: HttpClient> HttpStatsApi<C> {
    pub fn new(client: C) -> Self {
        HttpStatsApi { client }
    }
    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: HttpClient> StatsApi for HttpStatsApi<C> {
    async fn leader(&self) -> Result<LeaderStats, StatsError>
    {
        let response = self.client
            .execute(&StatsActionLeader)
            .await
            .map_err(StatsError::Transport)?;

        assert_status_code(response.status, StatusCode::OK)?;

        parse_leader_stats(&response.body)
    }
}

impl HttpAction for StatsActionLeader {
    fn http_request(&self, endpoint: &Url) -> Request {
        Request::new(Method::GET, v2_stats_url(endpoint, "leader"))
    }
}

/// Returns a copy of the endpoint with `/v2/stats/{key}` joined to its path.
///
/// Empty and `.` segments are dropped, `..` removes the segment before it, and the result has no trailing slash.
pub fn v2_stats_url(
    endpoint: &Url,
    key: &str,
) -> Url
{
    let mut url = endpoint.clone();
    url.set_path(&join_path(&[endpoint.path(), V2_STATS_PREFIX, key]));
    url
}

fn join_path(parts: &[&str]) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in parts.iter().flat_map(|part| part.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    format!("/{}", segments.join("/"))
}

fn assert_status_code(
    got: StatusCode,
    want: StatusCode,
) -> Result<(), StatsError>
{
    if got != want {
        return Err(StatsError::UnexpectedStatus(got));
    }
    Ok(())
}

// This is a separate function in order to allow the tests to use it.
pub fn parse_leader_stats(http_data: &[u8]) -> Result<LeaderStats, StatsError> {
    Ok(serde_json::from_slice(http_data)?)
}
