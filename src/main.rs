//! etcd_stats: print the leader stats of one or more etcd members.
//!
//! ```text
//! etcd_stats --endpoints http://10.0.0.1:2379,http://10.0.0.2:2379
//! ```
use std::{process, time::Instant};
use anyhow::Result;
use clap::Parser;
use log::*;
use etcd_stats::client::{ClientOptions, ReqwestClient};
use etcd_stats::logformat::LogFormatter;
use etcd_stats::stats::{HttpStatsApi, LeaderStats, StatsApi, StatsError};
use etcd_stats::utility;

/// Reads /v2/stats/leader from every endpoint and prints the leader and follower statistics.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// comma separated endpoint urls, for example http://10.0.0.1:2379
    #[arg(short, long, value_name = "url,url")]
    endpoints: Option<String>,
    /// request timeout in milliseconds
    #[arg(short, long, value_name = "ms")]
    timeout_ms: Option<String>,
    /// accept invalid certificates on https endpoints
    #[arg(long)]
    accept_invalid_certs: bool,
    /// do not use the proxies set in the environment
    #[arg(long)]
    no_proxy: bool,
    /// print the stats as json
    #[arg(long)]
    json: bool,
    /// log lines without the timestamp
    #[arg(long)]
    disable_timestamps: bool,
    /// write the endpoints and timeout to .env
    #[arg(long)]
    write_dotenv: bool,
}

async fn read_leader(
    api: HttpStatsApi<ReqwestClient>,
) -> (HttpStatsApi<ReqwestClient>, Result<LeaderStats, StatsError>)
{
    let result = api.leader().await;
    (api, result)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let options = Opts::parse();
    LogFormatter::new(options.disable_timestamps).init_logger();

    let mut changed_options = utility::ChangedOptions::new();
    let endpoints = utility::set_endpoints(&options.endpoints, &mut changed_options)?;
    let timeout = utility::set_timeout(&options.timeout_ms, &mut changed_options)?;
    utility::dotenv_writer(options.write_dotenv, &changed_options)?;

    let client_options = ClientOptions {
        timeout: Some(timeout),
        accept_invalid_certs: options.accept_invalid_certs,
        no_proxy: options.no_proxy,
    };

    info!("begin leader stats read");
    let timer = Instant::now();

    let mut handles = vec![];
    for endpoint in endpoints {
        let api = HttpStatsApi::new(ReqwestClient::new(endpoint, &client_options)?);
        handles.push(tokio::spawn(read_leader(api)));
    }

    let mut failed = false;
    for handle in handles {
        let (api, result) = handle.await?;
        let endpoint = api.client().endpoint();
        match result {
            Ok(leader_stats) if options.json => {
                println!("{}", serde_json::to_string_pretty(&leader_stats)?);
            }
            Ok(leader_stats) => leader_stats.print(endpoint),
            Err(e) => {
                error!("{}: {:#}", endpoint, anyhow::Error::from(e));
                failed = true;
            }
        }
    }

    info!("end leader stats read: {:?}", timer.elapsed());

    if failed {
        process::exit(1);
    }
    Ok(())
}
