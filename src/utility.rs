//! Utilities
//!
//! Option handling for the executable. Every option is taken from, in order:
//! 1. the command line switch,
//! 2. the environment variable, which can be set via `.env`,
//! 3. the default.
//!
//! Options taken from the command line or the environment are recorded in `changed_options`,
//! so they can be written to `.env` with [dotenv_writer].
use std::{collections::BTreeMap, env, fs, io::Write, path::Path, time::Duration};
use anyhow::{ensure, Context, Result};
use log::*;
use reqwest::Url;

pub const DEFAULT_ENDPOINTS: &str = "http://127.0.0.1:2379";
pub const DEFAULT_TIMEOUT_MS: &str = "5000";

pub const ENV_ENDPOINTS: &str = "ETCDSTATS_ENDPOINTS";
pub const ENV_TIMEOUT_MS: &str = "ETCDSTATS_TIMEOUT_MS";

pub type ChangedOptions = BTreeMap<&'static str, String>;

fn set_option(
    option: &Option<String>,
    name: &str,
    env_name: &'static str,
    default: &str,
    changed_options: &mut ChangedOptions,
) -> String
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", name, value);
        changed_options.insert(env_name, value.to_string());
        return value.to_string();
    }
    match env::var(env_name) {
        Ok(set_var) => {
            info!("{} not set: set via .env: {}: {}", name, env_name, set_var);
            changed_options.insert(env_name, set_var.to_owned());
            set_var
        }
        Err(_e) => {
            info!("{} not set: and not set via .env: using default: {}", name, default);
            default.to_string()
        }
    }
}

pub fn set_endpoints(
    option: &Option<String>,
    changed_options: &mut ChangedOptions,
) -> Result<Vec<Url>>
{
    let endpoints_string = set_option(option, "endpoints", ENV_ENDPOINTS, DEFAULT_ENDPOINTS, changed_options);
    parse_endpoints(&endpoints_string)
}

pub fn parse_endpoints(endpoints: &str) -> Result<Vec<Url>> {
    let urls = endpoints
        .split(',')
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(parse_endpoint)
        .collect::<Result<Vec<Url>>>()?;
    ensure!(!urls.is_empty(), "No endpoints set");
    Ok(urls)
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).with_context(|| format!("Invalid endpoint url: {}", endpoint))?;
    ensure!(matches!(url.scheme(), "http" | "https"), "Invalid endpoint url: {}: scheme must be http or https", endpoint);
    Ok(url)
}

pub fn set_timeout(
    option: &Option<String>,
    changed_options: &mut ChangedOptions,
) -> Result<Duration>
{
    let timeout_string = set_option(option, "timeout-ms", ENV_TIMEOUT_MS, DEFAULT_TIMEOUT_MS, changed_options);
    let timeout_ms: u64 = timeout_string
        .trim()
        .parse()
        .with_context(|| format!("Invalid timeout in milliseconds: {}", timeout_string))?;
    Ok(Duration::from_millis(timeout_ms))
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: &ChangedOptions,
) -> Result<()>
{
    if write_dotenv {
        write_dotenv_file(Path::new(".env"), changed_options)?;
    }
    Ok(())
}

fn write_dotenv_file(
    path: &Path,
    changed_options: &ChangedOptions,
) -> Result<()>
{
    if changed_options.is_empty() {
        return Ok(());
    }
    info!("Writing {}", path.display());
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Error writing .env file: {}", path.display()))?;

    for (key, value) in changed_options {
        file.write_all(format!("{}={}\n", key, value).as_bytes())?;
        info!("{}={}", key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_set_endpoints_argument() {
        let mut changed_options = ChangedOptions::new();
        let option = Some("http://10.0.0.1:2379, https://10.0.0.2:2379/base".to_string());
        let result = set_endpoints(&option, &mut changed_options).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].as_str(), "http://10.0.0.1:2379/");
        assert_eq!(result[1].path(), "/base");
        assert_eq!(changed_options[ENV_ENDPOINTS], "http://10.0.0.1:2379, https://10.0.0.2:2379/base");
    }

    #[test]
    fn unit_set_endpoints_invalid() {
        let mut changed_options = ChangedOptions::new();
        let option = Some("127.0.0.1:2379".to_string());
        assert!(set_endpoints(&option, &mut changed_options).is_err());
        assert!(parse_endpoints(" , ").is_err());
        // parses as a url with scheme "localhost".
        let result = parse_endpoints("localhost:2379");
        assert!(result.unwrap_err().to_string().contains("localhost:2379"));
        assert!(parse_endpoints("http://10.0.0.1:2379,ftp://10.0.0.2").is_err());
    }

    #[test]
    fn unit_set_timeout_argument() {
        let mut changed_options = ChangedOptions::new();
        let result = set_timeout(&Some("250".to_string()), &mut changed_options).unwrap();
        assert_eq!(result, Duration::from_millis(250));
        assert!(set_timeout(&Some("soon".to_string()), &mut changed_options).is_err());
    }

    #[test]
    fn unit_set_option_environment_and_default() {
        let mut changed_options = ChangedOptions::new();
        env::set_var("ETCDSTATS_UNIT_TEST_OPTION", "from-env");
        let result = set_option(&None, "unit", "ETCDSTATS_UNIT_TEST_OPTION", "default", &mut changed_options);
        assert_eq!(result, "from-env");
        assert_eq!(changed_options["ETCDSTATS_UNIT_TEST_OPTION"], "from-env");

        let mut changed_options = ChangedOptions::new();
        env::remove_var("ETCDSTATS_UNIT_TEST_OPTION");
        let result = set_option(&None, "unit", "ETCDSTATS_UNIT_TEST_OPTION", "default", &mut changed_options);
        assert_eq!(result, "default");
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_write_dotenv_file() {
        let path = env::temp_dir().join(format!("etcd_stats_dotenv_{}", std::process::id()));
        let mut changed_options = ChangedOptions::new();
        changed_options.insert(ENV_TIMEOUT_MS, "250".to_string());
        changed_options.insert(ENV_ENDPOINTS, "http://10.0.0.1:2379".to_string());
        write_dotenv_file(&path, &changed_options).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(contents, "ETCDSTATS_ENDPOINTS=http://10.0.0.1:2379\nETCDSTATS_TIMEOUT_MS=250\n");
    }
}
