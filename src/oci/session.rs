//! Authenticated session context.
//!
//! Credentials stay with the `oci` CLI, which reads `~/.oci/config` and the
//! `OCI_CLI_*` environment. The [`Session`] only records which executable,
//! profile, config file and region every command must use. It is built once
//! at startup and handed by reference to each client.

use super::cli::split_and_strip;
use crate::config;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Path or name of the `oci` executable.
    pub cli: String,
    pub profile: Option<String>,
    pub config_file: Option<String>,
    pub region: Option<String>,
    /// `--limit` passed to list calls.
    pub page_limit: u32,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            cli: config::DEFAULT_OCI_CLI.to_string(),
            profile: None,
            config_file: None,
            region: None,
            page_limit: config::DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Session {
    /// Build the session from the process environment.
    pub fn from_env() -> Result<Session, Box<dyn Error>> {
        Session::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the session from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Session, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let page_limit = match get(config::ENV_PAGE_LIMIT) {
            Some(v) => {
                let limit: u32 = v
                    .trim()
                    .parse()
                    .map_err(|e| format!("{}={v}: {e}", config::ENV_PAGE_LIMIT))?;
                if limit == 0 || limit > config::MAX_PAGE_LIMIT {
                    return Err(format!(
                        "{}={limit} must be between 1 and {}",
                        config::ENV_PAGE_LIMIT,
                        config::MAX_PAGE_LIMIT
                    )
                    .into());
                }
                limit
            }
            None => config::DEFAULT_PAGE_LIMIT,
        };

        let config_file = get(config::ENV_CONFIG_FILE);
        if let Some(file) = &config_file {
            if !Path::new(file).exists() {
                return Err(format!("OCI config file does not exist: {file}").into());
            }
        }

        let session = Session {
            cli: get(config::ENV_OCI_CLI).unwrap_or_else(|| config::DEFAULT_OCI_CLI.to_string()),
            profile: get(config::ENV_PROFILE),
            config_file,
            region: get(config::ENV_REGION),
            page_limit,
        };
        log::info!(
            "Session cli={} profile={} region={} page_limit={}",
            session.cli,
            session.profile.as_deref().unwrap_or("<default>"),
            session.region.as_deref().unwrap_or("<from config>"),
            session.page_limit
        );
        Ok(session)
    }

    /// Argv for `subcommand` with the global session flags and JSON output.
    ///
    /// `subcommand` is a literal such as `"network vnic get"` and is split on
    /// spaces. `args` carry caller values (OCIDs, tokens) and are appended
    /// as-is, one argument each.
    pub fn command(&self, subcommand: &str, args: &[&str]) -> Vec<String> {
        let mut argv = vec![self.cli.clone()];
        if let Some(profile) = &self.profile {
            argv.extend(["--profile".to_string(), profile.clone()]);
        }
        if let Some(config_file) = &self.config_file {
            argv.extend(["--config-file".to_string(), config_file.clone()]);
        }
        if let Some(region) = &self.region {
            argv.extend(["--region".to_string(), region.clone()]);
        }
        argv.extend(["--output".to_string(), "json".to_string()]);
        argv.extend(
            split_and_strip(subcommand)
                .into_iter()
                .filter(|word| !word.is_empty())
                .map(str::to_string),
        );
        argv.extend(args.iter().map(|a| a.to_string()));
        argv
    }

    /// Like [`Session::command`] for a list call, adding the page size and
    /// continuation token.
    pub fn list_command(
        &self,
        subcommand: &str,
        args: &[&str],
        page: Option<&str>,
    ) -> Vec<String> {
        let mut argv = self.command(subcommand, args);
        argv.extend(["--limit".to_string(), self.page_limit.to_string()]);
        if let Some(token) = page {
            argv.extend(["--page".to_string(), token.to_string()]);
        }
        argv
    }
}
