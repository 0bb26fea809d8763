use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result, anyhow};

const USAGE: &str = "usage: crisis-guide [--config <path>] [--listen <addr>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// Overrides `server.listen_addr` from the config file.
    pub listen_addr: Option<SocketAddr>,
}

pub fn args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut listen_addr = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--listen" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --listen"))?;
                let addr = value
                    .parse::<SocketAddr>()
                    .with_context(|| format!("invalid --listen address '{value}'"))?;
                listen_addr = Some(addr);
            }
            other => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./crisis-guide.jsonc")),
        listen_addr,
    })
}
