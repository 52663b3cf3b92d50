//! Configuration command: shows the effective settings, or writes them to
//! disk with `--init`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Write the configuration file (defaults for any missing setting)
    #[arg(long)]
    init: bool,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let path = Config::path()?;
    let config = Config::read_from(&path).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(format!("{:#}", e))))?;

    if args.init {
        config.save_to(&path)?;
        msg_success!(Message::ConfigSaved(path.display().to_string()));
        return Ok(());
    }

    msg_info!(Message::ConfigPath(path.display().to_string()));
    msg_print!(serde_json::to_string_pretty(&config)?);
    Ok(())
}
