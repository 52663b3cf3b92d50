use crate::{libs::messages::Message, msg_print};
use anyhow::Result;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Prints the version and build information generated by `build.rs`.
pub fn cmd() -> Result<()> {
    msg_print!(Message::VersionInfo {
        name: APP_METADATA_NAME.to_string(),
        version: APP_METADATA_VERSION.to_string(),
    });
    msg_print!(Message::BuildTime(APP_METADATA_BUILD_TIME.to_string()));
    msg_print!(Message::GitCommit(APP_METADATA_GIT_COMMIT.to_string()));
    Ok(())
}
