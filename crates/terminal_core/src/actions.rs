//! Outbound side effects invoked by the link commands.

use shared::error::CommandError;
use tracing::info;
use url::Url;

pub trait ExternalActions: Send + Sync {
    fn open_url(&self, url: &str) -> Result<(), CommandError>;
    fn compose_email(&self, address: &str) -> Result<(), CommandError>;
}

pub fn parse_web_target(target: &str) -> Result<Url, CommandError> {
    let url = Url::parse(target).map_err(|err| CommandError::InvalidTarget {
        target: target.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CommandError::InvalidTarget {
            target: target.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

pub fn mailto_target(address: &str) -> Result<Url, CommandError> {
    if !address.contains('@') || address.chars().any(char::is_whitespace) {
        return Err(CommandError::InvalidTarget {
            target: address.to_string(),
            reason: "not an email address".to_string(),
        });
    }
    Url::parse(&format!("mailto:{address}")).map_err(|err| CommandError::InvalidTarget {
        target: address.to_string(),
        reason: err.to_string(),
    })
}

/// Hands targets to the platform opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn launch(&self, url: &Url) -> Result<(), CommandError> {
        let target = url.as_str();

        #[cfg(target_os = "windows")]
        let result = std::process::Command::new("cmd")
            .args(["/C", "start", "", target])
            .spawn();

        #[cfg(target_os = "macos")]
        let result = std::process::Command::new("open").arg(target).spawn();

        #[cfg(all(unix, not(target_os = "macos")))]
        let result = std::process::Command::new("xdg-open").arg(target).spawn();

        result.map_err(|source| CommandError::Launch {
            target: target.to_string(),
            source,
        })?;
        info!(url = %target, "launched external target");
        Ok(())
    }
}

impl ExternalActions for SystemLauncher {
    fn open_url(&self, url: &str) -> Result<(), CommandError> {
        self.launch(&parse_web_target(url)?)
    }

    fn compose_email(&self, address: &str) -> Result<(), CommandError> {
        self.launch(&mailto_target(address)?)
    }
}

/// Validates and logs targets without spawning anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLauncher;

impl ExternalActions for LoggingLauncher {
    fn open_url(&self, url: &str) -> Result<(), CommandError> {
        let url = parse_web_target(url)?;
        info!(%url, "open url (launch disabled)");
        Ok(())
    }

    fn compose_email(&self, address: &str) -> Result<(), CommandError> {
        let url = mailto_target(address)?;
        info!(%url, "compose email (launch disabled)");
        Ok(())
    }
}
