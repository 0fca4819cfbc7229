//! CLI command handlers.

pub mod config;
pub mod get;
pub mod items;
pub mod login;
pub mod post;
pub mod samples;

use anyhow::{Context as _, Result};
use aquarium_client::AquariumClient;
use aquarium_config::AquariumConfig;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Merged configuration (files, env, CLI flags).
    pub config: AquariumConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build a client from the configuration without logging in.
    pub fn client(&self) -> Result<AquariumClient> {
        let mut builder = AquariumClient::builder().base_url(self.config.require_url()?);
        if let Some(key) = &self.config.authentication_key {
            builder = builder.authentication_key(key);
        }
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build().context("failed to create Aquarium client")
    }

    /// Build a client and log in, prompting for credentials when none are
    /// configured. Returns the client and the raw login response.
    pub async fn connect(&self) -> Result<(AquariumClient, String)> {
        let client = self.client()?;
        let body = match self.config.credentials() {
            Some((login, password)) => client.login(login, password).await,
            None => client.login_interactive().await,
        }
        .context("login failed")?;
        Ok((client, body))
    }
}
