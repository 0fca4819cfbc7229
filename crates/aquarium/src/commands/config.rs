//! Config command - configuration management.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use super::Context;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration (password hidden)
    Show,

    /// Print the user config file path
    Path,
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => cmd_show(ctx),
        ConfigCommand::Path => cmd_path(),
    }
}

fn cmd_show(ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if config.password.is_some() {
        config.password = Some("****".to_string());
    }
    if let Some(key) = config.authentication_key.as_mut() {
        *key = mask(key);
    }

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let dim = Style::new().dim();
        let unset = || dim.apply_to("(not set)").to_string();
        println!("aquarium_url        {}", config.aquarium_url.unwrap_or_else(unset));
        println!("login               {}", config.login.unwrap_or_else(unset));
        println!("password            {}", config.password.unwrap_or_else(unset));
        println!(
            "authentication_key  {}",
            config.authentication_key.unwrap_or_else(unset)
        );
        println!(
            "timeout_secs        {}",
            config
                .timeout_secs
                .map_or_else(unset, |secs| secs.to_string())
        );
    }
    Ok(())
}

fn cmd_path() -> Result<()> {
    match aquarium_config::xdg_config_path() {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("Could not determine config directory"),
    }
    Ok(())
}

fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_long_and_short_secrets() {
        assert_eq!(mask("abcdefghijkl"), "abcd...ijkl");
        assert_eq!(mask("short"), "****");
    }
}
