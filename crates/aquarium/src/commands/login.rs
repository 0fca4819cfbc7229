//! Login command - verifies credentials against the server.

use anyhow::Result;
use clap::Args;
use console::Style;

use super::Context;

/// Arguments for the login command.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Always prompt, even when credentials are configured
    #[arg(short, long)]
    pub prompt: bool,
}

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let body = if args.prompt {
        let client = ctx.client()?;
        client.login_interactive().await?
    } else {
        ctx.connect().await?.1
    };

    if ctx.json_output {
        println!("{}", body);
    } else {
        let green = Style::new().green();
        println!("{} logged in", green.apply_to("✓"));
        if ctx.verbose {
            println!("{}", body);
        }
    }

    Ok(())
}
