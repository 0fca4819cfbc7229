//! Get command - raw authenticated GET.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the get command.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path relative to the server URL (e.g. /browser/all)
    pub path: String,

    /// Send the request without logging in first
    #[arg(long)]
    pub anonymous: bool,
}

/// Run the get command.
pub async fn run(args: GetArgs, ctx: &Context) -> Result<()> {
    let client = if args.anonymous {
        ctx.client()?
    } else {
        ctx.connect().await?.0
    };

    let response = client.get(&args.path).await?;
    println!("{}", response.data);
    Ok(())
}
