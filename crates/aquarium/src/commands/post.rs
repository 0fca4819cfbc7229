//! Post command - authenticated form POST.

use anyhow::{Result, anyhow};
use clap::Args;
use serde_json::{Map, Value};

use super::Context;

/// Arguments for the post command.
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Path relative to the server URL (e.g. /json/items/)
    pub path: String,

    /// Form fields as key=value
    #[arg(value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

/// Run the post command.
pub async fn run(args: PostArgs, ctx: &Context) -> Result<()> {
    let (client, _) = ctx.connect().await?;

    let form: Map<String, Value> = args
        .fields
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    let response = client.post(&args.path, &form).await?;
    if ctx.json_output {
        println!("{}", serde_json::to_string(&response.data)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&response.data)?);
    }
    Ok(())
}

fn parse_field(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{}'", raw))?;
    if key.is_empty() {
        return Err(anyhow!("field name is empty in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("sid=42").unwrap(),
            ("sid".to_string(), "42".to_string())
        );
        assert_eq!(
            parse_field("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_field("empty=").unwrap().1, "");
    }

    #[test]
    fn test_parse_field_rejects_bad_input() {
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
    }
}
