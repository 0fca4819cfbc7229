//! Items command - items of a sample held in an object type.

use anyhow::Result;
use aquarium_client::{Record, id_from};
use clap::Args;
use console::Style;

use super::Context;

/// Arguments for the items command.
#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Sample id, or an "id:name" composite
    pub sample: String,

    /// Object type id, or an "id:name" composite (e.g. "5:Plate")
    pub object_type: String,
}

/// Run the items command.
pub async fn run(args: ItemsArgs, ctx: &Context) -> Result<()> {
    let (client, _) = ctx.connect().await?;
    let items = client
        .items()
        .items_for(id_from(&args.sample), id_from(&args.object_type))
        .await?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    if items.is_empty() {
        println!("{}", dim.apply_to("No items found"));
    }
    for item in &items {
        println!("{}", describe(item));
    }
    Ok(())
}

fn describe(item: &Record) -> String {
    let id = item.id().map_or_else(|| "?".to_string(), |id| id.to_string());
    let location = item
        .get("location")
        .and_then(|v| v.as_str())
        .unwrap_or("-");
    match item.collection() {
        Some(collection) => format!(
            "{} {}  {}  in {} {}",
            item.kind(),
            id,
            location,
            collection.kind(),
            collection.id().map_or_else(|| "?".to_string(), |id| id.to_string())
        ),
        None => format!("{} {}  {}", item.kind(), id, location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => Record::item(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_describe_plain_item() {
        let line = describe(&item(json!({"id": 4, "location": "M20.1.2.3"})));
        assert_eq!(line, "Item 4  M20.1.2.3");
    }

    #[test]
    fn test_describe_item_in_collection() {
        let line = describe(&item(json!({"id": 4, "collection": {"id": 30}})));
        assert_eq!(line, "Item 4  -  in Collection 30");
    }
}
