//! HTTP client for the Aquarium laboratory automation service.
//!
//! The client logs in once, keeps the session cookies and authentication key,
//! and attaches them to later requests.
//!
//! # Example
//!
//! ```no_run
//! use aquarium_client::{id_from, AquariumClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = AquariumClient::builder()
//!     .base_url("http://localhost:3000")
//!     .authentication_key("secret")
//!     .build()?;
//!
//! client.login("neptune", "beagle").await?;
//!
//! // Sample names by type
//! client.samples().get_sample_names().await?;
//! for name in client.samples().sample_names_for(Some("Plasmid")) {
//!     println!("{}", name);
//! }
//!
//! // Items of sample 42 stored in object type "5:Plate"
//! let items = client.items().items_for(42, id_from("5:Plate")).await?;
//! for item in &items {
//!     if let Some(collection) = item.collection() {
//!         println!("item {:?} in collection {:?}", item.id(), collection.id());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Auth**: `login`, `login_interactive`, `logout`
//! - **HTTP**: raw `get` (body untouched) and `post` (form in, JSON out)
//! - **Samples**: catalog fetch and cached lookups by sample type
//! - **Items**: items for a sample and object type, wrapped as records

pub mod api;
mod auth;
pub mod client;
pub mod cookies;
pub mod error;
mod form;
mod ids;
mod prompt;
pub mod record;
pub mod session;
pub mod types;

pub use client::{AquariumClient, ClientBuilder};
pub use error::{Error, Result};
pub use ids::id_from;
pub use record::{Record, RecordKind};
pub use session::Session;
pub use types::*;

pub use api::{ItemsApi, SamplesApi};
