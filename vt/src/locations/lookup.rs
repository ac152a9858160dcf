//! Stop lookup against the planner's name search.

use std::collections::HashMap;

use tracing::debug;

use crate::vasttrafik::{PlannerClient, StopLocation};

use super::error::LocationError;

/// Map an alias to the stop name it stands for.
///
/// Names without an alias are returned unchanged.
pub fn resolve_alias<'a>(aliases: &'a HashMap<String, String>, name: &'a str) -> &'a str {
    aliases.get(name).map_or(name, String::as_str)
}

/// Stop name lookup.
///
/// Holds the planner client and the user's aliases.
#[derive(Debug, Clone)]
pub struct Locations {
    client: PlannerClient,
    aliases: HashMap<String, String>,
}

impl Locations {
    pub fn new(client: PlannerClient, aliases: HashMap<String, String>) -> Self {
        Self { client, aliases }
    }

    /// The full stop name for `name`, after alias expansion.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        resolve_alias(&self.aliases, name)
    }

    /// Names of all stops matching `prefix`, in the planner's order.
    ///
    /// Aliases are not expanded; this is what shell completion sees.
    pub async fn completions(&self, prefix: &str) -> Result<Vec<String>, LocationError> {
        let stops = self.client.location_name(prefix).await?;
        Ok(names(stops))
    }

    /// Id of the best match for `name`, after alias expansion.
    pub async fn id_by_name(&self, name: &str) -> Result<String, LocationError> {
        let name = self.resolve_alias(name);
        let stops = self.client.location_name(name).await?;
        let id = first_id(name, stops)?;
        debug!(name, id = %id, "resolved stop");
        Ok(id)
    }
}

fn names(stops: Vec<StopLocation>) -> Vec<String> {
    stops.into_iter().map(|stop| stop.name).collect()
}

fn first_id(name: &str, stops: Vec<StopLocation>) -> Result<String, LocationError> {
    stops
        .into_iter()
        .next()
        .map(|stop| stop.id)
        .ok_or_else(|| LocationError::NoSuchStop(name.to_string()))
}
