use super::{OsmNode, OsmWay, OverpassElement};
use crate::model::OverpassError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// body of an overpass API response with `[out:json]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub version: Option<f64>,
    #[serde(default)]
    pub generator: Option<String>,
    pub elements: Vec<OverpassElement>,
}

impl OverpassResponse {
    pub fn ways(&self) -> impl Iterator<Item = &OsmWay> {
        self.elements.iter().filter_map(|e| match e {
            OverpassElement::Way(way) => Some(way),
            _ => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &OsmNode> {
        self.elements.iter().filter_map(|e| match e {
            OverpassElement::Node(node) => Some(node),
            _ => None,
        })
    }
}

impl FromStr for OverpassResponse {
    type Err = OverpassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|source| OverpassError::InvalidResponse { source })
    }
}
