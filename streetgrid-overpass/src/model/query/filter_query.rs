use regex::Regex;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use super::FilterOp;

#[derive(Debug, Clone, PartialEq, Eq)]
/// represents a single tag request clause of an overpass API query
/// see <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22)>
pub struct FilterQuery {
    /// the key in the tag's key/value pair to match against
    tag: String,
    /// operation and value to compare with. when None, any value set at
    /// this tag matches (existential queries such as `["highway"]`).
    predicate: Option<(FilterOp, String)>,
}

impl FilterQuery {
    const QUERY_REGEX: &'static str = r#"^\["([^"]+)"(?:(=|!=|~|!~)"([^"]*)")?\]$"#;

    pub fn new(tag: &str, op: FilterOp, value: &str) -> Self {
        Self {
            tag: String::from(tag),
            predicate: Some((op, String::from(value))),
        }
    }

    /// matches any element that has this tag, whatever its value
    pub fn exists(tag: &str) -> Self {
        Self {
            tag: String::from(tag),
            predicate: None,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.predicate {
            None => write!(f, "[\"{}\"]", self.tag),
            Some((op, value)) => write!(f, "[\"{}\"{}\"{}\"]", self.tag, op, value),
        }
    }
}

impl FromStr for FilterQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(Self::QUERY_REGEX)
            .map_err(|e| format!("internal error building overpass query regex: {e}"))?;
        match re.captures(s.trim()) {
            None => Err(format!("unable to parse overpass query: '{s}'")),
            Some(groups) => {
                let tag = String::from(&groups[1]);
                let predicate = match (groups.get(2), groups.get(3)) {
                    (Some(op), Some(value)) => {
                        Some((FilterOp::from_str(op.as_str())?, String::from(value.as_str())))
                    }
                    _ => None,
                };
                Ok(FilterQuery { tag, predicate })
            }
        }
    }
}

struct OverpassFilterQueryVisitor;

impl Visitor<'_> for OverpassFilterQueryVisitor {
    type Value = FilterQuery;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid overpass filter query. see https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22).")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        FilterQuery::from_str(v).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FilterQuery {
    fn deserialize<D>(deserializer: D) -> Result<FilterQuery, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(OverpassFilterQueryVisitor)
    }
}

impl Serialize for FilterQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existential_query() {
        let q = FilterQuery::from_str(r#"["highway"]"#).unwrap();
        assert_eq!(q, FilterQuery::exists("highway"));
        assert_eq!(q.to_string(), r#"["highway"]"#);
    }

    #[test]
    fn test_value_queries() {
        let cases = [
            (r#"["highway"="residential"]"#, FilterOp::Equals, "residential"),
            (r#"["area"!="yes"]"#, FilterOp::NotEquals, "yes"),
            (r#"["highway"~"primary|secondary"]"#, FilterOp::Matches, "primary|secondary"),
            (r#"["access"!~"private|no"]"#, FilterOp::NotMatches, "private|no"),
        ];
        for (text, op, value) in cases {
            let q = FilterQuery::from_str(text).unwrap();
            let tag = q.tag().to_string();
            assert_eq!(q, FilterQuery::new(&tag, op, value));
            assert_eq!(q.to_string(), text);
        }
    }

    #[test]
    fn test_invalid_query() {
        assert!(FilterQuery::from_str("highway").is_err());
        assert!(FilterQuery::from_str(r#"["highway"=]"#).is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let q: FilterQuery = serde_json::from_str(r#""[\"highway\"=\"service\"]""#).unwrap();
        assert_eq!(q, FilterQuery::new("highway", FilterOp::Equals, "service"));
        let encoded = serde_json::to_string(&q).unwrap();
        assert_eq!(encoded, r#""[\"highway\"=\"service\"]""#);
    }
}
