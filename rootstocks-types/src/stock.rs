use serde::{Deserialize, Deserializer, Serialize};

/// Profile data about a stock.
///
/// Field names are PascalCase on the wire. Unknown fields are ignored and
/// missing ones take their default, so the field set can grow without
/// breaking stored profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StockDetails {
    pub name: String,
    pub sector: String,
    #[serde(rename = "CUSIP")]
    pub cusip: String,
    #[serde(rename = "ISIN")]
    pub isin: String,
    #[serde(rename = "SEDOL")]
    pub sedol: String,
    pub location: String,
    pub exchange: String,
    pub currency: String,
    /// Position in the Russell 3000, 0 when unranked.
    pub r3k_rank: u32,
    /// Indexes or lists the stock belongs to. A stored `null` reads as empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub member_of: Vec<String>,
}

impl StockDetails {
    /// Creates a profile with only a name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
