use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionList {
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    pub data: Vec<Function>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FunctionType,
    pub size: FunctionSize,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSize {
    pub cpu: i32,
    pub memory: i32,
}

/// The kind of workload a function runs.
///
/// Unknown tags are kept verbatim so a newer API never breaks the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FunctionType {
    Http,
    Worker,
    Job,
    Other(String),
}

impl FunctionType {
    pub fn as_str(&self) -> &str {
        match self {
            FunctionType::Http => "http",
            FunctionType::Worker => "worker",
            FunctionType::Job => "job",
            FunctionType::Other(tag) => tag,
        }
    }
}

impl From<String> for FunctionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "http" => FunctionType::Http,
            "worker" => FunctionType::Worker,
            "job" => FunctionType::Job,
            _ => FunctionType::Other(tag),
        }
    }
}

impl From<FunctionType> for String {
    fn from(kind: FunctionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of a function with one provider in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Provider identifier of this deployment.
    #[serde(rename = "id")]
    pub provider: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    pub country: String,
    #[serde(default)]
    pub city: Option<String>,
}
