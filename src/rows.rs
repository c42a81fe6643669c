//! # Row Aggregation
//!
//! Flattens each fetched [`Function`] into one [`DisplayRow`]: the nested
//! deployment list collapses into comma-joined provider and region columns,
//! each deduplicated in first-seen order.

use crate::api::Function;

/// Column titles and widths of the function table.
pub const COLUMNS: [(&str, u16); 6] = [
    ("Function", 30),
    ("Type", 4),
    ("Providers", 10),
    ("Regions", 10),
    ("CPU", 4),
    ("Memory", 4),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub kind: String,
    pub providers: String,
    pub regions: String,
    pub cpu: String,
    pub memory: String,
}

impl DisplayRow {
    pub fn from_function(function: &Function) -> Self {
        let mut providers: Vec<&str> = Vec::new();
        let mut regions: Vec<&str> = Vec::new();

        for deployment in &function.deployments {
            push_unique(&mut providers, &deployment.provider);
            push_unique(&mut regions, &deployment.location.country);
        }

        Self {
            name: function.name.clone(),
            kind: function.kind.to_string(),
            providers: providers.join(", "),
            regions: regions.join(", "),
            cpu: function.size.cpu.to_string(),
            memory: function.size.memory.to_string(),
        }
    }

    /// Cell texts in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.kind.as_str(),
            self.providers.as_str(),
            self.regions.as_str(),
            self.cpu.as_str(),
            self.memory.as_str(),
        ]
    }
}

fn push_unique<'a>(seen: &mut Vec<&'a str>, value: &'a str) {
    if !seen.contains(&value) {
        seen.push(value);
    }
}

/// One row per function, in input order.
pub fn build_rows(functions: &[Function]) -> Vec<DisplayRow> {
    functions.iter().map(DisplayRow::from_function).collect()
}
