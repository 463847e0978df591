//! Rule-set loader - YAML file loading and parsing
//!
//! This module handles loading rule-set definitions from YAML files for the
//! demonstration CLI. A rule set names a list of rule strings plus the
//! records to evaluate the combined rule against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::RuleError;
use crate::rule::RuleValue;

/// A named collection of rule strings and evaluation records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub rules: Vec<String>,
    #[serde(default)]
    pub records: Vec<HashMap<String, RuleValue>>,
}

/// Loads rule-set definitions from YAML files
pub struct RuleSetLoader;

impl RuleSetLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a rule set from a YAML file
    pub fn load_rule_set<P: AsRef<Path>>(&self, path: P) -> Result<RuleSet, RuleError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a rule set from a YAML string
    pub fn parse_yaml(content: &str) -> Result<RuleSet, RuleError> {
        let set: RuleSet = serde_yaml::from_str(content)?;
        Ok(set)
    }
}

impl Default for RuleSetLoader {
    fn default() -> Self {
        Self::new()
    }
}
