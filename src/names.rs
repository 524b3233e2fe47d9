//! Canonical country names.
//!
//! Former national names are folded into their successor before any counting,
//! so "West Germany" and "Germany" share one tally.

use crate::error::ConfigError;
use crate::models::normalize_text;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct CanonicalNames {
    // alias -> terminal canonical name; no value is also a key
    aliases: HashMap<String, String>,
}

impl CanonicalNames {
    /// Build the mapping, resolving alias chains (A -> B -> C) to their final
    /// name. A chain that loops back on itself is rejected.
    pub fn new(aliases: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let raw: HashMap<String, String> = aliases
            .iter()
            .map(|(from, to)| (normalize_text(from), normalize_text(to)))
            .filter(|(from, to)| from != to)
            .collect();

        let mut resolved = HashMap::with_capacity(raw.len());
        for from in raw.keys() {
            let mut seen = HashSet::new();
            seen.insert(from.as_str());
            let mut target = &raw[from];
            while let Some(next) = raw.get(target) {
                if !seen.insert(target.as_str()) {
                    return Err(ConfigError::AliasCycle(from.clone()));
                }
                target = next;
            }
            resolved.insert(from.clone(), target.clone());
        }

        Ok(Self { aliases: resolved })
    }

    /// Normalize whitespace, then map historical variants to the canonical name.
    pub fn canonicalize(&self, name: &str) -> String {
        let name = normalize_text(name);
        match self.aliases.get(&name) {
            Some(canonical) => canonical.clone(),
            None => name,
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}
