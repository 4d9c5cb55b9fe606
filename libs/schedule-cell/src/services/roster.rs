use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::{Pod, ResolvedPod};

/// Credential suffixes stripped before names are compared. Covers the plain
/// and punctuated spellings the feed is known to emit.
const CREDENTIAL_TOKENS: [&str; 6] = ["md", "m.d.", "pa", "p.a.", "np", "n.p."];

/// Practitioner pods and desired display order within each. The feed has no
/// notion of pods; membership and ordering are curated here.
pub fn default_pods() -> Vec<Pod> {
    vec![
        Pod {
            name: "North pod".to_string(),
            practitioners: vec![
                "Don Bui".to_string(),
                "Leah Nakamura".to_string(),
                "Paul Oh".to_string(),
                "Tammy Ho".to_string(),
                "Ashley Swanson".to_string(),
                "Michael Bui".to_string(),
            ],
        },
        Pod {
            name: "Central pod".to_string(),
            practitioners: vec![
                "Moses Kim".to_string(),
                "Daniel Su".to_string(),
                "Aaron Spitz".to_string(),
                "Neyssan Tebyani".to_string(),
                "Daniel Cabanero".to_string(),
                "Taralyn Johnson".to_string(),
            ],
        },
        Pod {
            name: "South pod".to_string(),
            practitioners: vec![
                "Josh Randall".to_string(),
                "Poone Shoureshi".to_string(),
                "Karan Singh".to_string(),
                "James Meaglia".to_string(),
                "Olivia Carr".to_string(),
                "Jennifer Kim".to_string(),
            ],
        },
    ]
}

/// Lower-case, treat commas as spaces, split on whitespace, drop credential
/// tokens. "Doe, Jane R. MD" and "Jane Doe" both reduce to name tokens only.
pub fn tokenize_name(name: &str) -> Vec<String> {
    name.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .filter(|t| !CREDENTIAL_TOKENS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Resolve a canonical roster name to a practitioner id from the feed.
///
/// A record matches when every token of the canonical name appears among the
/// record's tokens. The rule is deliberately asymmetric: extra middle names
/// or initials on the feed side are tolerated, a missing canonical token is
/// fatal. When several records match, the lexicographically smallest id wins
/// and the ambiguity is logged.
pub fn find_practitioner_id(
    target_name: &str,
    practitioner_names: &HashMap<String, String>,
) -> Option<String> {
    let target_tokens = tokenize_name(target_name);
    if target_tokens.is_empty() {
        return None;
    }

    let mut candidates: Vec<&String> = practitioner_names
        .iter()
        .filter(|(id, name)| {
            let raw = if name.is_empty() { id.as_str() } else { name.as_str() };
            let raw_tokens: HashSet<String> = tokenize_name(raw).into_iter().collect();
            target_tokens.iter().all(|t| raw_tokens.contains(t))
        })
        .map(|(id, _)| id)
        .collect();

    candidates.sort();

    if candidates.len() > 1 {
        warn!(
            "Roster entry {:?} matched {} practitioner records, keeping {}",
            target_name,
            candidates.len(),
            candidates[0]
        );
    }

    candidates.first().map(|id| (*id).clone())
}

/// Resolve every pod against the feed's practitioner records. Canonical
/// order is preserved; names with no matching record are silently omitted,
/// which is the expected state whenever a practitioner is off the feed.
pub fn resolve_pods(
    pods: &[Pod],
    practitioner_names: &HashMap<String, String>,
) -> Vec<ResolvedPod> {
    pods.iter()
        .map(|pod| ResolvedPod {
            name: pod.name.clone(),
            practitioner_ids: pod
                .practitioners
                .iter()
                .filter_map(|display_name| find_practitioner_id(display_name, practitioner_names))
                .collect(),
        })
        .collect()
}
