//! Transitive dependency resolution over the installed-extension set.
//!
//! Resolution walks declared dependency ids breadth-first against a
//! read-only snapshot of what is installed. Ids that match nothing
//! installed, or that match more than one installed extension, are dropped
//! rather than reported; a caller wanting visibility into unresolved
//! dependencies diffs the declared list against the result. The dropped
//! ids are logged at debug level.

use std::collections::VecDeque;

use ext_identity::{ExtensionIdentifier, same_extension};

use crate::record::InstalledExtension;

/// Compute the transitive dependency closure of `root` against `installed`.
///
/// Dependency ids are processed in breadth-first order: the root's
/// declared list seeds the queue, and every accepted dependency enqueues
/// its own declarations at the tail. An id is accepted only when exactly
/// one installed extension matches it under the canonical identity rule;
/// already-accepted ids are skipped, which also bounds the walk under
/// cyclic manifests. `root` itself never appears in the result, even when
/// manifests declare a cycle back to it.
///
/// The result preserves discovery order and is deterministic for a fixed
/// `installed` ordering and fixed declaration order.
pub fn dependencies_of<'a>(
    installed: &'a [InstalledExtension],
    root: &InstalledExtension,
) -> Vec<&'a InstalledExtension> {
    let mut pending: VecDeque<String> = root
        .manifest
        .extension_dependencies
        .iter()
        .cloned()
        .collect();
    let mut result: Vec<&'a InstalledExtension> = Vec::new();

    while let Some(dep_id) = pending.pop_front() {
        let declared = ExtensionIdentifier::new(dep_id);
        if same_extension(&root.identifier, &declared) {
            continue;
        }
        if result
            .iter()
            .any(|accepted| same_extension(&accepted.identifier, &declared))
        {
            continue;
        }

        let matches: Vec<&'a InstalledExtension> = installed
            .iter()
            .filter(|ext| same_extension(&ext.identifier, &declared))
            .collect();
        match matches.as_slice() {
            [only] => {
                result.push(*only);
                pending.extend(only.manifest.extension_dependencies.iter().cloned());
            }
            [] => {
                tracing::debug!(id = %declared.id, "declared dependency is not installed; dropping");
            }
            _ => {
                tracing::debug!(
                    id = %declared.id,
                    matches = matches.len(),
                    "declared dependency id is ambiguous; dropping"
                );
            }
        }
    }

    result
}
