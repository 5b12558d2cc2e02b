//! Partitioning collections into identity equivalence classes.

use crate::identifier::{ExtensionIdentifier, same_extension};

/// Partition `items` into groups of records naming the same extension.
///
/// `identifier_of` projects each item onto its identifier. Groups appear
/// in first-seen order and keep their members in input order. The scan is
/// linear over existing groups per item, which is fine at the
/// tens-to-hundreds scale extension sets have; matching by uuid and
/// case-insensitive id makes a plain hash key unreliable here, so the
/// comparator is applied directly.
pub fn group_by_extension<T, F>(items: impl IntoIterator<Item = T>, identifier_of: F) -> Vec<Vec<T>>
where
    F: Fn(&T) -> &ExtensionIdentifier,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    for item in items {
        let position = groups.iter().position(|group| {
            group
                .iter()
                .any(|member| same_extension(identifier_of(member), identifier_of(&item)))
        });
        match position {
            Some(index) => groups[index].push(item),
            None => groups.push(vec![item]),
        }
    }
    groups
}
