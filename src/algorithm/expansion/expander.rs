//! Expansion of a base code with its modifier groups.

use crate::models::ModifierGroup;

use super::definitions::DefinitionSet;

/// Emit every nested combination of the groups appended to the base
///
/// Each suffix of the first group is emitted, then used as the base for the
/// remaining groups. The base itself is not emitted.
pub fn expand_into(
    base_code: &str,
    base_label: &str,
    groups: &[&ModifierGroup],
    definitions: &mut DefinitionSet,
) {
    let Some((group, rest)) = groups.split_first() else {
        return;
    };

    for entry in group.entries() {
        let code = format!("{base_code}{}", entry.key);
        let label = format!("{base_label}, {}", entry.label);

        if rest.is_empty() {
            definitions.insert(code, label);
        } else {
            definitions.insert(code.clone(), label.clone());
            expand_into(&code, &label, rest, definitions);
        }
    }
}

/// Number of definitions [`expand_into`] emits for these groups
///
/// Level `k` of the nesting holds `|g1| * ... * |gk|` codes, so the total is
/// the sum of the prefix products of the group sizes.
#[must_use]
pub fn combination_count(groups: &[&ModifierGroup]) -> usize {
    groups
        .iter()
        .scan(1usize, |level, group| {
            *level *= group.len();
            Some(*level)
        })
        .sum()
}
