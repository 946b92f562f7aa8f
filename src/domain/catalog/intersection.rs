//! Ordered set intersection of category member lists.

use std::collections::HashSet;
use std::hash::Hash;

/// Intersects member lists, keeping the first list's order.
///
/// An id survives only if it appears in every list. Duplicates in the first
/// list are collapsed to their first occurrence, so each id is returned once.
/// No lists means no constraint to satisfy, which yields nothing.
pub fn intersect_ordered<T>(lists: &[Vec<T>]) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(first.len());
    let mut candidates: Vec<T> = first.iter().copied().filter(|id| seen.insert(*id)).collect();

    for list in rest {
        if candidates.is_empty() {
            break;
        }
        let members: HashSet<T> = list.iter().copied().collect();
        candidates.retain(|id| members.contains(id));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_list_is_deduplicated_in_order() {
        assert_eq!(intersect_ordered(&[vec![6, 146, 6, 4]]), vec![6, 146, 4]);
    }

    #[test]
    fn test_keeps_first_list_order() {
        let fire = vec![146, 6, 250, 4];
        let flying = vec![6, 16, 146, 250];
        assert_eq!(intersect_ordered(&[fire, flying]), vec![146, 6, 250]);
    }

    #[test]
    fn test_order_follows_first_selected_list() {
        let flying = vec![6, 16, 146, 250];
        let fire = vec![146, 6, 250, 4];
        assert_eq!(intersect_ordered(&[flying, fire]), vec![6, 146, 250]);
    }

    #[test]
    fn test_three_way_intersection() {
        let a = vec![1, 2, 3, 4, 5];
        let b = vec![5, 4, 3, 2];
        let c = vec![2, 4, 9];
        assert_eq!(intersect_ordered(&[a, b, c]), vec![2, 4]);
    }

    #[test]
    fn test_disjoint_lists_yield_empty() {
        assert!(intersect_ordered(&[vec![1, 2], vec![3, 4]]).is_empty());
    }

    #[test]
    fn test_no_lists_yield_empty() {
        let lists: Vec<Vec<u32>> = Vec::new();
        assert!(intersect_ordered(&lists).is_empty());
    }

    proptest! {
        #[test]
        fn prop_result_is_exactly_the_common_members(
            lists in prop::collection::vec(prop::collection::vec(0u32..40, 0..30), 1..4)
        ) {
            let result = intersect_ordered(&lists);

            let unique: HashSet<u32> = result.iter().copied().collect();
            prop_assert_eq!(unique.len(), result.len());

            for id in &result {
                for list in &lists {
                    prop_assert!(list.contains(id));
                }
            }

            let expected: Vec<u32> = {
                let mut seen = HashSet::new();
                lists[0]
                    .iter()
                    .copied()
                    .filter(|id| lists.iter().all(|l| l.contains(id)))
                    .filter(|id| seen.insert(*id))
                    .collect()
            };
            prop_assert_eq!(result, expected);
        }
    }
}
