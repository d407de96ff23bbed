//! Optimal strategies for walking the isogeny tree (De Feo, Jao and Plut, section 4.2).
//!
//! A strategy for a tree with n leaves is the preorder list of split sizes: at a node
//! covering n rows, step down b rows with point multiplications, then solve the
//! remaining two subtrees of size n - b and b. Point steps cost `point_cost` and
//! evaluating an isogeny at a pushed point costs `isogeny_cost`.
use crate::error::{Result, SikeError};

/// Computes the cheapest strategy for `n` rows by dynamic programming over subtree sizes.
/// Ties go to the smallest split.
pub fn optimal_strategy(n: usize, point_cost: u64, isogeny_cost: u64) -> Vec<usize> {
    let mut strategies: Vec<Vec<usize>> = vec![vec![], vec![]];
    let mut costs: Vec<u64> = vec![0, 0];

    for i in 2..=n {
        let (mut best_b, mut best_cost) = (0, u64::MAX);
        for b in 1..i {
            let cost = costs[i - b]
                + costs[b]
                + (b as u64) * point_cost
                + ((i - b) as u64) * isogeny_cost;
            if cost < best_cost {
                (best_b, best_cost) = (b, cost);
            }
        }

        let mut strategy = Vec::with_capacity(i - 1);
        strategy.push(best_b);
        strategy.extend_from_slice(&strategies[i - best_b]);
        strategy.extend_from_slice(&strategies[best_b]);
        strategies.push(strategy);
        costs.push(best_cost);
    }

    strategies.swap_remove(n.max(1))
}

/// Replays the traversal driven by `strategy` and returns the largest number of points
/// held on the stack at once. Fails when the strategy does not describe a tree of `rows` rows.
pub fn max_tree_points(rows: usize, strategy: &[usize]) -> Result<usize> {
    let malformed = || SikeError::InvalidParameter("malformed isogeny strategy".to_string());

    let mut stack: Vec<usize> = vec![];
    let (mut index, mut ii, mut max_points) = (0, 0, 0);
    for row in 1..rows {
        while index < rows - row {
            stack.push(index);
            max_points = max_points.max(stack.len());
            let m = *strategy.get(ii).ok_or_else(malformed)?;
            if m == 0 {
                return Err(malformed());
            }
            ii += 1;
            index += m;
        }
        index = stack.pop().ok_or_else(malformed)?;
    }

    if ii != strategy.len() {
        return Err(malformed());
    }
    Ok(max_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_trees() {
        assert_eq!(optimal_strategy(1, 112, 76), Vec::<usize>::new());
        assert_eq!(optimal_strategy(2, 112, 76), vec![1]);
        let s = optimal_strategy(3, 110, 56);
        assert_eq!(s.len(), 2);
        assert_eq!(max_tree_points(3, &s).unwrap(), 2);
    }

    #[test]
    fn strategy_shape() {
        for (n, p, q) in [(108, 112, 76), (137, 110, 56), (186, 112, 76)] {
            let s = optimal_strategy(n, p, q);
            assert_eq!(s.len(), n - 1);
            assert!(max_tree_points(n, &s).unwrap() < n);
        }
    }

    #[test]
    fn extreme_strategies() {
        let n = 10;
        // Multiplying all the way down from the root each time keeps a single point
        let multiplications: Vec<usize> = (1..n).rev().collect();
        assert_eq!(max_tree_points(n, &multiplications).unwrap(), 1);
        // Single steps push every intermediate point
        let evaluations = vec![1; n - 1];
        assert_eq!(max_tree_points(n, &evaluations).unwrap(), n - 1);
    }

    #[test]
    fn rejects_malformed() {
        assert!(max_tree_points(5, &[1, 1]).is_err());
        assert!(max_tree_points(3, &[0, 1]).is_err());
        assert!(max_tree_points(3, &[1, 1, 1]).is_err());
    }
}
