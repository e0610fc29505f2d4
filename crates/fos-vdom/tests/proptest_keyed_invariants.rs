//! Property-based invariant tests for keyed children reconciliation.
//!
//! For arbitrary prior/next key lists drawn from a shared pool:
//!
//! 1. Host child order equals the next key order
//! 2. Every key present in both lists keeps its host node
//! 3. Every key dropped from the list is detached from the host
//! 4. Both move strategies agree on the result
//! 5. LIS placement never moves more nodes than last-placed-index placement
//! 6. Re-rendering the same list is a no-op

use std::collections::HashMap;

use fos_dom::{DomTree, NodeId};
use fos_vdom::{Key, MoveStrategy, PatchStats, ReconcilerConfig, Renderer, VNode, h};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Two shuffled key lists sampled from the same pool, so they overlap
/// partially.
fn key_lists() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    (1usize..24).prop_flat_map(|len| {
        let pool: Vec<u32> = (0..len as u32 * 2).collect();
        (
            prop::sample::subsequence(pool.clone(), 0..=len).prop_shuffle(),
            prop::sample::subsequence(pool, 0..=len).prop_shuffle(),
        )
    })
}

fn strategy() -> impl Strategy<Value = MoveStrategy> {
    prop_oneof![
        Just(MoveStrategy::LongestIncreasingSubsequence),
        Just(MoveStrategy::LastPlacedIndex),
    ]
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn list(keys: &[u32]) -> VNode<NodeId> {
    h("ul", None, keys.iter().map(|&key| h("li", None, key).with_key(key)).collect::<Vec<_>>())
}

struct Outcome {
    renderer: Renderer<DomTree>,
    container: NodeId,
    before: HashMap<Key, NodeId>,
    stats: PatchStats,
}

fn keyed_nodes(renderer: &Renderer<DomTree>, container: NodeId) -> HashMap<Key, NodeId> {
    renderer
        .rendered(&container)
        .and_then(VNode::children)
        .map(|children| {
            children
                .iter()
                .filter_map(|child| Some((child.key()?.clone(), *child.realized()?)))
                .collect()
        })
        .unwrap_or_default()
}

fn host_order(outcome: &Outcome) -> Vec<String> {
    let dom = outcome.renderer.host();
    let ul = *outcome.renderer.rendered(&outcome.container).unwrap().realized().unwrap();
    dom.child_ids(ul).into_iter().map(|id| dom.text_content(id)).collect()
}

fn rerender(move_strategy: MoveStrategy, prior: &[u32], next: &[u32]) -> Outcome {
    let mut dom = DomTree::new();
    let container = dom.create_element("main");
    dom.append_child(dom.root(), container).unwrap();

    let config = ReconcilerConfig { move_strategy, ..Default::default() };
    let mut renderer = Renderer::with_config(dom, config);
    renderer.render(list(prior), &container).unwrap();
    let before = keyed_nodes(&renderer, container);

    renderer.render(list(next), &container).unwrap();
    let stats = renderer.last_stats();
    Outcome { renderer, container, before, stats }
}

// ═══════════════════════════════════════════════════════════════════════
// 1-3. Order, reuse and removal
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn host_order_matches_next((prior, next) in key_lists(), move_strategy in strategy()) {
        let outcome = rerender(move_strategy, &prior, &next);
        let expected: Vec<String> = next.iter().map(u32::to_string).collect();
        prop_assert_eq!(host_order(&outcome), expected);
    }

    #[test]
    fn surviving_keys_keep_their_nodes((prior, next) in key_lists(), move_strategy in strategy()) {
        let outcome = rerender(move_strategy, &prior, &next);
        let after = keyed_nodes(&outcome.renderer, outcome.container);

        for key in next.iter().filter(|key| prior.contains(key)) {
            let key = Key::from(*key);
            prop_assert_eq!(after.get(&key), outcome.before.get(&key), "key {} lost its node", key);
        }

        let survivors = next.iter().filter(|key| prior.contains(key)).count();
        prop_assert_eq!(outcome.stats.nodes_created, 2 * (next.len() - survivors));
    }

    #[test]
    fn dropped_keys_are_detached((prior, next) in key_lists(), move_strategy in strategy()) {
        let outcome = rerender(move_strategy, &prior, &next);
        let dom = outcome.renderer.host();

        for key in prior.iter().filter(|key| !next.contains(key)) {
            let node = outcome.before[&Key::from(*key)];
            prop_assert_eq!(dom.parent(node), None, "key {} still attached", key);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Strategies agree; LIS is never worse
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strategies_agree((prior, next) in key_lists()) {
        let lis = rerender(MoveStrategy::LongestIncreasingSubsequence, &prior, &next);
        let last_placed = rerender(MoveStrategy::LastPlacedIndex, &prior, &next);

        prop_assert_eq!(host_order(&lis), host_order(&last_placed));
        prop_assert_eq!(lis.stats.nodes_created, last_placed.stats.nodes_created);
        prop_assert_eq!(lis.stats.nodes_removed, last_placed.stats.nodes_removed);
        prop_assert_eq!(lis.stats.nodes_reused, last_placed.stats.nodes_reused);
    }

    #[test]
    fn lis_moves_at_most_last_placed((prior, next) in key_lists()) {
        let lis = rerender(MoveStrategy::LongestIncreasingSubsequence, &prior, &next);
        let last_placed = rerender(MoveStrategy::LastPlacedIndex, &prior, &next);

        prop_assert!(
            lis.stats.nodes_moved <= last_placed.stats.nodes_moved,
            "LIS moved {} nodes, last-placed moved {}",
            lis.stats.nodes_moved,
            last_placed.stats.nodes_moved
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Idempotence
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_rerender_is_noop((keys, _) in key_lists(), move_strategy in strategy()) {
        let mut outcome = rerender(move_strategy, &keys, &keys);
        prop_assert!(outcome.stats.is_noop(), "{:?}", outcome.stats);

        outcome.renderer.host_mut().take_records();
        outcome.renderer.render(list(&keys), &outcome.container).unwrap();
        prop_assert!(outcome.renderer.host().records().is_empty());
    }
}
