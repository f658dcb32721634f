//! Property tests for the dependency forest.

use proptest::prelude::*;

use fluxtree::{DependencyForest, Node, Readiness};

/// Random DAG: node `i` may only depend on nodes with a smaller index.
pub fn dag_strategy() -> impl Strategy<Value = Vec<Node>> {
    (1usize..24)
        .prop_flat_map(|n| {
            let deps = (0..n)
                .map(|i| proptest::collection::vec(0..i.max(1), 0..=i.min(3)))
                .collect::<Vec<_>>();
            let ready = proptest::collection::vec(0u8..3, n);
            (Just(n), deps, ready)
        })
        .prop_map(|(n, deps, ready)| {
            (0..n)
                .map(|i| {
                    let readiness = match ready[i] {
                        0 => Readiness::Ready,
                        1 => Readiness::NotReady,
                        _ => Readiness::Unknown,
                    };
                    let names: Vec<String> = if i == 0 {
                        Vec::new()
                    } else {
                        deps[i].iter().map(|d| format!("n{}", d)).collect()
                    };
                    Node::new(format!("n{}", i), readiness).with_dependencies(names)
                })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Graphs that only point backwards never contain a cycle.
    #[test]
    fn property_backward_edges_are_acyclic(nodes in dag_strategy()) {
        let forest = DependencyForest::new(nodes).unwrap();
        prop_assert!(forest.find_cycle().is_none());
        prop_assert!(!forest.roots().is_empty());
    }

    /// PROPERTY: `children_of` is the inverse of the dependency lists.
    #[test]
    fn property_children_are_dependents(nodes in dag_strategy()) {
        let forest = DependencyForest::new(nodes).unwrap();
        for parent in forest.nodes() {
            for child in forest.children_of(parent.name()) {
                prop_assert!(child.depends_on(parent.name()));
            }
            let dependents = forest
                .nodes()
                .iter()
                .filter(|n| n.depends_on(parent.name()))
                .count();
            prop_assert_eq!(forest.children_of(parent.name()).len(), dependents);
        }
    }

    /// PROPERTY: Adding a back edge from the first root creates a detectable cycle.
    #[test]
    fn property_closing_a_chain_is_a_cycle(len in 1usize..12) {
        let nodes: Vec<Node> = (0..len)
            .map(|i| {
                let dep = format!("c{}", (i + len - 1) % len);
                Node::new(format!("c{}", i), Readiness::Ready).with_dependencies([dep])
            })
            .collect();
        let forest = DependencyForest::new(nodes).unwrap();
        let cycle = forest.find_cycle().unwrap();
        prop_assert_eq!(cycle.first(), cycle.last());
        prop_assert_eq!(cycle.len(), len + 1);
    }
}
