//! Property tests for the tree renderer.

use proptest::prelude::*;

use fluxtree::{DependencyForest, Node, Readiness, StatusClass, TreeOptions, TreeView};

/// Random tree: node `i` has exactly one parent with a smaller index.
fn tree_strategy() -> impl Strategy<Value = Vec<Node>> {
    (1usize..24)
        .prop_flat_map(|n| {
            let parents = (0..n).map(|i| 0..i.max(1)).collect::<Vec<_>>();
            (Just(n), parents)
        })
        .prop_map(|(n, parents)| {
            (0..n)
                .map(|i| {
                    let node = Node::new(format!("n{}", i), Readiness::Ready);
                    if i == 0 {
                        node
                    } else {
                        node.with_dependencies([format!("n{}", parents[i])])
                    }
                })
                .collect()
        })
}

const CONNECTORS: [&str; 2] = ["├── ", "└── "];

/// Lines for the children of `parent`, built straight from the forest.
fn expected_children(forest: &DependencyForest, parent: &str, prefix: &str, out: &mut String) {
    let children = forest.children_of(parent);
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (connector, continuation) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        out.push_str(&format!("{}{}● {}\n", prefix, connector, child.name()));
        expected_children(forest, child.name(), &format!("{}{}", prefix, continuation), out);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A tree-shaped snapshot renders exactly one line per node.
    #[test]
    fn property_one_line_per_node(nodes in tree_strategy()) {
        let count = nodes.len();
        let forest = DependencyForest::new(nodes).unwrap();
        let rendered = TreeView::new(&forest).render().unwrap();
        prop_assert_eq!(rendered.lines().count(), count);
    }

    /// PROPERTY: Line prefixes are built from four-column segments and every
    /// non-root line carries exactly one connector right before the glyph.
    #[test]
    fn property_prefix_segments_are_well_formed(nodes in tree_strategy()) {
        let forest = DependencyForest::new(nodes).unwrap();
        let rendered = TreeView::new(&forest).render().unwrap();

        for line in rendered.lines() {
            let glyph_at = line.find('●').unwrap();
            let head = &line[..glyph_at];
            if head.is_empty() {
                continue;
            }
            let connector = CONNECTORS
                .iter()
                .find(|c| head.ends_with(*c))
                .copied();
            prop_assert!(connector.is_some(), "no connector in {:?}", line);
            let indent = &head[..head.len() - connector.unwrap().len()];
            let mut rest = indent;
            while !rest.is_empty() {
                if let Some(r) = rest.strip_prefix("│   ") {
                    rest = r;
                } else if let Some(r) = rest.strip_prefix("    ") {
                    rest = r;
                } else {
                    prop_assert!(false, "bad indent segment in {:?}", line);
                }
            }
        }
    }

    /// PROPERTY: Under every parent, all children but the last use the
    /// branch connector and the last one closes; descendants are indented
    /// with a pipe below open branches and blank space below closed ones.
    #[test]
    fn property_connectors_follow_sibling_order(nodes in tree_strategy()) {
        let forest = DependencyForest::new(nodes).unwrap();
        let rendered = TreeView::new(&forest).render().unwrap();

        let mut expected = String::new();
        for root in forest.roots() {
            expected.push_str(&format!("● {}\n", root.name()));
            expected_children(&forest, root.name(), "", &mut expected);
        }
        prop_assert_eq!(rendered, expected);
    }

    /// PROPERTY: Rendering is pure: the same forest yields the same text.
    #[test]
    fn property_render_is_idempotent(nodes in tree_strategy(), messages in any::<bool>()) {
        let forest = DependencyForest::new(nodes).unwrap();
        let options = TreeOptions { show_messages: messages, ..TreeOptions::default() };
        let view = TreeView::new(&forest).with_options(options);
        prop_assert_eq!(view.render().unwrap(), view.render().unwrap());
    }

    /// PROPERTY: Classification only looks at readiness and message.
    #[test]
    fn property_classification_is_total(ready in 0u8..3, message in ".{0,40}") {
        let readiness = match ready {
            0 => Readiness::Ready,
            1 => Readiness::NotReady,
            _ => Readiness::Unknown,
        };
        let status = StatusClass::classify(readiness, &message);
        match readiness {
            Readiness::Ready => prop_assert_eq!(status, StatusClass::Healthy),
            _ if message.contains("dependency") => prop_assert_eq!(status, StatusClass::Blocked),
            _ => prop_assert_eq!(status, StatusClass::Failed),
        }
    }
}
