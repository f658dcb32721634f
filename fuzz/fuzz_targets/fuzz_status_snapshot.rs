#![no_main]

use fluxtree::infrastructure::status::parse_snapshot;
use fluxtree::{DependencyForest, Node, TreeView};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing, building and rendering must never panic, whatever the input
        let Ok(records) = parse_snapshot(content) else {
            return;
        };
        let nodes: Vec<Node> = records.into_iter().map(Node::from).collect();
        if let Ok(forest) = DependencyForest::new(nodes) {
            if forest.ensure_acyclic().is_ok() {
                let _ = TreeView::new(&forest).render();
            }
        }
    }
});
