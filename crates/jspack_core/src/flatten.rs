use log::debug;
use std::collections::HashSet;

use crate::graph::{DependencyTree, NodeId};
use crate::types::{AssetKind, FlattenedAssets};

/// Flatten a dependency tree into per-kind load orders.
///
/// Post-order depth-first over `children`, each node emitted at most once
/// with its first occurrence winning, so every dependency precedes every
/// node that (transitively) depends on it. The root lands last among
/// nodes reachable only through it. Cannot fail: the tree was validated
/// during construction.
pub fn flatten(tree: &DependencyTree) -> FlattenedAssets {
    let mut emitted: HashSet<NodeId> = HashSet::new();
    let mut assets = FlattenedAssets::default();
    emit(tree, tree.root(), &mut emitted, &mut assets);
    debug!(
        "Flattened into {} scripts and {} stylesheets",
        assets.scripts.len(),
        assets.stylesheets.len()
    );
    assets
}

fn emit(tree: &DependencyTree, id: NodeId, emitted: &mut HashSet<NodeId>, out: &mut FlattenedAssets) {
    if !emitted.insert(id) {
        return;
    }
    let node = tree.node(id);
    for &child in &node.children {
        emit(tree, child, emitted, out);
    }
    match node.kind {
        AssetKind::Script => out.scripts.push(node.path.clone()),
        AssetKind::Stylesheet => out.stylesheets.push(node.path.clone()),
    }
}
