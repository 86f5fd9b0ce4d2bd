use log::{debug, trace};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::annotation::parse_annotations;
use crate::config::RemotePathConfig;
use crate::error::{PackError, Result};
use crate::resolver::resolve;
use crate::types::AssetKind;

pub type NodeId = usize;

/// One graph vertex, owned by the tree's arena. Children are stored in
/// declaration order; that order determines load order among siblings.
#[derive(Debug)]
pub struct Node {
    pub path: PathBuf,
    pub kind: AssetKind,
    pub children: Vec<NodeId>,
}

/// The dependency graph reachable from one root file.
///
/// Nodes live in an arena addressed by `NodeId` and are deduplicated by
/// canonical path, so a diamond dependency collapses to a single vertex.
/// Built fresh per root with no cross-invocation caching, immutable once
/// built.
#[derive(Debug)]
pub struct DependencyTree {
    nodes: Vec<Node>,
    index: HashMap<PathBuf, NodeId>,
    root: NodeId,
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    InProgress,
    Done,
}

impl DependencyTree {
    /// Depth-first construction from `root_path`, reading and parsing each
    /// reachable file exactly once. Fails with `MissingFile`, `Parsing`,
    /// `Read`, or `Recursion` (reporting the full cycle chain).
    pub fn build(root_path: &Path, remote: &RemotePathConfig) -> Result<DependencyTree> {
        debug!("Building dependency tree from {}", root_path.display());
        let canonical_root = root_path.canonicalize().map_err(|_| PackError::MissingFile {
            path: root_path.to_path_buf(),
            referenced_from: None,
        })?;

        let mut builder = Builder {
            nodes: Vec::new(),
            index: HashMap::new(),
            states: HashMap::new(),
            in_progress: Vec::new(),
            remote,
        };
        let root = builder.visit(&canonical_root)?;

        debug!("Built dependency tree with {} nodes", builder.nodes.len());
        Ok(DependencyTree { nodes: builder.nodes, index: builder.index, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_for_path(&self, path: &Path) -> Option<&Node> {
        self.index.get(path).map(|&id| &self.nodes[id])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Transient construction state: the visitation map does the cycle
/// detection, the in-progress stack reconstructs the offending chain for
/// the error message. Neither outlives `build`.
struct Builder<'a> {
    nodes: Vec<Node>,
    index: HashMap<PathBuf, NodeId>,
    states: HashMap<PathBuf, VisitState>,
    in_progress: Vec<PathBuf>,
    remote: &'a RemotePathConfig,
}

impl Builder<'_> {
    fn visit(&mut self, path: &Path) -> Result<NodeId> {
        match self.states.get(path) {
            Some(VisitState::Done) => {
                trace!("Reusing node for {}", path.display());
                return Ok(self.index[path]);
            }
            Some(VisitState::InProgress) => {
                let start = self.in_progress.iter().position(|p| p == path).unwrap_or(0);
                let mut cycle: Vec<PathBuf> = self.in_progress[start..].to_vec();
                cycle.push(path.to_path_buf());
                return Err(PackError::Recursion { cycle });
            }
            None => {}
        }

        let kind = AssetKind::from_path(path).ok_or_else(|| PackError::Parsing {
            file: path.to_path_buf(),
            line: None,
            reason: "unsupported file type, expected a .js or .css file".to_string(),
        })?;

        self.states.insert(path.to_path_buf(), VisitState::InProgress);
        self.in_progress.push(path.to_path_buf());

        let source = fs::read_to_string(path)
            .map_err(|e| PackError::Read { path: path.to_path_buf(), source: e })?;
        let annotations = parse_annotations(&source, path)?;
        drop(source);
        trace!("{} declares {} dependencies", path.display(), annotations.len());

        let mut children = Vec::with_capacity(annotations.len());
        for annotation in &annotations {
            let child_path = resolve(annotation, path, self.remote)?;
            children.push(self.visit(&child_path)?);
        }

        let id = self.nodes.len();
        self.nodes.push(Node { path: path.to_path_buf(), kind, children });
        self.index.insert(path.to_path_buf(), id);
        self.in_progress.pop();
        self.states.insert(path.to_path_buf(), VisitState::Done);
        Ok(id)
    }
}
