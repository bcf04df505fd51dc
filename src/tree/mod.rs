//! GitHub Virtual Filesystem
//!
//! GitHub data is presented as a tree rooted at `/`:
//!
//! ```text
//! /
//! ├── users/              every account (lazy)
//! │   └── <login>/
//! │       ├── info        profile
//! │       └── repos/      the account's repositories (lazy)
//! │           └── <repo>  README
//! └── trending/           today's top 25 repositories (lazy)
//!     └── <owner>:<repo>  README
//! ```
//!
//! Nodes live in an arena owned by [`Tree`]; children are owned through index
//! lists and the parent link is a plain [`NodeId`], so there are no reference
//! cycles. Nodes are appended, never removed.

pub mod node;
pub mod path;
pub mod populate;
pub mod resolve;

pub use node::{DirRole, Entry, FileRole, Node, NodeId};
pub use populate::{list_children, populate, TRENDING_LIMIT};
pub use resolve::resolve;

use crate::error::FsError;
use tracing::debug;

/// Web origin that node paths are appended to by [`Tree::url`].
pub const DEFAULT_WEB_ORIGIN: &str = "https://www.github.com";

pub const USERS_DIR: &str = "users";
pub const TRENDING_DIR: &str = "trending";
pub const USER_INFO_FILE: &str = "info";
pub const USER_REPOS_DIR: &str = "repos";

/// Entries allowed directly below `/users/<login>`.
pub const USER_ENTRIES: [&str; 2] = [USER_INFO_FILE, USER_REPOS_DIR];

/// A node to be appended by population or lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NewNode {
    /// `<login>/` with its static `info` and `repos` entries
    User { login: String },
    File { name: String, role: FileRole },
}

impl NewNode {
    fn name(&self) -> &str {
        match self {
            NewNode::User { login } => login,
            NewNode::File { name, .. } => name,
        }
    }
}

/// The node arena
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    users: NodeId,
    trending: NodeId,
    web_origin: String,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create the static skeleton: `/`, `/users` and `/trending`.
    pub fn new() -> Self {
        Self::with_web_origin(DEFAULT_WEB_ORIGIN)
    }

    pub fn with_web_origin(web_origin: impl Into<String>) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            users: NodeId(0),
            trending: NodeId(0),
            web_origin: web_origin.into().trim_end_matches('/').to_string(),
        };
        tree.root = tree.push(Node {
            name: String::new(),
            parent: None,
            entry: Entry::directory(DirRole::Root),
        });
        tree.users = tree.attach(tree.root, USERS_DIR, Entry::directory(DirRole::Users));
        tree.trending = tree.attach(
            tree.root,
            TRENDING_DIR,
            Entry::directory(DirRole::Trending),
        );
        tree
    }

    /// The root of this tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn users_dir(&self) -> NodeId {
        self.users
    }

    pub fn trending_dir(&self) -> NodeId {
        self.trending
    }

    pub fn web_origin(&self) -> &str {
        &self.web_origin
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Panics if `id` was not minted by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).is_root()
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.node(id).is_file()
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        self.node(id).is_directory()
    }

    pub fn is_populated(&self, id: NodeId) -> bool {
        self.node(id).is_populated()
    }

    /// Walk parent links up to the node without a parent.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Absolute path, e.g. `/users/torvalds/repos`; the root is `/`.
    pub fn path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            names.push(self.name(current));
            current = parent;
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// [`path`](Self::path) appended to the web origin.
    pub fn url(&self, id: NodeId) -> String {
        let path = self.path(id);
        if path == "/" {
            format!("{}/", self.web_origin)
        } else {
            format!("{}{}", self.web_origin, path)
        }
    }

    /// The github.com page that shows what the node stands for.
    pub fn web_url(&self, id: NodeId) -> String {
        let origin = &self.web_origin;
        match &self.node(id).entry {
            Entry::Directory { role, .. } => match role {
                DirRole::Root | DirRole::Users => format!("{}/", origin),
                DirRole::Trending => format!("{}/trending", origin),
                DirRole::User { login } => format!("{}/{}", origin, login),
                DirRole::UserRepos { login } => {
                    format!("{}/{}?tab=repositories", origin, login)
                }
                DirRole::Generic => self.url(id),
            },
            Entry::File { role } => match role {
                FileRole::Repo { owner, repo } => format!("{}/{}/{}", origin, owner, repo),
                FileRole::UserInfo { login } => format!("{}/{}", origin, login),
            },
        }
    }

    /// First child of `id` whose name equals `name` exactly.
    pub fn find_child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.name(*child) == name)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Push a node and link it into `parent`'s children.
    fn attach(&mut self, parent: NodeId, name: &str, entry: Entry) -> NodeId {
        debug_assert!(path::is_valid_name(name), "invalid node name {:?}", name);
        let id = self.push(Node {
            name: name.to_string(),
            parent: Some(parent),
            entry,
        });
        if let Entry::Directory { children, .. } = &mut self.nodes[parent.0].entry {
            children.push(id);
        }
        id
    }

    /// Append a new node below the directory `parent`.
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        entry: Entry,
    ) -> Result<NodeId, FsError> {
        if !self.is_directory(parent) {
            return Err(FsError::bad_path(
                path::join(&self.path(parent), name),
                "not a directory",
            ));
        }
        Ok(self.attach(parent, name, entry))
    }

    /// Append `new` below `parent`, expanding users into their static entries.
    pub(crate) fn insert(&mut self, parent: NodeId, new: NewNode) -> Result<NodeId, FsError> {
        match new {
            NewNode::User { login } => {
                let user = self.add_child(
                    parent,
                    &login,
                    Entry::directory(DirRole::User {
                        login: login.clone(),
                    }),
                )?;
                self.attach(
                    user,
                    USER_INFO_FILE,
                    Entry::file(FileRole::UserInfo {
                        login: login.clone(),
                    }),
                );
                self.attach(
                    user,
                    USER_REPOS_DIR,
                    Entry::directory(DirRole::UserRepos { login }),
                );
                Ok(user)
            }
            NewNode::File { name, role } => self.add_child(parent, &name, Entry::file(role)),
        }
    }

    /// Append a fetched batch and mark `parent` populated.
    ///
    /// Entries with invalid names, and names already present among the
    /// siblings, are skipped so sibling names stay unique.
    pub(crate) fn complete_population(
        &mut self,
        parent: NodeId,
        batch: Vec<NewNode>,
    ) -> Result<usize, FsError> {
        if !self.is_directory(parent) {
            return Err(FsError::bad_path(self.path(parent), "not a directory"));
        }
        let mut added = 0;
        for new in batch {
            let name = new.name();
            if !path::is_valid_name(name) {
                tracing::warn!(name, parent = %self.path(parent), "Skipping entry with invalid name");
                continue;
            }
            if self.find_child(parent, name).is_some() {
                debug!(name, "Skipping duplicate entry");
                continue;
            }
            self.insert(parent, new)?;
            added += 1;
        }
        if let Entry::Directory { populated, .. } = &mut self.nodes[parent.0].entry {
            *populated = true;
        }
        Ok(added)
    }
}
