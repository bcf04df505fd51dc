//! Virtual filesystem node types

use serde::{Deserialize, Serialize};

/// Index of a node inside its [`Tree`](crate::tree::Tree) arena.
///
/// Ids are only minted by the tree that owns the node and stay valid for the
/// lifetime of that tree (nodes are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a directory stands for; decides how it is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirRole {
    /// `/`
    Root,
    /// `/users`: one entry per GitHub account
    Users,
    /// `/trending`: today's trending repositories
    Trending,
    /// `/users/<login>`: holds `info` and `repos`
    User { login: String },
    /// `/users/<login>/repos`
    UserRepos { login: String },
    /// Any other directory; never gains entries
    Generic,
}

impl DirRole {
    /// Whether children come from the data provider (and so start unpopulated).
    pub fn is_provider_backed(&self) -> bool {
        matches!(
            self,
            DirRole::Users | DirRole::Trending | DirRole::UserRepos { .. }
        )
    }
}

/// What a file stands for; decides what `cat` shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileRole {
    /// A repository; content is its README
    Repo { owner: String, repo: String },
    /// `/users/<login>/info`; content is the profile
    UserInfo { login: String },
}

/// Directory or file payload of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory {
        role: DirRole,
        children: Vec<NodeId>,
        populated: bool,
    },
    File { role: FileRole },
}

impl Entry {
    /// A directory with no children yet. Only provider-backed roles start unpopulated.
    pub fn directory(role: DirRole) -> Self {
        let populated = !role.is_provider_backed();
        Entry::Directory {
            role,
            children: Vec::new(),
            populated,
        }
    }

    pub fn file(role: FileRole) -> Self {
        Entry::File { role }
    }
}

/// One filesystem entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) entry: Entry,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.entry, Entry::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        !self.is_directory()
    }

    /// Files are trivially populated.
    pub fn is_populated(&self) -> bool {
        match &self.entry {
            Entry::Directory { populated, .. } => *populated,
            Entry::File { .. } => true,
        }
    }

    /// Children in insertion order; always empty for files.
    pub fn children(&self) -> &[NodeId] {
        match &self.entry {
            Entry::Directory { children, .. } => children,
            Entry::File { .. } => &[],
        }
    }

    pub fn dir_role(&self) -> Option<&DirRole> {
        match &self.entry {
            Entry::Directory { role, .. } => Some(role),
            Entry::File { .. } => None,
        }
    }

    pub fn file_role(&self) -> Option<&FileRole> {
        match &self.entry {
            Entry::File { role } => Some(role),
            Entry::Directory { .. } => None,
        }
    }
}
