//! Path resolution
//!
//! Grammar, first matching rule wins:
//!
//! | input            | result                                        |
//! |------------------|-----------------------------------------------|
//! | `""` or `.`      | the starting node                             |
//! | `/rest`          | `rest` from the root                          |
//! | `./rest`         | `rest` from the starting node                 |
//! | `..`             | the parent (bad path at the root)             |
//! | `../rest`        | `rest` from the parent                        |
//! | `seg[/rest]`     | child named exactly `seg`, then `rest`        |
//!
//! Child lookup populates the directory first. Below `/users` an unknown
//! segment is looked up as a login and cached.

use crate::error::FsError;
use crate::provider::DataProvider;
use crate::tree::path::{is_valid_name, join, split_first_segment};
use crate::tree::populate::populate;
use crate::tree::{DirRole, NewNode, NodeId, Tree, USER_ENTRIES};
use tracing::{debug, info};

/// Resolve `path` starting at `start`.
pub fn resolve(
    tree: &mut Tree,
    provider: &dyn DataProvider,
    start: NodeId,
    path: &str,
) -> Result<NodeId, FsError> {
    if path.is_empty() || path == "." {
        return Ok(start);
    }
    if let Some(rest) = path.strip_prefix('/') {
        let root = tree.root_of(start);
        return resolve(tree, provider, root, rest);
    }
    if let Some(rest) = path.strip_prefix("./") {
        return resolve(tree, provider, start, rest);
    }
    if let Some(after) = path.strip_prefix("..") {
        let parent = tree
            .parent(start)
            .ok_or_else(|| FsError::bad_path(path, "already at the root"))?;
        if after.is_empty() {
            return Ok(parent);
        }
        return match after.strip_prefix('/') {
            Some(rest) => resolve(tree, provider, parent, rest),
            None => Err(FsError::bad_path(path, "expected '/' after '..'")),
        };
    }
    resolve_child(tree, provider, start, path)
}

fn resolve_child(
    tree: &mut Tree,
    provider: &dyn DataProvider,
    start: NodeId,
    path: &str,
) -> Result<NodeId, FsError> {
    let (segment, rest) = split_first_segment(path);
    let attempted = join(&tree.path(start), segment);

    let role = match tree.node(start).dir_role() {
        Some(role) => role.clone(),
        None => return Err(FsError::bad_path(attempted, "not a directory")),
    };
    if matches!(role, DirRole::User { .. }) && !USER_ENTRIES.contains(&segment) {
        return Err(FsError::bad_path(
            attempted,
            format!("expected one of: {}", USER_ENTRIES.join(", ")),
        ));
    }

    populate(tree, provider, start)?;

    let child = match tree.find_child(start, segment) {
        Some(child) => child,
        None if role == DirRole::Users => lookup_user(tree, provider, start, segment, attempted)?,
        None => return Err(FsError::not_found(attempted)),
    };

    match rest {
        None => Ok(child),
        Some(rest) if rest.starts_with('/') => Err(FsError::bad_path(
            join(&tree.path(child), ""),
            "empty path segment",
        )),
        Some(rest) => resolve(tree, provider, child, rest),
    }
}

/// Ask the provider for `login` directly and cache the account under `users`.
fn lookup_user(
    tree: &mut Tree,
    provider: &dyn DataProvider,
    users: NodeId,
    login: &str,
    attempted: String,
) -> Result<NodeId, FsError> {
    if !is_valid_name(login) {
        return Err(FsError::not_found(attempted));
    }
    debug!(login, "User not listed, looking up directly");
    let user = provider
        .get_user(login)
        .map_err(|e| FsError::from_provider(attempted.clone(), e))?;

    if !is_valid_name(&user.login) {
        return Err(FsError::not_found(attempted));
    }
    // The canonical login may differ in case from what was typed.
    if let Some(existing) = tree.find_child(users, &user.login) {
        return Ok(existing);
    }
    let id = tree.insert(users, NewNode::User { login: user.login })?;
    info!(path = %tree.path(id), "Cached user");
    Ok(id)
}
