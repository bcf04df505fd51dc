//! Lazy population of provider-backed directories

use crate::error::FsError;
use crate::provider::{DataProvider, TrendingPeriod};
use crate::tree::path::trending_entry_name;
use crate::tree::{DirRole, Entry, FileRole, NewNode, NodeId, Tree};
use tracing::{debug, info, instrument, warn};

/// Maximum number of trending repositories listed under `/trending`.
pub const TRENDING_LIMIT: usize = 25;

/// Fill the children of directory `id` from the provider, once.
///
/// Already-populated directories and files return immediately. On provider
/// failure nothing is appended and the directory stays unpopulated, so a later
/// call retries.
#[instrument(skip(tree, provider), fields(path = %tree.path(id)))]
pub fn populate(tree: &mut Tree, provider: &dyn DataProvider, id: NodeId) -> Result<(), FsError> {
    let role = match tree.node(id).entry() {
        Entry::Directory {
            populated: true, ..
        }
        | Entry::File { .. } => return Ok(()),
        Entry::Directory { role, .. } => role.clone(),
    };

    let batch = fetch_batch(tree, provider, id, &role)?;
    let fetched = batch.len();
    let added = tree.complete_population(id, batch)?;
    info!(fetched, added, "Populated directory");
    Ok(())
}

fn fetch_batch(
    tree: &Tree,
    provider: &dyn DataProvider,
    id: NodeId,
    role: &DirRole,
) -> Result<Vec<NewNode>, FsError> {
    let wrap = |e| FsError::from_provider(tree.path(id), e);

    let batch = match role {
        DirRole::Trending => provider
            .list_trending_projects(TrendingPeriod::Daily)
            .map_err(wrap)?
            .into_iter()
            .take(TRENDING_LIMIT)
            .filter_map(|project| match project.owner_and_repo() {
                Some((owner, repo)) => Some(NewNode::File {
                    name: trending_entry_name(owner, repo),
                    role: FileRole::Repo {
                        owner: owner.to_string(),
                        repo: repo.to_string(),
                    },
                }),
                None => {
                    warn!(identifier = %project.identifier, "Skipping malformed trending entry");
                    None
                }
            })
            .collect(),
        DirRole::Users => provider
            .list_all_users()
            .map_err(wrap)?
            .into_iter()
            .map(|user| NewNode::User { login: user.login })
            .collect(),
        DirRole::UserRepos { login } => provider
            .list_user_repos(login)
            .map_err(wrap)?
            .into_iter()
            .map(|repo| NewNode::File {
                role: FileRole::Repo {
                    owner: login.clone(),
                    repo: repo.name.clone(),
                },
                name: repo.name,
            })
            .collect(),
        DirRole::Root | DirRole::User { .. } | DirRole::Generic => {
            debug!("Directory has no provider-backed entries");
            Vec::new()
        }
    };
    Ok(batch)
}

/// Children of `id`, populating it first if needed. Files have none.
pub fn list_children(
    tree: &mut Tree,
    provider: &dyn DataProvider,
    id: NodeId,
) -> Result<Vec<NodeId>, FsError> {
    populate(tree, provider, id)?;
    Ok(tree.children(id).to_vec())
}
