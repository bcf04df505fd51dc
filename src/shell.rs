//! Interactive Shell
//!
//! A [`Session`] owns the tree, the data provider and the current directory.
//! Each input line is one verb plus optional arguments; errors are reported and
//! the loop carries on.

use crate::browser;
use crate::cli::{
    canonical_verb, format_entry_name, format_listing, format_user_summary, map_error, repl_help,
};
use crate::config::ShellConfig;
use crate::error::{FsError, GishError};
use crate::provider::DataProvider;
use crate::tree::{list_children, resolve, FileRole, NodeId, Tree};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text (if any) and read the next line
    Continue(String),
    Exit,
}

/// Tree, provider and current directory for one user session
pub struct Session {
    tree: Tree,
    provider: Box<dyn DataProvider>,
    cwd: NodeId,
    settings: ShellConfig,
}

impl Session {
    pub fn new(tree: Tree, provider: Box<dyn DataProvider>, settings: ShellConfig) -> Self {
        let cwd = tree.root();
        Self {
            tree,
            provider,
            cwd,
            settings,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    pub fn provider(&self) -> &dyn DataProvider {
        self.provider.as_ref()
    }

    pub fn settings(&self) -> &ShellConfig {
        &self.settings
    }

    /// `<prompt><cwd>> `
    pub fn prompt(&self) -> String {
        format!("{}{}> ", self.settings.prompt, self.tree.path(self.cwd))
    }

    /// Resolve `path` from the current directory.
    pub fn resolve(&mut self, path: &str) -> Result<NodeId, FsError> {
        resolve(&mut self.tree, self.provider.as_ref(), self.cwd, path)
    }

    fn target(&mut self, path: Option<&str>) -> Result<NodeId, FsError> {
        self.resolve(path.unwrap_or(""))
    }

    /// Names below `path`, or the file's own name.
    pub fn ls(&mut self, path: Option<&str>) -> Result<String, GishError> {
        let id = self.target(path)?;
        let color = self.settings.color;
        if self.tree.is_file(id) {
            return Ok(format_entry_name(&self.tree, id, color));
        }
        let children = list_children(&mut self.tree, self.provider.as_ref(), id)?;
        Ok(format_listing(&self.tree, &children, color))
    }

    /// Change directory; no path leaves it unchanged.
    pub fn cd(&mut self, path: Option<&str>) -> Result<(), GishError> {
        let Some(path) = path else {
            return Ok(());
        };
        let id = self.resolve(path)?;
        if self.tree.is_file(id) {
            return Err(GishError::Usage(format!(
                "cd: {}: Not a directory",
                self.tree.path(id)
            )));
        }
        debug!(from = %self.tree.path(self.cwd), to = %self.tree.path(id), "cd");
        self.cwd = id;
        Ok(())
    }

    pub fn pwd(&self) -> String {
        self.tree.path(self.cwd)
    }

    /// README of a repository, or the profile behind a user's `info`.
    pub fn cat(&mut self, path: &str) -> Result<String, GishError> {
        let id = self.resolve(path)?;
        let node_path = self.tree.path(id);
        let role = match self.tree.node(id).file_role() {
            Some(role) => role.clone(),
            None => {
                return Err(GishError::Usage(format!(
                    "cat: {}: Is a directory",
                    node_path
                )))
            }
        };
        match role {
            FileRole::Repo { owner, repo } => self
                .provider
                .get_readme(&owner, &repo)
                .map_err(|e| FsError::from_provider(node_path, e).into()),
            FileRole::UserInfo { login } => {
                let user = self
                    .provider
                    .get_user(&login)
                    .map_err(|e| FsError::from_provider(node_path, e))?;
                Ok(format_user_summary(&user, self.settings.color))
            }
        }
    }

    /// The GitHub page for `path`.
    pub fn url(&mut self, path: Option<&str>) -> Result<String, GishError> {
        let id = self.target(path)?;
        Ok(self.tree.web_url(id))
    }

    pub fn open(&mut self, path: Option<&str>) -> Result<(), GishError> {
        let url = self.url(path)?;
        info!(url = %url, "Opening page");
        browser::open_url(&url, self.settings.browser.as_deref())
    }

    /// Handle one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, GishError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Flow::Continue(String::new()));
        };
        let args: Vec<&str> = words.collect();
        let first = args.first().copied();

        let output = match canonical_verb(verb) {
            "ls" => self.ls(first)?,
            "cd" => {
                self.cd(first)?;
                String::new()
            }
            "pwd" => self.pwd(),
            "cat" => {
                let path = first.ok_or_else(|| GishError::Usage(format!("{}: missing path", verb)))?;
                self.cat(path)?
            }
            "open" => {
                self.open(first)?;
                String::new()
            }
            "url" => self.url(first)?,
            "help" => repl_help(first)?,
            "exit" => return Ok(Flow::Exit),
            _ => {
                return Err(GishError::Usage(format!(
                    "{}: command not found (try 'help')",
                    verb
                )))
            }
        };
        Ok(Flow::Continue(output))
    }
}

/// Read-eval-print loop until `exit`, `quit` or end of input.
///
/// Results go to `out`, error messages to `err`. Input bytes that are not
/// valid UTF-8 are replaced rather than ending the session.
pub fn run_repl<R, W, E>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<(), GishError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", session.prompt())?;
        out.flush()?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                writeln!(out)?;
                break;
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
        let line = String::from_utf8_lossy(&buf);
        match session.execute_line(line.trim_end_matches(&['\n', '\r'][..])) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue(text)) => {
                if !text.is_empty() {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => {
                debug!(error = %e, "Command failed");
                writeln!(err, "{}", map_error(&e))?;
            }
        }
    }
    Ok(())
}
