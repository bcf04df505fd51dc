//! Shared test utilities for integration tests
//!
//! A scripted data provider that counts calls, a one-shot HTTP responder and an
//! environment guard that serializes tests touching process-wide variables.

use gish::error::ProviderError;
use gish::provider::{DataProvider, ProjectSummary, RepoSummary, TrendingPeriod, UserSummary};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::{Mutex, MutexGuard};
use std::thread;

/// Calls seen by a [`ScriptedProvider`], shareable after the provider is boxed.
#[derive(Default, Clone)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn count(&self, prefix: &str) -> usize {
        self.0.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn total(&self) -> usize {
        self.0.borrow().len()
    }

    fn push(&self, call: String) {
        self.0.borrow_mut().push(call);
    }
}

/// In-memory GitHub with scripted failures
#[derive(Default)]
pub struct ScriptedProvider {
    pub trending: Vec<ProjectSummary>,
    pub users: Vec<UserSummary>,
    /// Reachable only through `get_user`
    pub hidden_users: Vec<UserSummary>,
    pub repos: HashMap<String, Vec<RepoSummary>>,
    pub readmes: HashMap<String, String>,
    /// Number of upcoming calls that fail
    pub failures: Cell<usize>,
    pub log: CallLog,
}

impl ScriptedProvider {
    /// A small GitHub: three listed users, one hidden user, trending projects.
    pub fn sample() -> Self {
        let mut provider = Self {
            users: ["mojombo", "defunkt", "pjhyett"]
                .iter()
                .map(|l| UserSummary::new(*l))
                .collect(),
            hidden_users: vec![UserSummary {
                name: Some("Linus Torvalds".to_string()),
                followers: Some(200_000),
                ..UserSummary::new("torvalds")
            }],
            trending: vec![
                project("rust-lang/rust", Some("Rust"), 98765),
                project("torvalds/linux", Some("C"), 170000),
                project("bad-entry", None, 1),
            ],
            ..Self::default()
        };
        provider.repos.insert(
            "torvalds".to_string(),
            vec![RepoSummary::new("linux"), RepoSummary::new("subsurface")],
        );
        provider.repos.insert(
            "mojombo".to_string(),
            vec![RepoSummary::new("grit"), RepoSummary::new("jekyll")],
        );
        provider
            .readmes
            .insert("torvalds/linux".to_string(), "Linux kernel".to_string());
        provider
            .readmes
            .insert("rust-lang/rust".to_string(), "# The Rust Programming Language".to_string());
        provider
    }

    fn record(&self, call: String) -> Result<(), ProviderError> {
        self.log.push(call);
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            return Err(ProviderError::RequestFailed("scripted outage".to_string()));
        }
        Ok(())
    }
}

pub fn project(identifier: &str, language: Option<&str>, stars: u64) -> ProjectSummary {
    ProjectSummary {
        identifier: identifier.to_string(),
        language: language.map(str::to_string),
        stars,
    }
}

impl DataProvider for ScriptedProvider {
    fn list_trending_projects(
        &self,
        period: TrendingPeriod,
    ) -> Result<Vec<ProjectSummary>, ProviderError> {
        self.record(format!("trending:{}", period))?;
        Ok(self.trending.clone())
    }

    fn list_all_users(&self) -> Result<Vec<UserSummary>, ProviderError> {
        self.record("users".to_string())?;
        Ok(self.users.clone())
    }

    fn get_user(&self, login: &str) -> Result<UserSummary, ProviderError> {
        self.record(format!("user:{}", login))?;
        self.users
            .iter()
            .chain(&self.hidden_users)
            .find(|u| u.login.eq_ignore_ascii_case(login))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(login.to_string()))
    }

    fn list_user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ProviderError> {
        self.record(format!("repos:{}", login))?;
        Ok(self.repos.get(login).cloned().unwrap_or_default())
    }

    fn get_readme(&self, owner: &str, repo: &str) -> Result<String, ProviderError> {
        let key = format!("{}/{}", owner, repo);
        self.record(format!("readme:{}", key))?;
        self.readmes
            .get(&key)
            .cloned()
            .ok_or(ProviderError::NotFound(key))
    }
}

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Sets variables for the lifetime of the guard and restores them on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn set(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut saved = Vec::new();
        for (key, value) in vars {
            saved.push((key.to_string(), std::env::var(key).ok()));
            std::env::set_var(key, value);
        }
        Self { saved, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Serve exactly one HTTP response on a local port.
///
/// Returns the base URL and a receiver yielding the raw request head.
pub fn serve_once(
    status: u16,
    content_type: &str,
    body: &str,
) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    let response = format!(
        "HTTP/1.1 {} Scripted\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        let _ = tx.send(head);
    });

    (format!("http://{}", addr), rx)
}
