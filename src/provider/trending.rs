//! Trending page parsing
//!
//! GitHub has no API for trending repositories or developers, so the provider
//! scrapes `github.com/trending` and `github.com/trending/developers`. Every
//! entry is rendered as one `<article class="Box-row">` block; the heading link
//! carries `/owner/repo` or `/login`.

use crate::provider::{DeveloperSummary, ProjectSummary};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn repo_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<h2[^>]*>\s*<a[^>]*?href="/([^/"\s]+)/([^/"\s]+)""#)
            .expect("static regex")
    })
}

fn language_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"itemprop="programmingLanguage"[^>]*>\s*([^<]+?)\s*<"#).expect("static regex")
    })
}

fn stars_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)href="/[^"/]+/[^"/]+/stargazers"[^>]*>.*?</svg>\s*([0-9][0-9,]*)"#)
            .expect("static regex")
    })
}

fn developer_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<h1[^>]*>\s*<a[^>]*?href="/([^/"\s]+)"[^>]*>\s*([^<]*?)\s*</a>"#)
            .expect("static regex")
    })
}

/// Extract trending repositories from the page HTML, in page order.
///
/// Blocks without a recognisable repository link are skipped.
pub fn parse_trending_page(html: &str) -> Vec<ProjectSummary> {
    let mut projects = Vec::new();
    for block in html.split("<article").skip(1) {
        let Some(link) = repo_link_re().captures(block) else {
            debug!("Skipping trending block without repository link");
            continue;
        };
        let identifier = format!("{}/{}", &link[1], &link[2]);
        let language = language_re()
            .captures(block)
            .map(|c| c[1].to_string())
            .filter(|l| !l.is_empty());
        let stars = stars_re()
            .captures(block)
            .and_then(|c| c[1].replace(',', "").parse::<u64>().ok())
            .unwrap_or(0);
        projects.push(ProjectSummary {
            identifier,
            language,
            stars,
        });
    }
    projects
}

/// Extract trending developers from the page HTML, in page order.
pub fn parse_trending_developers(html: &str) -> Vec<DeveloperSummary> {
    html.split("<article")
        .skip(1)
        .filter_map(|block| {
            let link = developer_link_re().captures(block)?;
            let name = link[2].trim();
            Some(DeveloperSummary {
                login: link[1].to_string(),
                display_name: (!name.is_empty()).then(|| name.to_string()),
            })
        })
        .collect()
}
