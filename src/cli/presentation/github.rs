//! GitHub data presentation: trending, user and repository tables.

use crate::cli::presentation::shared::{
    count_or_dash, format_date, format_section_heading, new_table, or_dash,
};
use crate::provider::{DeveloperSummary, ProjectSummary, RepoContents, RepoSummary, UserSummary};

pub fn format_trending_table(projects: &[ProjectSummary]) -> String {
    if projects.is_empty() {
        return "No trending repositories.".to_string();
    }
    let mut table = new_table(vec!["#", "Repository", "Language", "Stars"]);
    for (i, project) in projects.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            project.identifier.clone(),
            or_dash(project.language.as_deref()),
            project.stars.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_trending_developers(developers: &[DeveloperSummary]) -> String {
    if developers.is_empty() {
        return "No trending developers.".to_string();
    }
    let mut table = new_table(vec!["#", "Developer", "Login"]);
    for (i, developer) in developers.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            developer.display().to_string(),
            developer.login.clone(),
        ]);
    }
    table.to_string()
}

/// File text as-is; directory entries one path per line.
pub fn format_repo_contents(contents: &RepoContents) -> String {
    match contents {
        RepoContents::File(text) => text.clone(),
        RepoContents::Directory(paths) => paths.join("\n"),
    }
}

pub fn format_user_summary(user: &UserSummary, color: bool) -> String {
    let mut table = new_table(vec!["Field", "Value"]);
    let rows = [
        ("Name", or_dash(user.name.as_deref())),
        ("Bio", or_dash(user.bio.as_deref())),
        ("Company", or_dash(user.company.as_deref())),
        ("Location", or_dash(user.location.as_deref())),
        ("Email", or_dash(user.email.as_deref())),
        ("Public Repos", count_or_dash(user.public_repos)),
        ("Followers", count_or_dash(user.followers)),
        ("Following", count_or_dash(user.following)),
    ];
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    format!("{}\n\n{}", format_section_heading(&user.login, color), table)
}

pub fn format_repo_summary(repo: &RepoSummary, color: bool) -> String {
    let title = repo.full_name.as_deref().unwrap_or(&repo.name);
    let mut table = new_table(vec!["Field", "Value"]);
    let rows = [
        ("Description", or_dash(repo.description.as_deref())),
        ("Language", or_dash(repo.language.as_deref())),
        ("Created at", format_date(repo.created_at.as_deref())),
        ("Homepage", or_dash(repo.homepage.as_deref())),
        ("Pushed at", format_date(repo.pushed_at.as_deref())),
        ("Forks", count_or_dash(repo.forks)),
        ("Open Issues", count_or_dash(repo.open_issues)),
        ("Stargazers", count_or_dash(repo.stars)),
        ("Watchers", count_or_dash(repo.watchers)),
    ];
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    format!("{}\n\n{}", format_section_heading(title, color), table)
}

pub fn format_user_search(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut table = new_table(vec!["#", "Login"]);
    for (i, user) in users.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), user.login.clone()]);
    }
    table.to_string()
}

pub fn format_repo_search(repos: &[RepoSummary]) -> String {
    if repos.is_empty() {
        return "No repositories found.".to_string();
    }
    let mut table = new_table(vec!["Repository", "Description"]);
    for repo in repos {
        table.add_row(vec![
            repo.full_name.clone().unwrap_or_else(|| repo.name.clone()),
            or_dash(repo.description.as_deref()),
        ]);
    }
    table.to_string()
}
