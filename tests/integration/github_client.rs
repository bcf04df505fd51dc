//! GitHubClient against a one-shot local HTTP responder.

use super::test_utils::serve_once;
use gish::config::GitHubConfig;
use gish::error::ProviderError;
use gish::provider::github::GitHubClient;
use gish::provider::{DataProvider, RepoContents, TrendingPeriod};
use std::time::Duration;

fn client_for(base: &str) -> GitHubClient {
    let config = GitHubConfig {
        api_url: base.to_string(),
        trending_url: format!("{}/trending", base),
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        ..GitHubConfig::default()
    };
    GitHubClient::new(&config).unwrap()
}

fn request_head(rx: &std::sync::mpsc::Receiver<String>) -> String {
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

#[test]
fn test_get_user_decodes_profile() {
    let (base, rx) = serve_once(
        200,
        "application/json",
        r#"{"login":"octocat","name":"The Octocat","followers":4000,"public_repos":8,"bio":null}"#,
    );
    let client = client_for(&base);

    let user = client.get_user("octocat").unwrap();
    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.followers, Some(4000));
    assert_eq!(user.bio, None);

    let head = request_head(&rx).to_lowercase();
    assert!(head.starts_with("get /users/octocat "));
    assert!(head.contains("user-agent: gish/"));
    assert!(head.contains("accept: application/vnd.github+json"));
}

#[test]
fn test_missing_user_is_not_found() {
    let (base, _rx) = serve_once(404, "application/json", r#"{"message":"Not Found"}"#);
    let err = client_for(&base).get_user("ghost").unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);
}

#[test]
fn test_rate_limit_status() {
    let (base, _rx) = serve_once(403, "application/json", r#"{"message":"API rate limit exceeded"}"#);
    let err = client_for(&base).list_all_users().unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited(_)), "got {:?}", err);
}

#[test]
fn test_bad_json_is_decode_error() {
    let (base, _rx) = serve_once(200, "application/json", "[{\"login\": ");
    let err = client_for(&base).list_all_users().unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)), "got {:?}", err);
}

#[test]
fn test_readme_is_requested_raw() {
    let (base, rx) = serve_once(200, "text/plain", "# Hello World\n");
    let readme = client_for(&base).get_readme("octocat", "Hello-World").unwrap();
    assert_eq!(readme, "# Hello World\n");

    let head = request_head(&rx).to_lowercase();
    assert!(head.starts_with("get /repos/octocat/hello-world/readme "));
    assert!(head.contains("accept: application/vnd.github.raw"));
}

#[test]
fn test_trending_page_is_scraped() {
    let page = r#"
<article class="Box-row">
  <h2 class="h3 lh-condensed">
    <a href="/rust-lang/rust" data-view-component="true" class="Link">rust-lang / rust</a>
  </h2>
  <span itemprop="programmingLanguage">Rust</span>
  <a href="/rust-lang/rust/stargazers" class="Link Link--muted">
    <svg></svg>
    98,765
  </a>
</article>
"#;
    let (base, rx) = serve_once(200, "text/html", page);
    let projects = client_for(&base)
        .list_trending_projects(TrendingPeriod::Weekly)
        .unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].identifier, "rust-lang/rust");
    assert_eq!(projects[0].language.as_deref(), Some("Rust"));
    assert_eq!(projects[0].stars, 98765);
    assert!(request_head(&rx).starts_with("GET /trending?since=weekly "));
}

#[test]
fn test_search_repos_reads_items() {
    let (base, rx) = serve_once(
        200,
        "application/json",
        r#"{"total_count":1,"items":[{"name":"tetris","full_name":"jdah/tetris","description":"Tetris","stargazers_count":12}]}"#,
    );
    let repos = client_for(&base).search_repos("tetris game").unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].full_name.as_deref(), Some("jdah/tetris"));
    assert_eq!(repos[0].stars, Some(12));
    assert!(request_head(&rx).starts_with("GET /search/repositories?q=tetris+game&per_page=10 "));
}

#[test]
fn test_login_is_encoded_as_one_path_segment() {
    let (base, rx) = serve_once(404, "application/json", r#"{"message":"Not Found"}"#);
    let err = client_for(&base).get_user("foo#bar?x y").unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);
    assert!(request_head(&rx).starts_with("GET /users/foo%23bar%3Fx%20y HTTP/1.1\r\n"));
}

#[test]
fn test_repo_segments_are_encoded() {
    let (base, rx) = serve_once(200, "text/plain", "ok");
    client_for(&base).get_readme("own er", "re#po").unwrap();
    assert!(request_head(&rx).starts_with("GET /repos/own%20er/re%23po/readme "));
}

#[test]
fn test_search_query_is_form_encoded() {
    let (base, rx) = serve_once(200, "application/json", r#"{"items":[{"login":"gopher"}]}"#);
    let users = client_for(&base).search_users("language:go&x").unwrap();
    assert_eq!(users[0].login, "gopher");
    assert!(request_head(&rx).starts_with("GET /search/users?q=language%3Ago%26x&per_page=10 "));
}

#[test]
fn test_trending_developers_page_is_scraped() {
    let page = r#"
<article class="Box-row d-flex" id="pa-torvalds">
  <h1 class="h3 lh-condensed">
    <a href="/torvalds" class="Link">
      Linus Torvalds
    </a>
  </h1>
</article>
"#;
    let (base, rx) = serve_once(200, "text/html", page);
    let developers = client_for(&base)
        .list_trending_developers(TrendingPeriod::Daily)
        .unwrap();

    assert_eq!(developers.len(), 1);
    assert_eq!(developers[0].login, "torvalds");
    assert_eq!(developers[0].display(), "Linus Torvalds");
    assert!(request_head(&rx).starts_with("GET /trending/developers?since=daily "));
}

#[test]
fn test_contents_of_file_are_decoded() {
    let (base, rx) = serve_once(
        200,
        "application/json",
        r#"{"type":"file","path":"src/main.rs","encoding":"base64","content":"Zm4g\nbWFpbigpIHt9\n"}"#,
    );
    let contents = client_for(&base)
        .get_contents("octocat", "hello", "src/main.rs")
        .unwrap();
    assert_eq!(contents, RepoContents::File("fn main() {}".to_string()));
    assert!(request_head(&rx).starts_with("GET /repos/octocat/hello/contents/src/main.rs "));
}

#[test]
fn test_contents_of_directory_list_paths() {
    let (base, _rx) = serve_once(
        200,
        "application/json",
        r#"[{"type":"file","path":"src/lib.rs"},{"type":"dir","path":"src/cli"}]"#,
    );
    let contents = client_for(&base)
        .get_contents("octocat", "hello", "src")
        .unwrap();
    assert_eq!(
        contents,
        RepoContents::Directory(vec!["src/lib.rs".to_string(), "src/cli".to_string()])
    );
}

#[test]
fn test_connection_refused_is_request_failed() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&base).get_user("octocat").unwrap_err();
    assert!(matches!(err, ProviderError::RequestFailed(_)), "got {:?}", err);
}
