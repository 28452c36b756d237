//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use docs_survey::config::{Config, CrawlerConfig, InputConfig, OutputConfig, UserAgentConfig};
use docs_survey::crawler::crawl;
use docs_survey::output::write_report;
use docs_survey::CrawlError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration; the allowed domain defaults to the seed host
fn create_test_config() -> Config {
    Config {
        crawler: CrawlerConfig {
            allowed_domain: None,
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
        },
        input: InputConfig {
            seeds_path: "seeds.txt".to_string(),
        },
        output: OutputConfig {
            csv_path: "-".to_string(),
        },
    }
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Home links to two docs pages, one external site and one region list
async fn mount_docs_site(server: &MockServer) {
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    r#"<html><head><title>Home</title></head><body>
                    <nav>
                      <a href="/page1">Page 1</a>
                      <a href="{}/page2#intro">Page 2</a>
                      <a href="https://other.example.org/page3">Elsewhere</a>
                      <a href="/regions">Supported countries</a>
                    </nav>
                    <p><a href="/body-link">Not navigation</a></p>
                    </body></html>"#,
                    base_url
                ))
                .insert_header("content-type", "text/html"),
        )
        // Linked back from page2 with a trailing slash, still fetched once
        .expect(1)
        .mount(server)
        .await;

    mount_page(
        server,
        "/page1",
        r#"<html><body><main><h1>Page One</h1>
        <time datetime="2024-01-02T00:00:00Z">2 Jan 2024</time>
        </main></body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        server,
        "/page2",
        format!(
            r#"<html><body><aside><a href="{}/">Home</a></aside>
            <main><h1>Page Two</h1><p>Last updated: March 5, 2023</p></main>
            </body></html>"#,
            base_url
        ),
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    mount_docs_site(&mock_server).await;

    let config = create_test_config();
    let seeds = vec![format!("{}/", mock_server.uri())];

    let results = crawl(&config, &seeds).await.expect("Crawl failed");

    assert_eq!(results.seed_results().len(), 1);
    let home = &results.seed_results()[0];
    assert_eq!(home.title, "Home");
    assert_eq!(home.url.as_str(), format!("{}/", mock_server.uri()));
    assert_eq!(home.last_updated, "UNKNOWN");

    let discovered: Vec<_> = results
        .discovered_results()
        .iter()
        .map(|r| (r.title.as_str(), r.last_updated.as_str()))
        .collect();
    assert_eq!(
        discovered,
        vec![
            ("Page One", "January 2, 2024"),
            ("Page Two", "March 5, 2023")
        ]
    );

    // Fragment stripped, excluded links never fetched
    assert_eq!(
        results.discovered_results()[1].url.as_str(),
        format!("{}/page2", mock_server.uri())
    );
    let requested: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert!(!requested.contains(&"/regions".to_string()));
    assert!(!requested.contains(&"/body-link".to_string()));
}

#[tokio::test]
async fn test_failed_fetches_are_skipped() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><nav>
        <a href="/missing">Missing</a>
        <a href="/broken">Broken</a>
        <a href="/ok">Ok</a>
        </nav><h1>Index</h1></body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/ok",
        "<html><body><h1>Fine</h1></body></html>".to_string(),
    )
    .await;

    let config = create_test_config();
    let seeds = vec![format!("{}/", mock_server.uri())];

    let results = crawl(&config, &seeds).await.expect("Crawl failed");

    let titles: Vec<_> = results.records().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Index", "Fine"]);
}

#[tokio::test]
async fn test_user_agent_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Hello</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config();
    let seeds = vec![format!("{}/", mock_server.uri())];

    let results = crawl(&config, &seeds).await.expect("Crawl failed");
    assert_eq!(results.len(), 1);
    assert_eq!(results.seed_results()[0].title, "Hello");
}

#[tokio::test]
async fn test_allowed_domain_from_config() {
    let mock_server = MockServer::start().await;
    mount_docs_site(&mock_server).await;

    // Seeds live on 127.0.0.1, so every discovered link is out of domain
    let mut config = create_test_config();
    config.crawler.allowed_domain = Some("docs.example.com".to_string());
    let seeds = vec![format!("{}/", mock_server.uri())];

    let results = crawl(&config, &seeds).await.expect("Crawl failed");

    assert_eq!(results.seed_results().len(), 1);
    assert!(results.discovered_results().is_empty());
}

#[tokio::test]
async fn test_no_valid_seeds() {
    let config = create_test_config();
    let seeds = vec!["not a url".to_string(), "ftp://example.com/".to_string()];

    let result = crawl(&config, &seeds).await;
    assert!(matches!(result, Err(CrawlError::MissingSeeds(_))));
}

#[tokio::test]
async fn test_csv_report_written() {
    let mock_server = MockServer::start().await;
    mount_docs_site(&mock_server).await;

    let config = create_test_config();
    let seeds = vec![format!("{}/", mock_server.uri())];
    let results = crawl(&config, &seeds).await.expect("Crawl failed");

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.csv");
    let output = OutputConfig {
        csv_path: report_path.to_str().unwrap().to_string(),
    };
    write_report(&results, &output).unwrap();

    let report = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = report.split("\r\n").collect();

    assert_eq!(lines[0], "Title,URL,LastUpdated");
    assert_eq!(
        lines[1],
        format!("\"Home\",\"{}/\",\"UNKNOWN\"", mock_server.uri())
    );
    assert_eq!(
        lines[2],
        format!(
            "\"Page One\",\"{}/page1\",\"January 2, 2024\"",
            mock_server.uri()
        )
    );
    // Trailing CRLF after the last row
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "");
}
