use octocrab::{Octocrab, Page};

use crate::error::MetricsError;
use crate::github::pagination::{PageOf, PER_PAGE};
use crate::github::types::ApiRepository;

/// Fetch a single page of repository names for an organization.
///
/// Uses `type=all`, so forks, archived and (if the token can see them)
/// private repositories are included.
pub async fn list_org_repos_page(
    client: &Octocrab,
    org: &str,
    page: u32,
) -> Result<PageOf<String>, MetricsError> {
    tracing::debug!(org, page, "listing organization repositories");

    let route = format!("/orgs/{org}/repos");
    let page_str = page.to_string();
    let per_page_str = PER_PAGE.to_string();
    let params = [
        ("type", "all"),
        ("per_page", per_page_str.as_str()),
        ("page", page_str.as_str()),
    ];

    let result: Page<ApiRepository> = client
        .get(route, Some(&params))
        .await
        .map_err(|e| MetricsError::from_octocrab("list organization repositories", &e))?;

    Ok(PageOf::<ApiRepository>::from_octocrab(result).map(|repo| repo.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::github::create_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_lists_names_with_type_all() {
        let server = MockServer::start().await;
        let next = format!(
            "<{}/orgs/acme/repos?type=all&per_page=100&page=2>; rel=\"next\"",
            server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .and(query_param("type", "all"))
            .and(query_param("per_page", "100"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([
                        { "name": "widgets", "full_name": "acme/widgets" },
                        { "name": "gadgets", "full_name": "acme/gadgets", "fork": true }
                    ]))
                    .insert_header("Link", next.as_str()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&Config::new("t").with_api_base_url(server.uri())).unwrap();
        let page = list_org_repos_page(&client, "acme", 1).await.unwrap();
        assert_eq!(page.items, vec!["widgets".to_string(), "gadgets".to_string()]);
        assert_eq!(page.next_page, Some(2));
    }
}
