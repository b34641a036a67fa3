//! [`CodeHost`] implementation backed by the GitHub REST API.

use super::models::{FileContent, GitRef, RemoteRepository, RepoPage, Tree};
use super::{CodeHost, HostError};
use async_trait::async_trait;
use octocrab::{FromResponse, Octocrab, Page};
use tracing::debug;
use url::Url;

/// Results per page for repository listings.
const REPOS_PER_PAGE: &str = "100";

/// Default public API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// GitHub client used by the pipeline.
#[derive(Debug, Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
    base_url: Url,
}

impl GitHubHost {
    /// Builds a client, authenticated when a token is supplied.
    ///
    /// Without a token the client still works against the lower
    /// unauthenticated rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the client cannot be constructed.
    pub fn new(token: Option<&str>, base_url: &Url) -> Result<Self, HostError> {
        let mut builder = Octocrab::builder().base_uri(base_url.as_str())?;
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        Ok(Self {
            octocrab: builder.build()?,
            base_url: base_url.clone(),
        })
    }

    /// Builds an absolute endpoint URL from path segments.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, HostError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| HostError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a GET against an absolute URL.
    ///
    /// Error statuses reported by the API surface as [`HostError::Status`]
    /// so logs name the route that failed.
    async fn get<R: FromResponse>(&self, url: &str) -> Result<R, HostError> {
        self.octocrab
            .get(url, None::<&()>)
            .await
            .map_err(|e| status_error(url, e))
    }

    fn repo_endpoint<'a>(
        &self,
        full_name: &'a str,
        rest: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, HostError> {
        self.endpoint(
            std::iter::once("repos")
                .chain(full_name.split('/'))
                .chain(rest),
        )
    }
}

#[async_trait]
impl CodeHost for GitHubHost {
    async fn repositories_page(
        &self,
        user: &str,
        cursor: Option<&str>,
    ) -> Result<RepoPage, HostError> {
        let url = match cursor {
            Some(next) => next.to_string(),
            None => {
                let mut url = self.endpoint(["users", user, "repos"])?;
                url.query_pairs_mut().append_pair("per_page", REPOS_PER_PAGE);
                url.to_string()
            }
        };
        debug!(url = %url, "Listing repositories");

        let page: Page<RemoteRepository> = self.get(&url).await?;
        Ok(RepoPage {
            items: page.items,
            next: page.next.map(|uri| uri.to_string()),
        })
    }

    async fn resolve_branch(&self, full_name: &str, branch: &str) -> Result<String, HostError> {
        let url = self.repo_endpoint(
            full_name,
            ["git", "ref", "heads"].into_iter().chain(branch.split('/')),
        )?;
        let git_ref: GitRef = self.get(url.as_str()).await?;
        Ok(git_ref.object.sha)
    }

    async fn tree(&self, full_name: &str, sha: &str) -> Result<Tree, HostError> {
        let mut url = self.repo_endpoint(full_name, ["git", "trees", sha])?;
        url.query_pairs_mut().append_pair("recursive", "1");
        self.get(url.as_str()).await
    }

    async fn file_content(
        &self,
        full_name: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<FileContent, HostError> {
        let mut url = self.repo_endpoint(
            full_name,
            std::iter::once("contents").chain(path.split('/')),
        )?;
        url.query_pairs_mut().append_pair("ref", git_ref);
        self.get(url.as_str()).await
    }
}

fn status_error(route: &str, error: octocrab::Error) -> HostError {
    match error {
        octocrab::Error::GitHub { source, .. } => HostError::Status {
            route: route.to_string(),
            status: source.status_code.as_u16(),
        },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn host(base: &str) -> GitHubHost {
        // Workspace feature unification can link several rustls providers
        let _ = rustls::crypto::ring::default_provider().install_default();
        GitHubHost::new(None, &Url::parse(base).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn builds_repo_endpoints() {
        let host = host(DEFAULT_API_BASE_URL);
        let url = host
            .repo_endpoint("alice/site", ["contents", "src", "my file.json"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/alice/site/contents/src/my%20file.json"
        );
    }

    #[tokio::test]
    async fn keeps_enterprise_base_path() {
        let host = host("https://ghe.example.com/api/v3/");
        let url = host.endpoint(["users", "bob", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/bob/repos");
    }

    /// Answers every connection with the same canned response.
    async fn serve(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = vec![0; 8192];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn error_status_names_the_route() {
        let base = serve(
            "404 Not Found",
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
        )
        .await;
        let _ = rustls::crypto::ring::default_provider().install_default();
        let host = GitHubHost::new(None, &base).unwrap();

        match host.resolve_branch("alice/site", "main").await {
            Err(HostError::Status { route, status }) => {
                assert_eq!(status, 404);
                assert!(route.ends_with("/repos/alice/site/git/ref/heads/main"), "{route}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
