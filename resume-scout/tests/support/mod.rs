//! In-memory code host for pipeline tests.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use resume_scout::{CodeHost, FileContent, HostError, RemoteRepository, RepoPage, Tree, TreeEntry};
use std::collections::{HashMap, HashSet};

const PAGE_SIZE: usize = 100;

/// Serves repositories, trees and files from memory.
#[derive(Default)]
pub struct FakeHost {
    repositories: HashMap<String, Vec<RemoteRepository>>,
    trees: HashMap<String, Vec<TreeEntry>>,
    files: HashMap<(String, String), String>,
    failing_pages: HashSet<(String, usize)>,
    failing_refs: HashSet<String>,
    failing_trees: HashSet<String>,
    failing_files: HashSet<(String, String)>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a repository pushed at `pushed_at` with the given files.
    pub fn repo(
        mut self,
        owner: &str,
        name: &str,
        pushed_at: &str,
        files: &[(&str, &str)],
    ) -> Self {
        let full_name = format!("{owner}/{name}");
        self.repositories
            .entry(owner.to_string())
            .or_default()
            .push(RemoteRepository {
                name: name.to_string(),
                full_name: full_name.clone(),
                default_branch: Some("main".to_string()),
                pushed_at: Some(pushed_at.to_string()),
            });
        let mut entries = Vec::new();
        for (path, content) in files {
            entries.push(TreeEntry::blob(*path));
            self.files
                .insert((full_name.clone(), path.to_string()), content.to_string());
        }
        self.trees.insert(full_name, entries);
        self
    }

    /// Makes the listing page at `index` fail for `owner`.
    pub fn fail_page(mut self, owner: &str, index: usize) -> Self {
        self.failing_pages.insert((owner.to_string(), index));
        self
    }

    /// Makes branch resolution fail for a repository.
    pub fn fail_ref(mut self, full_name: &str) -> Self {
        self.failing_refs.insert(full_name.to_string());
        self
    }

    /// Makes the tree listing fail for a repository whose branch still
    /// resolves.
    pub fn fail_tree(mut self, full_name: &str) -> Self {
        self.failing_trees.insert(full_name.to_string());
        self
    }

    /// Makes fetching one file fail.
    pub fn fail_file(mut self, full_name: &str, path: &str) -> Self {
        self.failing_files
            .insert((full_name.to_string(), path.to_string()));
        self
    }

    fn not_found(route: String) -> HostError {
        HostError::Status { route, status: 404 }
    }
}

#[async_trait]
impl CodeHost for FakeHost {
    async fn repositories_page(
        &self,
        user: &str,
        cursor: Option<&str>,
    ) -> Result<RepoPage, HostError> {
        let index = match cursor {
            Some(cursor) => cursor
                .rsplit('=')
                .next()
                .and_then(|page| page.parse::<usize>().ok())
                .ok_or_else(|| Self::not_found(cursor.to_string()))?,
            None => 0,
        };
        let route = format!("users/{user}/repos?page={index}");
        if self.failing_pages.contains(&(user.to_string(), index)) {
            return Err(HostError::Status { route, status: 403 });
        }
        let repos = self
            .repositories
            .get(user)
            .ok_or_else(|| Self::not_found(route))?;

        let items: Vec<_> = repos
            .iter()
            .skip(index * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        let next = ((index + 1) * PAGE_SIZE < repos.len())
            .then(|| format!("users/{user}/repos?page={}", index + 1));
        Ok(RepoPage { items, next })
    }

    async fn resolve_branch(&self, full_name: &str, branch: &str) -> Result<String, HostError> {
        if self.failing_refs.contains(full_name) || !self.trees.contains_key(full_name) {
            return Err(Self::not_found(format!("{full_name}/git/ref/heads/{branch}")));
        }
        Ok(format!("{full_name}@{branch}"))
    }

    async fn tree(&self, full_name: &str, sha: &str) -> Result<Tree, HostError> {
        if self.failing_trees.contains(full_name) {
            return Err(HostError::Status {
                route: format!("{full_name}/git/trees/{sha}"),
                status: 409,
            });
        }
        let entries = self
            .trees
            .get(full_name)
            .ok_or_else(|| Self::not_found(format!("{full_name}/git/trees/{sha}")))?;
        Ok(Tree {
            tree: entries.clone(),
            truncated: false,
        })
    }

    async fn file_content(
        &self,
        full_name: &str,
        path: &str,
        _git_ref: &str,
    ) -> Result<FileContent, HostError> {
        let key = (full_name.to_string(), path.to_string());
        let route = format!("{full_name}/contents/{path}");
        if self.failing_files.contains(&key) {
            return Err(HostError::Status { route, status: 500 });
        }
        let content = self.files.get(&key).ok_or_else(|| Self::not_found(route))?;
        Ok(FileContent {
            content: STANDARD.encode(content),
            encoding: "base64".to_string(),
        })
    }
}
