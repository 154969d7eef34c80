//! Content root reader
//!
//! Each document is read on its own tokio task. A document that is missing
//! or malformed falls back to its empty default without affecting the
//! others.

use crate::content::{LoadIssue, LoadProblem, PortfolioContent};
use crate::document::Document;
use crate::error::{ContentError, Result};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Reads portfolio documents from a directory
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Open a content root
    ///
    /// Fails with [`ContentError::RootNotFound`] when `root` is not a
    /// directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ContentError::RootNotFound(root));
        }
        Ok(Self { root })
    }

    /// The content root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of one document
    pub fn path_of(&self, document: Document) -> PathBuf {
        self.root.join(document.file_name())
    }

    /// Read every document concurrently
    ///
    /// Only a vanished root is an error; per-document problems end up in
    /// [`PortfolioContent::issues`].
    pub async fn load(&self) -> Result<PortfolioContent> {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(ContentError::RootNotFound(self.root.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::RootNotFound(self.root.clone()))
            }
            Err(e) => return Err(e.into()),
        }

        let mut tasks = JoinSet::new();
        for document in Document::ALL {
            let path = self.path_of(document);
            tasks.spawn(async move { (document, read_document(document, &path).await) });
        }

        let mut loaded: Vec<(Document, std::result::Result<Value, LoadProblem>)> =
            Vec::with_capacity(Document::ALL.len());
        while let Some(joined) = tasks.join_next().await {
            loaded.push(joined?);
        }
        loaded.sort_by_key(|(document, _)| *document);

        let mut content = PortfolioContent::default();
        for (document, outcome) in loaded {
            match outcome {
                Ok(value) => apply(&mut content, document, value),
                Err(problem) => {
                    warn!("Falling back to default for {}: {}", document, problem);
                    content.issues.push(LoadIssue { document, problem });
                }
            }
        }

        info!(
            "Loaded content from {} ({} issues)",
            self.root.display(),
            content.issues.len()
        );
        Ok(content)
    }
}

async fn read_document(document: Document, path: &Path) -> std::result::Result<Value, LoadProblem> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadProblem::Missing),
        Err(e) => return Err(LoadProblem::Unreadable(e.to_string())),
    };
    let value: Value =
        serde_json::from_str(&text).map_err(|e| LoadProblem::InvalidJson(e.to_string()))?;
    if !document.shape().matches(&value) {
        return Err(LoadProblem::WrongShape(document.shape()));
    }
    debug!("Read {} ({} bytes)", document, text.len());
    Ok(value)
}

fn apply(content: &mut PortfolioContent, document: Document, value: Value) {
    let array = |value: Value| match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    match document {
        Document::Info => content.info = Some(value),
        Document::Projects => content.projects = array(value),
        Document::Experience => content.experience = array(value),
        Document::Competitions => content.competitions = array(value),
        Document::Certificates => content.certificates = array(value),
        Document::Stack => content.stack = array(value),
        Document::Courses => content.courses = array(value),
        Document::Socials => content.socials = array(value),
        Document::Order => {
            content.order = Some(
                array(value)
                    .into_iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            )
        }
    }
}
