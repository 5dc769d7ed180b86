//! Shared testing utilities for leadmail CLI tests.

use assert_cmd::Command;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const PIPELINE_ENV: [&str; 4] =
    ["LLAMA_MODEL_PATH", "LLAMA_SERVER_URL", "SERPAPI_API_KEY", "SERPAPI_URL"];

/// Testing harness providing an isolated directory, a model artifact, and
/// mock completion and lookup servers.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    model_path: PathBuf,
    pub completion: ServerGuard,
    pub lookup: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let model_path = root.path().join("llama-2-7b-chat.Q4_K_M.gguf");
        fs::write(&model_path, b"GGUF").expect("Failed to write model artifact");

        Self { root, model_path, completion: Server::new(), lookup: Server::new() }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a leads CSV into the work directory.
    pub fn write_leads(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("leads.csv");
        fs::write(&path, content).expect("Failed to write leads file");
        path
    }

    pub fn default_output(&self) -> PathBuf {
        self.work_dir().join("leads_with_emails.csv")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.default_output()).expect("Output CSV should exist")
    }

    /// Build a command for the compiled `leadmail` binary with no pipeline env set.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("leadmail").expect("Failed to locate leadmail binary");
        cmd.current_dir(self.work_dir()).env("RUST_LOG", "warn");
        for key in PIPELINE_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Build a command wired to the model artifact and both mock servers.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.env("LLAMA_MODEL_PATH", &self.model_path)
            .env("LLAMA_SERVER_URL", self.completion.url())
            .env("SERPAPI_API_KEY", "test-key")
            .env("SERPAPI_URL", format!("{}/search.json", self.lookup.url()));
        cmd
    }

    /// Lookup returning no results for every query.
    pub fn mock_empty_lookup(&mut self, hits: usize) -> Mock {
        self.lookup
            .mock("GET", "/search.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"organic_results": []}"#)
            .expect(hits)
            .create()
    }

    /// Completion answering requests whose body matches `pattern`.
    pub fn mock_completion(&mut self, pattern: &str, content: &str, hits: usize) -> Mock {
        self.completion
            .mock("POST", "/completion")
            .match_body(Matcher::Regex(pattern.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "content": content }).to_string())
            .expect(hits)
            .create()
    }
}

/// Body pattern for a first-pass draft request for `name`.
#[allow(dead_code)]
pub fn first_draft_for(name: &str) -> String {
    format!(r"outreach email to {}\..*improvement notes:\\n\\n", name)
}

/// Body pattern for a redraft request for `name` carrying `feedback`.
#[allow(dead_code)]
pub fn redraft_for(name: &str, feedback: &str) -> String {
    format!(r"outreach email to {}\..*improvement notes:\\n{}", name, feedback)
}

/// Body pattern for any critique request.
#[allow(dead_code)]
pub const CRITIQUE: &str = "sales communication coach";
