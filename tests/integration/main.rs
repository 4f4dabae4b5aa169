//! Integration tests for mcp-docs
//!
//! Everything here runs without network access: each command either needs
//! no fetch at all or fails before the first one.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated from any user config
    fn mcp_docs(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("mcp-docs");
        cmd.env_remove("RUST_LOG")
            .env("MCP_DOCS_CONFIG", temp.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Model Context Protocol"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("mcp-docs"));
    }

    #[test]
    fn versions_lists_default() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .arg("versions")
            .assert()
            .success()
            .stdout(predicate::str::contains("2024-11-05"))
            .stdout(predicate::str::contains("2025-03-26 (default)"))
            .stdout(predicate::str::contains("draft"));
    }

    #[test]
    fn versions_json() {
        let temp = TempDir::new().unwrap();
        let output = mcp_docs(&temp)
            .args(["versions", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["default"], "2025-03-26");
        assert_eq!(json["supported"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn sections_lists_registry() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .arg("sections")
            .assert()
            .success()
            .stdout(predicate::str::contains("base-protocol"))
            .stdout(predicate::str::contains("server-utilities"))
            .stdout(predicate::str::contains("locator(s) in catalog"));
    }

    #[test]
    fn sections_from_configured_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = temp.path().join("urls.txt");
        std::fs::write(&catalog, "https://a.test/x.md\nhttps://a.test/y.md\n").unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            format!("[catalog]\npath = {:?}\n", catalog.display().to_string()),
        )
        .unwrap();

        mcp_docs(&temp)
            .arg("sections")
            .assert()
            .success()
            .stdout(predicate::str::contains("Total: 2 locator(s)"));
    }

    #[test]
    fn schema_rejects_unsupported_version() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .args(["schema", "2023-01-01"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported protocol version"))
            .stderr(predicate::str::contains("2024-11-05, 2025-03-26, draft"));
    }

    #[test]
    fn read_rejects_unknown_uri() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .args(["read", "https://example.com/doc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown resource"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn section_rejects_unknown_name() {
        let temp = TempDir::new().unwrap();
        mcp_docs(&temp)
            .args(["section", "nonsense", "-p", "draft"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown section 'nonsense'"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[cache\n").unwrap();

        mcp_docs(&temp)
            .arg("versions")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}
