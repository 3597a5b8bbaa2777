use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Throwaway directory the `hd` binary runs in.
pub struct HdWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl HdWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp workspace");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(".helpdesk").join("tickets.json")
    }

    /// A command isolated from the caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hd").expect("hd binary built");
        cmd.current_dir(&self.root)
            .env_remove("HELPDESK_DATA")
            .env_remove("HELPDESK_PREVIEW_WIDTH")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.root.join("xdg"));
        cmd
    }
}

pub struct HdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_hd<I, S>(workspace: &HdWorkspace, args: I, label: &str) -> HdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = workspace
        .command()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run hd: {e}"));
    HdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Create a ticket through the CLI and return its ID.
pub fn create_ticket(workspace: &HdWorkspace, name: &str, priority: &str) -> String {
    let email = format!("{}@company.com", name.to_lowercase());
    let output = run_hd(
        workspace,
        [
            "create",
            "--name",
            name,
            "--email",
            email.as_str(),
            "--department",
            "Engineering",
            "--issue-type",
            "Hardware",
            "--priority",
            priority,
            "--description",
            "Monitor flickers after docking",
            "--json",
        ],
        "create",
    );
    assert!(output.status.success(), "create failed: {}", output.stderr);
    let value: serde_json::Value = serde_json::from_str(&output.stdout).expect("create json");
    value["id"].as_str().expect("id field").to_string()
}
