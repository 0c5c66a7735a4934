use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for pathfind, isolated from any user config
pub fn pathfind(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pathfind");
    cmd.env("PATHFIND_CONFIG_DIR", config_dir)
        .env_remove("PATHFIND_CONFIG")
        .env_remove("PATHFIND_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Edge list with a unique shortest path 0 -> 1 -> 4 -> 2 -> 3 -> 5 of weight 8
pub const FIXTURE_TOML: &str = r#"
[[edges]]
from = 0
to = 1
weight = 2

[[edges]]
from = 0
to = 3
weight = 9

[[edges]]
from = 1
to = 4
weight = 3

[[edges]]
from = 2
to = 3
weight = 1

[[edges]]
from = 2
to = 4
weight = 1

[[edges]]
from = 3
to = 5
weight = 1

[[edges]]
from = 4
to = 5
weight = 9
"#;

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn fixture(dir: &TempDir) -> PathBuf {
    write_graph(dir, "graph.toml", FIXTURE_TOML)
}
