//! Engine configuration
//!
//! Input policies and resource limits. Loadable from YAML; every field has a
//! default so partial files are fine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What to do with an edge whose endpoint is not in the node set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Refuse the whole request
    #[default]
    Reject,
    /// Drop the edge and carry on
    Drop,
}

/// What Prim's and Kruskal's do when the graph is disconnected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectedPolicy {
    /// Return the tree of the start node's component, flagged `connected: false`
    #[default]
    Component,
    /// Fail with a `disconnected` error
    Reject,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub edge_policy: EdgePolicy,
    pub disconnected_policy: DisconnectedPolicy,
    /// Maximum number of nodes per request
    pub max_nodes: Option<usize>,
    /// Maximum number of edges per request
    pub max_edges: Option<usize>,
    /// Floyd-Warshall inputs above this size are logged as expensive
    pub floyd_warshall_warn_nodes: usize,
    /// Floyd-Warshall inputs above this size are refused
    pub floyd_warshall_max_nodes: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::Reject,
            disconnected_policy: DisconnectedPolicy::Component,
            max_nodes: Some(100_000),
            max_edges: Some(1_000_000),
            floyd_warshall_warn_nodes: 500,
            floyd_warshall_max_nodes: Some(5_000),
        }
    }
}

impl EngineConfig {
    /// Default policies without any size limit
    pub fn unlimited() -> Self {
        Self {
            max_nodes: None,
            max_edges: None,
            floyd_warshall_max_nodes: None,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        info!("Loading engine config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.edge_policy, EdgePolicy::Reject);
        assert_eq!(config.disconnected_policy, DisconnectedPolicy::Component);
        assert_eq!(config.floyd_warshall_max_nodes, Some(5_000));
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "edge_policy: drop\nmax_nodes: 10\n";
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.edge_policy, EdgePolicy::Drop);
        assert_eq!(config.max_nodes, Some(10));
        assert_eq!(config.disconnected_policy, DisconnectedPolicy::Component);
        assert_eq!(config.max_edges, Some(1_000_000));
    }

    #[test]
    fn test_null_limits_mean_unlimited() {
        let yaml = "max_nodes: null\nfloyd_warshall_max_nodes: null\ndisconnected_policy: reject\n";
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.max_nodes, None);
        assert_eq!(config.floyd_warshall_max_nodes, None);
        assert_eq!(config.disconnected_policy, DisconnectedPolicy::Reject);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(EngineConfig::from_yaml_str("  \n").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = EngineConfig::from_yaml_str("edge_policy: sometimes").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "floyd_warshall_warn_nodes: 50").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.floyd_warshall_warn_nodes, 50);

        let missing = EngineConfig::from_file("/nonexistent/algograph.yaml");
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
