//! # Deployment Configuration
//!
//! Construction-time parameters for `airdrop deploy`, read from YAML (JSON
//! is valid YAML and is accepted too):
//!
//! ```yaml
//! admin: "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"
//! vault: "0xd9145CCE52D386f254917e481eB44e9943F39138"
//! initial_root: "0x…"
//! token:
//!   name: TestToken
//!   symbol: TTK
//!   initial_supply: "1000"
//!   deployer: "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"
//! funding: "300"
//! ```
//!
//! The token's whole supply is minted to `deployer`, who then moves
//! `funding` into the ledger's vault.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use airdrop_core::{Address, Amount, NodeHash};
use airdrop_ledger::LedgerConfig;

/// Token parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub initial_supply: Amount,
    /// Account credited with the initial supply.
    pub deployer: Address,
}

/// Parsed `deployment.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    pub admin: Address,
    pub vault: Address,
    pub initial_root: NodeHash,
    pub token: TokenConfig,
    /// Amount moved from the deployer into the vault at deploy time.
    #[serde(default)]
    pub funding: Amount,
}

impl DeploymentConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read deployment config: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid deployment config: {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).context("failed to parse deployment YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never produce a working ledger.
    pub fn validate(&self) -> Result<()> {
        if self.admin.is_zero() {
            bail!("admin must not be the zero address");
        }
        if self.vault.is_zero() {
            bail!("vault must not be the zero address");
        }
        if self.token.deployer.is_zero() {
            bail!("token.deployer must not be the zero address");
        }
        if self.vault == self.token.deployer {
            bail!("vault and token.deployer must be different accounts");
        }
        if self.token.symbol.trim().is_empty() {
            bail!("token.symbol must not be empty");
        }
        if self.funding > self.token.initial_supply {
            bail!(
                "funding {} exceeds token.initial_supply {}",
                self.funding,
                self.token.initial_supply
            );
        }
        Ok(())
    }

    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            admin: self.admin,
            vault: self.vault,
            initial_root: self.initial_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
admin: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
vault: "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
initial_root: "0x1111111111111111111111111111111111111111111111111111111111111111"
token:
  name: TestToken
  symbol: TTK
  initial_supply: "1000"
  deployer: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
funding: 300
"#;

    #[test]
    fn parses_sample() {
        let config = DeploymentConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.token.initial_supply, Amount::new(1000));
        assert_eq!(config.funding, Amount::new(300));
        assert_eq!(config.ledger_config().admin, config.admin);
    }

    #[test]
    fn accepts_json() {
        let json = r#"{
            "admin": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "vault": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
            "initial_root": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "token": {
                "name": "T", "symbol": "T", "initial_supply": "5",
                "deployer": "0xcccccccccccccccccccccccccccccccccccccccc"
            }
        }"#;
        let config = DeploymentConfig::from_yaml_str(json).unwrap();
        assert!(config.funding.is_zero());
    }

    #[test]
    fn overfunding_rejected() {
        let bad = SAMPLE.replace("funding: 300", "funding: 3000");
        let err = DeploymentConfig::from_yaml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn unknown_field_rejected() {
        let bad = format!("{SAMPLE}paused: true\n");
        assert!(DeploymentConfig::from_yaml_str(&bad).is_err());
    }

    #[test]
    fn vault_equal_to_deployer_rejected() {
        let bad = SAMPLE.replace(
            "vault: \"0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb\"",
            "vault: \"0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\"",
        );
        assert!(DeploymentConfig::from_yaml_str(&bad).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeploymentConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read deployment config"));
    }
}
