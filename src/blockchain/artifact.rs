//! Compiled contract artifacts.
//!
//! Reads the JSON descriptor a Solidity toolchain (Truffle, Hardhat) writes
//! for each contract: its name, ABI and creation bytecode. Unknown fields
//! such as `deployedBytecode` or `sourceMap` are ignored.

use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a contract artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("contract artifact {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read contract artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed contract artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("contract artifact '{0}' has no creation bytecode")]
    EmptyBytecode(String),
}

/// ABI and creation bytecode of a compiled contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Read an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse an artifact, rejecting one without bytecode (an interface or an
    /// abstract contract).
    pub fn from_json(content: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(content)?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(artifact.contract_name));
        }
        Ok(artifact)
    }

    /// Number of constructor parameters, if the ABI declares a constructor.
    pub fn constructor_arity(&self) -> Option<usize> {
        self.abi.constructor().map(|c| c.inputs.len())
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn creation_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{
        "contractName": "BlackHoleEosAccount",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "_erc20Contract", "type": "address" },
                    { "name": "_criticBlock", "type": "uint256" },
                    { "name": "_minimumAmount", "type": "uint256" }
                ]
            },
            {
                "type": "function",
                "name": "closed",
                "stateMutability": "view",
                "inputs": [],
                "outputs": [{ "name": "", "type": "bool" }]
            }
        ],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080",
        "sourceMap": "1:2:3"
    }"#;

    #[test]
    fn test_parse_artifact() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "BlackHoleEosAccount");
        assert_eq!(artifact.constructor_arity(), Some(3));
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(artifact.abi.function("closed").is_some());
    }

    #[test]
    fn test_creation_code_appends_args() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        let code = artifact.creation_code(&[0xaa, 0xbb]);
        assert_eq!(code.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52, 0xaa, 0xbb]);
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        let err = ContractArtifact::from_json(
            r#"{ "contractName": "IBlackHole", "abi": [], "bytecode": "0x" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ArtifactError::EmptyBytecode(ref name) if name == "IBlackHole"));
    }

    #[test]
    fn test_missing_bytecode_is_parse_error() {
        let err = ContractArtifact::from_json(r#"{ "abi": [] }"#).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContractArtifact::load(&dir.path().join("BlackHole.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }
}
