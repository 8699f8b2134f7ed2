use alloy::primitives::Address;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use blackhole_deployer::blockchain::{BlackHole, BlockchainClient, Wallet};
use blackhole_deployer::config::{load_config, DEFAULT_CONFIG_PATH};
use blackhole_deployer::lifecycle::{read_address, DEFAULT_OUTPUT_PATH};
use blackhole_deployer::observability::logging;

#[derive(Parser)]
#[command(name = "blackhole-cli")]
#[command(about = "Inspect and drive a deployed BlackHole contract", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Contract address; read from --address-file when omitted
    #[arg(short, long)]
    address: Option<Address>,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    address_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show critic block, closed flag and chain height
    Status,
    /// Close the black hole
    Close,
    /// Teleport tokens to the ledger account behind a public key
    Teleport { key: String },
    /// Ask the contract whether an account name is valid
    CheckAccount { name: String },
}

/// `--address` wins; otherwise the file written by the deployer is read.
fn resolve_address(cli: &Cli) -> std::io::Result<Address> {
    match cli.address {
        Some(address) => Ok(address),
        None => read_address(&cli.address_file),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let address = resolve_address(&cli)?;

    let wallet = Wallet::from_env()?;
    if let Some(wallet) = &wallet {
        wallet.ensure_sender(config.sender)?;
    }
    let client = BlockchainClient::connect(&config.provider, config.rpc_timeout_secs, wallet)?;
    let black_hole = BlackHole::at(client.clone(), address).with_sender(config.sender);

    match cli.command {
        Commands::Status => {
            let critic_block = black_hole.critic_block().await?;
            let closed = black_hole.closed().await?;
            let block_number = client.get_block_number().await?;
            let chain_id = client.get_chain_id().await?;

            println!("contract:      {}", address);
            println!("chain id:      {}", u64::from(chain_id));
            println!("critic block:  {}", critic_block);
            println!("current block: {}", block_number);
            println!("closed:        {}", closed);
        }
        Commands::Close => {
            let receipt = black_hole.close().await?;
            println!("closed in transaction {}", receipt.transaction_hash);
        }
        Commands::Teleport { key } => {
            let receipt = black_hole.teleport_key(&key).await?;
            println!("teleported in transaction {}", receipt.transaction_hash);
        }
        Commands::CheckAccount { name } => {
            let valid = black_hole.is_valid_account(&name).await?;
            println!("{}: {}", name, if valid { "valid" } else { "invalid" });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackhole_deployer::lifecycle::persist_address;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blackhole-cli", "status"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert_eq!(cli.address_file, PathBuf::from("./blackhole_address"));
        assert!(cli.address.is_none());
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_explicit_address_skips_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("blackhole_address");
        let cli = Cli::try_parse_from([
            "blackhole-cli",
            "--address",
            "0x4242424242424242424242424242424242424242",
            "--address-file",
            missing.to_str().unwrap(),
            "close",
        ])
        .unwrap();

        assert_eq!(resolve_address(&cli).unwrap(), Address::repeat_byte(0x42));
        assert!(matches!(cli.command, Commands::Close));
    }

    #[test]
    fn test_address_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blackhole_address");
        persist_address(&path, Address::repeat_byte(0x5a)).unwrap();

        let cli = Cli::try_parse_from([
            "blackhole-cli",
            "--address-file",
            path.to_str().unwrap(),
            "check-account",
            "te.mgr5ymass",
        ])
        .unwrap();

        assert_eq!(resolve_address(&cli).unwrap(), Address::repeat_byte(0x5a));
        assert!(matches!(cli.command, Commands::CheckAccount { ref name } if name == "te.mgr5ymass"));
    }

    #[test]
    fn test_missing_address_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "blackhole-cli",
            "--address-file",
            dir.path().join("absent").to_str().unwrap(),
            "teleport",
            "EOS7M38bvCoL7N3mBDbQyqePcK128G2b3so7XBa9hJn9uuKDN7we8",
        ])
        .unwrap();

        let err = resolve_address(&cli).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(matches!(cli.command, Commands::Teleport { .. }));
    }
}
