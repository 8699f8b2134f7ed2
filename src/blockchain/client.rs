//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint, optionally with a local signer
//! - Query chain state (chain id, block number)
//! - Broadcast transactions and wait for their receipts
//! - Bound every round trip with a timeout

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::fmt::Display;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::Wallet;

/// Delay between receipt lookups while a transaction is pending.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Blockchain RPC client wrapper.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: DynProvider,
    rpc_url: String,
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a client for `rpc_url`.
    ///
    /// No request is made here; an unreachable endpoint surfaces on first use.
    /// With a `wallet`, transactions are signed locally; otherwise they go out
    /// through `eth_sendTransaction` and the node signs them.
    pub fn connect(
        rpc_url: &str,
        rpc_timeout_secs: u64,
        wallet: Option<Wallet>,
    ) -> BlockchainResult<Self> {
        let url: url::Url = rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e))
        })?;

        let provider = match wallet {
            Some(wallet) => ProviderBuilder::new()
                .wallet(wallet.into_signer())
                .connect_http(url)
                .erased(),
            None => ProviderBuilder::new().connect_http(url).erased(),
        };

        tracing::debug!(rpc_url = %rpc_url, timeout_secs = rpc_timeout_secs, "RPC client created");

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        })
    }

    /// Wrap an already-built provider.
    pub fn from_provider(provider: DynProvider, rpc_timeout_secs: u64) -> Self {
        Self {
            provider,
            rpc_url: String::from("<custom>"),
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        }
    }

    /// Await an RPC future under the configured timeout.
    pub(crate) async fn timed<T, E, F>(&self, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(BlockchainError::from_rpc(e)),
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.timed(self.provider.get_chain_id()).await.map(ChainId::from)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        self.timed(self.provider.get_block_number()).await
    }

    /// Broadcast a transaction and wait for it to be mined.
    ///
    /// A receipt with failed status is reported as [`BlockchainError::Reverted`].
    pub async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> BlockchainResult<TransactionReceipt> {
        let receipt = timeout(self.timeout_duration, self.broadcast_and_wait(tx))
            .await
            .map_err(|_| BlockchainError::Timeout(self.timeout_duration.as_secs()))??;

        if !receipt.status() {
            return Err(BlockchainError::Reverted(format!(
                "transaction {} failed",
                receipt.transaction_hash
            )));
        }

        Ok(receipt)
    }

    async fn broadcast_and_wait(
        &self,
        tx: TransactionRequest,
    ) -> BlockchainResult<TransactionReceipt> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(BlockchainError::from_rpc)?;
        let tx_hash = *pending.tx_hash();
        tracing::debug!(tx_hash = %tx_hash, "Transaction broadcast");

        let mut ticker = interval(RECEIPT_POLL_INTERVAL);
        loop {
            ticker.tick().await;

            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(BlockchainError::from_rpc)?;
            match receipt {
                Some(receipt) => return Ok(receipt),
                None => tracing::debug!(tx_hash = %tx_hash, "Transaction pending"),
            }
        }
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
