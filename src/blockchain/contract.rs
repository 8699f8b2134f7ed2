//! RPC bindings for a deployed BlackHole contract.
//!
//! The contract itself ships as a compiled artifact; this module only knows
//! the part of its interface the tooling drives:
//!
//! ```text
//! criticBlock()          view  → uint256   block from which close() is allowed
//! closed()               view  → bool      set once by close()
//! close()                      reverts before criticBlock or when closed
//! teleportKey(key)             reverts when closed or the ERC20 source is unusable
//! isValidAccount(name)   view  → bool      ledger account-name predicate
//! ```

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::BlockchainResult;

sol! {
    #[sol(rpc)]
    interface IBlackHole {
        function criticBlock() external view returns (uint256);
        function closed() external view returns (bool);
        function close() external;
        function teleportKey(string key) external;
        function isValidAccount(string account) external view returns (bool);
    }
}

type Instance = IBlackHole::IBlackHoleInstance<DynProvider>;

/// A deployed BlackHole instance reached through [`BlockchainClient`].
#[derive(Debug, Clone)]
pub struct BlackHole {
    client: BlockchainClient,
    address: Address,
    sender: Option<Address>,
}

impl BlackHole {
    /// Bind to the contract at `address`.
    pub fn at(client: BlockchainClient, address: Address) -> Self {
        Self {
            client,
            address,
            sender: None,
        }
    }

    /// Send state-changing calls from `sender`.
    ///
    /// Needed when the node signs; a local wallet fills it in by itself.
    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> Instance {
        IBlackHole::new(self.address, self.client.provider().clone())
    }

    /// Block height from which the contract may be closed.
    pub async fn critic_block(&self) -> BlockchainResult<U256> {
        let instance = self.instance();
        self.client.timed(instance.criticBlock().call()).await
    }

    /// Whether `close()` has succeeded.
    pub async fn closed(&self) -> BlockchainResult<bool> {
        let instance = self.instance();
        self.client.timed(instance.closed().call()).await
    }

    /// Ask the contract whether `name` is an acceptable account name.
    pub async fn is_valid_account(&self, name: &str) -> BlockchainResult<bool> {
        let instance = self.instance();
        self.client
            .timed(instance.isValidAccount(name.to_string()).call())
            .await
    }

    /// Close the black hole. Reverts before the critic block and when already closed.
    pub async fn close(&self) -> BlockchainResult<TransactionReceipt> {
        let tx = self.instance().close().into_transaction_request();
        let receipt = self.transact(tx).await?;
        tracing::info!(contract = %self.address, tx_hash = %receipt.transaction_hash, "BlackHole closed");
        Ok(receipt)
    }

    /// Teleport the caller's tokens to the ledger account behind `key`.
    pub async fn teleport_key(&self, key: &str) -> BlockchainResult<TransactionReceipt> {
        let tx = self
            .instance()
            .teleportKey(key.to_string())
            .into_transaction_request();
        let receipt = self.transact(tx).await?;
        tracing::info!(contract = %self.address, tx_hash = %receipt.transaction_hash, "Key teleported");
        Ok(receipt)
    }

    async fn transact(&self, tx: TransactionRequest) -> BlockchainResult<TransactionReceipt> {
        let tx = match self.sender {
            Some(sender) => tx.with_from(sender),
            None => tx,
        };
        self.client.send_transaction(tx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::client::tests::{mocked_client, receipt_json, TX_HASH};
    use crate::blockchain::types::BlockchainError;
    use alloy::primitives::Bytes;
    use alloy::sol_types::{SolCall, SolValue};
    use alloy::transports::mock::Asserter;

    fn mocked(asserter: &Asserter) -> BlackHole {
        BlackHole::at(mocked_client(asserter), Address::repeat_byte(0x42))
    }

    fn encoded<T: SolValue>(value: T) -> Bytes {
        value.abi_encode().into()
    }

    #[tokio::test]
    async fn test_reads_critic_block() {
        let asserter = Asserter::new();
        asserter.push_success(&encoded(U256::from(1000)));

        let black_hole = mocked(&asserter);
        assert_eq!(black_hole.critic_block().await.unwrap(), U256::from(1000));
    }

    #[tokio::test]
    async fn test_reads_closed_flag() {
        let asserter = Asserter::new();
        asserter.push_success(&encoded(false));
        asserter.push_success(&encoded(true));

        let black_hole = mocked(&asserter);
        assert!(!black_hole.closed().await.unwrap());
        assert!(black_hole.closed().await.unwrap());
    }

    #[tokio::test]
    async fn test_is_valid_account_decodes_answer() {
        let asserter = Asserter::new();
        asserter.push_success(&encoded(true));

        let black_hole = mocked(&asserter);
        assert!(black_hole.is_valid_account("te.mgr5ymass").await.unwrap());
    }

    #[tokio::test]
    async fn test_reverted_call_is_reported() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("execution reverted");

        let black_hole = mocked(&asserter);
        let err = black_hole.closed().await.unwrap_err();
        assert!(matches!(err, BlockchainError::Reverted(_)));
    }

    #[tokio::test]
    async fn test_close_mined() {
        let asserter = Asserter::new();
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt_json(true, None));

        let black_hole = mocked(&asserter).with_sender(Address::repeat_byte(0x11));
        let receipt = black_hole.close().await.unwrap();
        assert_eq!(receipt.transaction_hash, TX_HASH);
    }

    #[tokio::test]
    async fn test_close_with_failed_receipt() {
        let asserter = Asserter::new();
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt_json(false, None));

        let black_hole = mocked(&asserter).with_sender(Address::repeat_byte(0x11));
        let err = black_hole.close().await.unwrap_err();
        assert!(matches!(err, BlockchainError::Reverted(_)));
    }

    #[tokio::test]
    async fn test_teleport_rejected_by_node() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("execution reverted: closed");

        let black_hole = mocked(&asserter).with_sender(Address::repeat_byte(0x11));
        let err = black_hole
            .teleport_key("EOS7M38bvCoL7N3mBDbQyqePcK128G2b3so7XBa9hJn9uuKDN7we8")
            .await
            .unwrap_err();
        assert!(matches!(err, BlockchainError::Reverted(ref msg) if msg.contains("closed")));
    }

    #[tokio::test]
    async fn test_close_calldata() {
        let black_hole = mocked(&Asserter::new()).with_sender(Address::repeat_byte(0x11));
        let tx = black_hole.instance().close().into_transaction_request();

        assert_eq!(tx.to, Some(Address::repeat_byte(0x42).into()));
        let input = tx.input.input().cloned().unwrap_or_default();
        assert_eq!(input.to_vec(), IBlackHole::closeCall::SELECTOR.to_vec());
    }
}
