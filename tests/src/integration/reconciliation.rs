//! # Stale Response Reconciliation
//!
//! A submission that times out on the client may still be processed by the
//! server. Its response then lands on the shared response route after the
//! next submission is already waiting there. The client must match by
//! transaction id and never hand the earlier outcome to the later caller.
//! Block and mempool entry lookups reconcile by the hash they asked for.

#[cfg(test)]
mod tests {
    use crate::harness::{connected_pair, transaction, transaction_id};
    use dag_rpc_client::RpcClientError;
    use dag_telemetry::STALE_RESPONSES;
    use dag_wire::message::rpc::*;
    use dag_wire::Command;
    use shared_types::{DomainBlock, DomainBlockHeader, RpcError};
    use std::sync::Arc;
    use std::time::Duration;

    const SHORT_TIMEOUT: Duration = Duration::from_millis(200);

    fn accepted(lock_time: u64) -> SubmitTransactionResponse {
        SubmitTransactionResponse {
            transaction_id: Some(transaction_id(lock_time)),
            error: None,
        }
    }

    #[tokio::test]
    async fn test_late_response_is_not_given_to_next_submit() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);
        let client = Arc::new(client);
        let stale_before = STALE_RESPONSES.get();

        // First submit: the server receives it but answers too late.
        let first = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.submit_transaction(transaction(1), false).await })
        };
        let request: SubmitTransactionRequest = server.next_request().await;
        assert_eq!(request.transaction.id(), transaction_id(1));
        assert!(matches!(
            first.await.unwrap(),
            Err(RpcClientError::Timeout(_))
        ));

        // Second submit is in flight when the first answer finally arrives.
        let second = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.submit_transaction(transaction(2), false).await })
        };
        let request: SubmitTransactionRequest = server.next_request().await;
        assert_eq!(request.transaction.id(), transaction_id(2));

        server.reply(accepted(1));
        server.reply(accepted(2));

        let response = second.await.unwrap().unwrap();
        assert_eq!(response.transaction_id, Some(transaction_id(2)));
        assert!(STALE_RESPONSES.get() >= stale_before + 1.0);

        let route = client
            .router()
            .route(Command::SubmitTransactionResponse)
            .unwrap();
        assert!(route.is_empty());
    }

    #[tokio::test]
    async fn test_stale_error_is_not_reported_as_ours() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.submit_transaction(transaction(20), false).await })
        };
        let _: SubmitTransactionRequest = server.next_request().await;

        // An earlier call's rejection, carrying its id.
        server.reply(SubmitTransactionResponse {
            transaction_id: Some(transaction_id(10)),
            error: Some(RpcError::new("double spend")),
        });
        server.reply(accepted(20));

        let response = call.await.unwrap().unwrap();
        assert_eq!(response.transaction_id, Some(transaction_id(20)));
    }

    #[tokio::test]
    async fn test_error_without_id_matched_by_message() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.submit_transaction(transaction(31), false).await })
        };
        let _: SubmitTransactionRequest = server.next_request().await;

        // Names a different transaction: discarded.
        server.reply(SubmitTransactionResponse {
            transaction_id: None,
            error: Some(RpcError::new(format!(
                "transaction {} is already in the mempool",
                transaction_id(30)
            ))),
        });
        // Names ours: accepted as the answer.
        server.reply(SubmitTransactionResponse {
            transaction_id: None,
            error: Some(RpcError::new(format!(
                "transaction {} is an orphan",
                transaction_id(31)
            ))),
        });

        match call.await.unwrap() {
            Err(RpcClientError::Rpc(error)) => {
                assert!(error.message.contains(&transaction_id(31).to_hex()));
            }
            other => panic!("expected RPC error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_replacement_reconciles_the_same_way() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(
                async move { client.submit_transaction_replacement(transaction(41)).await },
            )
        };
        let _: SubmitTransactionReplacementRequest = server.next_request().await;

        server.reply(SubmitTransactionReplacementResponse {
            transaction_id: Some(transaction_id(40)),
            replaced_transaction: Some(transaction(39)),
            error: None,
        });
        server.reply(SubmitTransactionReplacementResponse {
            transaction_id: Some(transaction_id(41)),
            replaced_transaction: Some(transaction(38)),
            error: None,
        });

        let response = call.await.unwrap().unwrap();
        assert_eq!(response.transaction_id, Some(transaction_id(41)));
        assert_eq!(response.replaced_transaction, Some(transaction(38)));
    }

    fn block(timestamp: i64) -> DomainBlock {
        DomainBlock {
            header: DomainBlockHeader {
                timestamp,
                ..Default::default()
            },
            transactions: Vec::new(),
        }
    }

    fn found(block: DomainBlock) -> GetBlockResponse {
        GetBlockResponse {
            block: Some(RpcBlock {
                block,
                verbose_data: None,
            }),
            error: None,
        }
    }

    #[tokio::test]
    async fn test_late_block_is_not_given_to_next_lookup() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);
        let client = Arc::new(client);
        let (old, wanted) = (block(1), block(2));

        let first = {
            let client = Arc::clone(&client);
            let hash = old.hash();
            tokio::spawn(async move { client.get_block(hash, false).await })
        };
        let request: GetBlockRequest = server.next_request().await;
        assert_eq!(request.hash, old.hash());
        assert!(matches!(
            first.await.unwrap(),
            Err(RpcClientError::Timeout(_))
        ));

        let second = {
            let client = Arc::clone(&client);
            let hash = wanted.hash();
            tokio::spawn(async move { client.get_block(hash, false).await })
        };
        let request: GetBlockRequest = server.next_request().await;
        assert_eq!(request.hash, wanted.hash());

        server.reply(found(old));
        server.reply(found(wanted.clone()));

        let response = second.await.unwrap().unwrap();
        assert_eq!(response.block.map(|b| b.block), Some(wanted));
        assert!(client
            .router()
            .route(Command::GetBlockResponse)
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_late_mempool_entry_is_discarded() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .get_mempool_entry(transaction_id(61), false, true)
                    .await
            })
        };
        let request: GetMempoolEntryRequest = server.next_request().await;
        assert_eq!(request.tx_id, transaction_id(61));

        let entry = |lock_time| GetMempoolEntryResponse {
            entry: Some(MempoolEntry {
                fee: 10,
                transaction: transaction(lock_time),
                is_orphan: false,
            }),
            error: None,
        };
        server.reply(entry(60));
        server.reply(entry(61));

        let response = call.await.unwrap().unwrap();
        assert_eq!(
            response.entry.map(|e| e.transaction.id()),
            Some(transaction_id(61))
        );
    }

    #[tokio::test]
    async fn test_only_stale_responses_time_out() {
        let (client, server) = connected_pair(SHORT_TIMEOUT);

        server.reply(accepted(50));
        let result = client.submit_transaction(transaction(51), false).await;
        assert!(matches!(result, Err(RpcClientError::Timeout(_))));
    }
}
