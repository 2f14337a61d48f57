//! # Request/Response Round Trips
//!
//! Every call here crosses the full stack: client encode, bincode framing,
//! server decode, server encode, client decode.

#[cfg(test)]
mod tests {
    use crate::harness::{connected_pair, HARNESS_WAIT};
    use dag_rpc_client::RpcClientError;
    use dag_wire::message::rpc::*;
    use shared_types::{
        BlockLevelParents, DomainBlock, DomainBlockHeader, DomainHash, RpcError, U256,
    };
    use std::sync::Arc;

    fn sample_block() -> DomainBlock {
        DomainBlock {
            header: DomainBlockHeader {
                version: 1,
                parents: vec![BlockLevelParents {
                    parent_hashes: vec![DomainHash::from_bytes([3; 32])],
                }],
                blue_work: U256::from(0x1234_5678u64),
                blue_score: 77,
                ..Default::default()
            },
            transactions: vec![],
        }
    }

    #[tokio::test]
    async fn test_get_block_count_round_trip() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block_count().await })
        };

        let _: GetBlockCountRequest = server.next_request().await;
        server.reply(GetBlockCountResponse {
            block_count: 500,
            header_count: 510,
            error: None,
        });

        let response = call.await.unwrap().unwrap();
        assert_eq!(response.block_count, 500);
        assert_eq!(response.header_count, 510);
    }

    #[tokio::test]
    async fn test_request_arguments_reach_server() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let hash = DomainHash::from_bytes([9; 32]);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block(hash, true).await })
        };

        let request: GetBlockRequest = server.next_request().await;
        assert_eq!(request.hash, hash);
        assert!(request.include_transactions);

        server.reply(GetBlockResponse {
            block: Some(RpcBlock {
                block: sample_block(),
                verbose_data: None,
            }),
            error: None,
        });

        let response = call.await.unwrap().unwrap();
        let block = response.block.unwrap().block;
        assert_eq!(block, sample_block());
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block(DomainHash::default(), false).await })
        };

        let _: GetBlockRequest = server.next_request().await;
        server.reply(GetBlockResponse {
            block: None,
            error: Some(RpcError::new("block not found")),
        });

        match call.await.unwrap() {
            Err(err @ RpcClientError::Rpc(_)) => assert_eq!(
                err.to_string(),
                "received error response from RPC: block not found"
            ),
            other => panic!("expected RPC error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_optional_arguments_survive_the_wire() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_blocks(None, true, false).await })
        };

        let request: GetBlocksRequest = server.next_request().await;
        assert_eq!(request.low_hash, None);
        assert!(request.include_blocks);

        server.reply(GetBlocksResponse {
            block_hashes: vec![DomainHash::from_bytes([1; 32])],
            blocks: vec![],
            error: None,
        });
        assert_eq!(call.await.unwrap().unwrap().block_hashes.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_on_different_routes() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);

        let count = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block_count().await })
        };
        let info = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_info().await })
        };

        let _: GetInfoRequest = server.next_request().await;
        let _: GetBlockCountRequest = server.next_request().await;

        // Answer in the opposite order; routes keep them apart.
        server.reply(GetInfoResponse {
            server_version: "0.12.0".into(),
            is_synced: true,
            ..Default::default()
        });
        server.reply(GetBlockCountResponse {
            block_count: 3,
            ..Default::default()
        });

        assert_eq!(count.await.unwrap().unwrap().block_count, 3);
        assert_eq!(info.await.unwrap().unwrap().server_version, "0.12.0");
    }
}
