//! # Unknown and Malformed Inbound Traffic
//!
//! Bad messages are dropped one at a time. The connection and every other
//! route stay usable.

#[cfg(test)]
mod tests {
    use crate::harness::{connected_pair, HARNESS_WAIT};
    use dag_rpc_client::RpcClientError;
    use dag_telemetry::{CONVERSION_ERRORS, UNKNOWN_COMMANDS};
    use dag_wire::limits::MAX_BLOCK_PARENTS;
    use dag_wire::message::p2p::PingMessage;
    use dag_wire::message::rpc::*;
    use dag_wire::wire;
    use dag_wire::{encode, Envelope, WirePayload};
    use shared_types::{BlockLevelParents, DomainBlock, DomainBlockHeader, DomainHash, RpcError};
    use std::sync::Arc;
    use std::time::Duration;

    fn block_with_parents(count: usize) -> DomainBlock {
        DomainBlock {
            header: DomainBlockHeader {
                parents: vec![BlockLevelParents {
                    parent_hashes: (0..count)
                        .map(|i| DomainHash::from_bytes([(i % 251) as u8; 32]))
                        .collect(),
                }],
                ..Default::default()
            },
            transactions: vec![],
        }
    }

    #[tokio::test]
    async fn test_unknown_command_is_ignored() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let unknown_before = UNKNOWN_COMMANDS.get();

        // A gossip message has no route on an RPC client.
        server.reply_message(PingMessage { nonce: 1 }.into());
        // So does a request.
        server.reply_message(GetInfoRequest.into());

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block_count().await })
        };
        let _: GetBlockCountRequest = server.next_request().await;
        server.reply(GetBlockCountResponse {
            block_count: 8,
            ..Default::default()
        });

        assert_eq!(call.await.unwrap().unwrap().block_count, 8);
        assert!(!client.is_closed());
        assert!(UNKNOWN_COMMANDS.get() >= unknown_before + 2.0);
    }

    #[tokio::test]
    async fn test_response_with_error_and_payload_is_dropped() {
        let (client, server) = connected_pair(Duration::from_millis(300));
        let client = Arc::new(client);
        let errors_before = CONVERSION_ERRORS.get();

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block(DomainHash::default(), false).await })
        };
        let _: GetBlockRequest = server.next_request().await;

        let mut envelope = encode(
            GetBlockResponse {
                block: Some(RpcBlock::default()),
                error: None,
            }
            .into(),
        )
        .unwrap();
        if let Some(WirePayload::GetBlockResponse(message)) = envelope.payload.as_mut() {
            message.error = Some(wire::rpc::RpcError {
                message: "both set".into(),
            });
        }
        server.reply_raw(envelope);

        // The invalid response never reaches the caller.
        assert!(matches!(
            call.await.unwrap(),
            Err(RpcClientError::Timeout(_))
        ));
        assert!(CONVERSION_ERRORS.get() >= errors_before + 1.0);

        // The route still works.
        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block(DomainHash::default(), false).await })
        };
        let _: GetBlockRequest = server.next_request().await;
        server.reply(GetBlockResponse {
            block: None,
            error: Some(RpcError::new("not found")),
        });
        assert!(matches!(call.await.unwrap(), Err(RpcClientError::Rpc(_))));
    }

    #[tokio::test]
    async fn test_parent_ceiling_enforced_on_both_sides() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let registration = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .register_for_block_added_notifications(move |n| {
                        let _ = tx.send(n.block.block.header.direct_parents().len());
                    })
                    .await
            })
        };
        let _: NotifyBlockAddedRequest = server.next_request().await;
        server.reply(NotifyBlockAddedResponse::default());
        registration.await.unwrap().unwrap();

        // Exactly at the ceiling encodes and is delivered.
        let at_max = block_with_parents(MAX_BLOCK_PARENTS);
        server.reply(BlockAddedNotification {
            block: RpcBlock {
                block: at_max.clone(),
                verbose_data: None,
            },
        });
        let delivered = tokio::time::timeout(HARNESS_WAIT, rx.recv()).await.unwrap();
        assert_eq!(delivered, Some(MAX_BLOCK_PARENTS));

        // One past it is refused by the encoder.
        let over = BlockAddedNotification {
            block: RpcBlock {
                block: block_with_parents(MAX_BLOCK_PARENTS + 1),
                verbose_data: None,
            },
        };
        assert!(encode(over.into()).is_err());

        // A hostile server can skip the encoder; the client drops the frame
        // and the subscription keeps running.
        let mut envelope = encode(
            BlockAddedNotification {
                block: RpcBlock {
                    block: at_max,
                    verbose_data: None,
                },
            }
            .into(),
        )
        .unwrap();
        if let Some(WirePayload::BlockAddedNotification(message)) = envelope.payload.as_mut() {
            if let Some(block) = message.block.as_mut() {
                if let Some(header) = block.header.as_mut() {
                    let extra = header.parents[0].parent_hashes[0].clone();
                    header.parents[0].parent_hashes.push(extra);
                }
            }
        }
        server.reply_raw(envelope);
        server.reply(BlockAddedNotification {
            block: RpcBlock {
                block: block_with_parents(1),
                verbose_data: None,
            },
        });

        let delivered = tokio::time::timeout(HARNESS_WAIT, rx.recv()).await.unwrap();
        assert_eq!(delivered, Some(1));
    }

    #[tokio::test]
    async fn test_empty_envelope_is_dropped() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        server.reply_raw(Envelope::default());

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_coin_supply().await })
        };
        let _: GetCoinSupplyRequest = server.next_request().await;
        server.reply(GetCoinSupplyResponse {
            max_sompi: 29_000_000_000,
            ..Default::default()
        });
        assert_eq!(call.await.unwrap().unwrap().max_sompi, 29_000_000_000);
    }
}
