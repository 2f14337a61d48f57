//! # Close Semantics
//!
//! Closing either end must release every waiter within a bounded time and
//! end every subscription task.

#[cfg(test)]
mod tests {
    use crate::harness::{connected_pair, HARNESS_WAIT};
    use dag_router::RouteError;
    use dag_rpc_client::RpcClientError;
    use dag_wire::message::rpc::*;
    use dag_wire::Command;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    const BOUND: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_close_releases_pending_call() {
        let (client, server) = connected_pair(Duration::from_secs(60));
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_block_dag_info().await })
        };
        let _: GetBlockDagInfoRequest = server.next_request().await;

        client.close().await;
        let result = timeout(BOUND, call).await.unwrap().unwrap();
        assert!(matches!(result, Err(RpcClientError::Closed)));
        assert!(client.is_closed());
    }

    #[tokio::test]
    async fn test_close_ends_subscription_loop() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let registration = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .register_for_virtual_selected_parent_blue_score_changed_notifications(
                        move |n| {
                            let _ = tx.send(n.virtual_selected_parent_blue_score);
                        },
                    )
                    .await
            })
        };
        let _: NotifyVirtualSelectedParentBlueScoreChangedRequest = server.next_request().await;
        server.reply(NotifyVirtualSelectedParentBlueScoreChangedResponse::default());
        registration.await.unwrap().unwrap();

        server.reply(VirtualSelectedParentBlueScoreChangedNotification {
            virtual_selected_parent_blue_score: 1,
        });
        assert_eq!(timeout(BOUND, rx.recv()).await.unwrap(), Some(1));

        timeout(BOUND, client.close()).await.unwrap();

        // The task dropped its handler, and with it the sender.
        assert_eq!(timeout(BOUND, rx.recv()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_disconnect_closes_client() {
        let (client, server) = connected_pair(Duration::from_secs(60));
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_info().await })
        };
        let _: GetInfoRequest = server.next_request().await;
        server.disconnect().await;

        let result = timeout(BOUND, call).await.unwrap().unwrap();
        assert!(matches!(result, Err(RpcClientError::Closed)));
        assert!(client.is_closed());
    }

    #[tokio::test]
    async fn test_every_route_reports_closed() {
        let (client, _server) = connected_pair(HARNESS_WAIT);
        client.close().await;
        client.close().await;

        for command in [
            Command::GetInfoResponse,
            Command::BlockAddedNotification,
            Command::SubmitTransactionResponse,
        ] {
            let route = client.router().route(command).unwrap();
            assert_eq!(
                timeout(BOUND, route.dequeue_with_timeout(HARNESS_WAIT))
                    .await
                    .unwrap(),
                Err(RouteError::Closed)
            );
        }

        assert!(matches!(
            client.get_coin_supply().await,
            Err(RpcClientError::Closed)
        ));
    }
}
