//! Notification registrations and stop calls.
//!
//! Each `register_for_*` call registers with the server, then spawns a task
//! that hands every notification of that kind to `handler` until the
//! client closes. Registering twice for the same kind starts a second task
//! competing for the same notifications.

use crate::client::RpcClient;
use crate::errors::RpcClientError;
use dag_wire::message::rpc::*;
use dag_wire::Message;
use tracing::instrument;

impl RpcClient {
    #[instrument(skip(self, handler))]
    pub async fn register_for_block_added_notifications<F>(
        &self,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(BlockAddedNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyBlockAddedResponse, _, _>(NotifyBlockAddedRequest, handler)
            .await
    }

    #[instrument(skip(self, handler))]
    pub async fn register_for_virtual_selected_parent_chain_changed_notifications<F>(
        &self,
        include_accepted_transaction_ids: bool,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(VirtualSelectedParentChainChangedNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyVirtualSelectedParentChainChangedResponse, _, _>(
            NotifyVirtualSelectedParentChainChangedRequest {
                include_accepted_transaction_ids,
            },
            handler,
        )
        .await
    }

    /// One registration covers two notification kinds, each with its own
    /// handler and task.
    #[instrument(skip(self, on_conflict, on_resolved))]
    pub async fn register_for_finality_conflicts_notifications<F, G>(
        &self,
        on_conflict: F,
        on_resolved: G,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(FinalityConflictNotification) + Send + 'static,
        G: FnMut(FinalityConflictResolvedNotification) + Send + 'static,
    {
        let conflicts = self
            .router()
            .route(FinalityConflictNotification::COMMAND)?;
        let resolutions = self
            .router()
            .route(FinalityConflictResolvedNotification::COMMAND)?;

        self.call::<_, NotifyFinalityConflictsResponse>(NotifyFinalityConflictsRequest)
            .await?;
        self.spawn_listener::<FinalityConflictNotification, _>(conflicts, on_conflict);
        self.spawn_listener::<FinalityConflictResolvedNotification, _>(resolutions, on_resolved);
        Ok(())
    }

    /// An empty `addresses` list asks for changes to every address.
    #[instrument(skip(self, addresses, handler), fields(addresses = addresses.len()))]
    pub async fn register_for_utxos_changed_notifications<F>(
        &self,
        addresses: Vec<String>,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(UtxosChangedNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyUtxosChangedResponse, _, _>(
            NotifyUtxosChangedRequest { addresses },
            handler,
        )
        .await
    }

    /// Stop server-side delivery for `addresses`. The local task keeps
    /// running for any addresses still registered.
    #[instrument(skip(self, addresses), fields(addresses = addresses.len()))]
    pub async fn stop_notifying_utxos_changed(
        &self,
        addresses: Vec<String>,
    ) -> Result<StopNotifyingUtxosChangedResponse, RpcClientError> {
        self.call(StopNotifyingUtxosChangedRequest { addresses })
            .await
    }

    #[instrument(skip(self, handler))]
    pub async fn register_for_virtual_selected_parent_blue_score_changed_notifications<F>(
        &self,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(VirtualSelectedParentBlueScoreChangedNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyVirtualSelectedParentBlueScoreChangedResponse, _, _>(
            NotifyVirtualSelectedParentBlueScoreChangedRequest,
            handler,
        )
        .await
    }

    #[instrument(skip(self, handler))]
    pub async fn register_for_pruning_point_utxo_set_override_notifications<F>(
        &self,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(PruningPointUtxoSetOverrideNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyPruningPointUtxoSetOverrideResponse, _, _>(
            NotifyPruningPointUtxoSetOverrideRequest,
            handler,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn stop_notifying_pruning_point_utxo_set_override(
        &self,
    ) -> Result<StopNotifyingPruningPointUtxoSetOverrideResponse, RpcClientError> {
        self.call(StopNotifyingPruningPointUtxoSetOverrideRequest)
            .await
    }

    #[instrument(skip(self, handler))]
    pub async fn register_for_virtual_daa_score_changed_notifications<F>(
        &self,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(VirtualDaaScoreChangedNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyVirtualDaaScoreChangedResponse, _, _>(
            NotifyVirtualDaaScoreChangedRequest,
            handler,
        )
        .await
    }

    #[instrument(skip(self, handler))]
    pub async fn register_for_new_block_template_notifications<F>(
        &self,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        F: FnMut(NewBlockTemplateNotification) + Send + 'static,
    {
        self.subscribe::<_, NotifyNewBlockTemplateResponse, _, _>(
            NotifyNewBlockTemplateRequest,
            handler,
        )
        .await
    }
}
