use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use storefront_core::{FormEffect, FormMsg, ListEffect, ListMsg, Schema};
use storefront_gateway::{CollectionGateway, GatewayError};
use storefront_logging::store_warn;

use crate::router::Navigator;

/// Delay between an acknowledged submit and the return to the list view.
/// Host policy; the controllers only emit the domain-level `ScheduleReturn`.
pub const RETURN_TO_LIST_DELAY: Duration = Duration::from_millis(2000);

/// Executes controller effects: gateway calls are spawned on a private tokio
/// runtime and their results sent back as reply messages; navigation intents
/// go straight to the host router.
pub struct EffectRunner {
    runtime: tokio::runtime::Runtime,
    gateway: Arc<dyn CollectionGateway>,
    return_delay: Duration,
}

impl EffectRunner {
    pub fn new(gateway: Arc<dyn CollectionGateway>) -> Self {
        Self::with_return_delay(gateway, RETURN_TO_LIST_DELAY)
    }

    pub fn with_return_delay(gateway: Arc<dyn CollectionGateway>, return_delay: Duration) -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        Self {
            runtime,
            gateway,
            return_delay,
        }
    }

    pub(crate) fn run_list(
        &self,
        schema: &'static Schema,
        effects: Vec<ListEffect>,
        reply_tx: &mpsc::Sender<ListMsg>,
        navigator: &Arc<dyn Navigator>,
    ) {
        for effect in effects {
            match effect {
                ListEffect::Navigate { path } => navigator.navigate(&path),
                ListEffect::LoadCollection => {
                    let gateway = self.gateway.clone();
                    let tx = reply_tx.clone();
                    self.runtime.spawn(async move {
                        let msg = match gateway.list().await {
                            Ok(records) => ListMsg::CollectionLoaded(records),
                            Err(err) => {
                                store_warn!("list {} failed: {err}", schema.collection);
                                ListMsg::LoadFailed(list_failure_message(schema, &err))
                            }
                        };
                        // A send to a torn-down session is the intended
                        // discard of a stale reply.
                        let _ = tx.send(msg);
                    });
                }
                ListEffect::DeleteRecord { id } => {
                    let gateway = self.gateway.clone();
                    let tx = reply_tx.clone();
                    self.runtime.spawn(async move {
                        let msg = match gateway.delete(&id).await {
                            Ok(()) => ListMsg::DeletionSucceeded(id),
                            Err(err) => {
                                store_warn!("delete {}/{id} failed: {err}", schema.collection);
                                ListMsg::DeletionFailed(delete_failure_message(schema, &err))
                            }
                        };
                        let _ = tx.send(msg);
                    });
                }
            }
        }
    }

    pub(crate) fn run_form(
        &self,
        schema: &'static Schema,
        effects: Vec<FormEffect>,
        reply_tx: &mpsc::Sender<FormMsg>,
        navigator: &Arc<dyn Navigator>,
        scheduled_return: &mut Option<ScheduledReturn>,
    ) {
        for effect in effects {
            match effect {
                FormEffect::LoadRecord { id } => {
                    let gateway = self.gateway.clone();
                    let tx = reply_tx.clone();
                    self.runtime.spawn(async move {
                        let msg = match gateway.get(&id).await {
                            Ok(record) => FormMsg::RecordLoaded(record),
                            Err(err) => {
                                store_warn!("get {}/{id} failed: {err}", schema.collection);
                                FormMsg::RecordLoadFailed(load_failure_message(schema))
                            }
                        };
                        let _ = tx.send(msg);
                    });
                }
                FormEffect::CreateRecord { data } => {
                    let gateway = self.gateway.clone();
                    let tx = reply_tx.clone();
                    self.runtime.spawn(async move {
                        let msg = match gateway.create(&data).await {
                            Ok(record) => FormMsg::SubmitSucceeded(record),
                            Err(err) => {
                                store_warn!("create {} failed: {err}", schema.collection);
                                FormMsg::SubmitFailed(submit_failure_message(schema, false, &err))
                            }
                        };
                        let _ = tx.send(msg);
                    });
                }
                FormEffect::UpdateRecord { id, data } => {
                    let gateway = self.gateway.clone();
                    let tx = reply_tx.clone();
                    self.runtime.spawn(async move {
                        let msg = match gateway.update(&id, &data).await {
                            Ok(record) => FormMsg::SubmitSucceeded(record),
                            Err(err) => {
                                store_warn!("update {}/{id} failed: {err}", schema.collection);
                                FormMsg::SubmitFailed(submit_failure_message(schema, true, &err))
                            }
                        };
                        let _ = tx.send(msg);
                    });
                }
                FormEffect::ScheduleReturn => {
                    let navigator = navigator.clone();
                    let delay = self.return_delay;
                    let handle = self.runtime.spawn(async move {
                        tokio::time::sleep(delay).await;
                        navigator.navigate(schema.list_path);
                    });
                    *scheduled_return = Some(ScheduledReturn { handle });
                }
            }
        }
    }
}

/// Cancellable deferred navigation back to the list view. Dropping it (with
/// its owning session) aborts the timer, so no navigation lands in a
/// torn-down view.
pub struct ScheduledReturn {
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for ScheduledReturn {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn list_failure_message(schema: &Schema, err: &GatewayError) -> String {
    format!("failed to load {}: {err}", schema.plural)
}

fn load_failure_message(schema: &Schema) -> String {
    format!("failed to load {} for editing", schema.label)
}

fn delete_failure_message(schema: &Schema, err: &GatewayError) -> String {
    match err {
        // A structured rejection reason is surfaced verbatim.
        GatewayError::Validation { reason, .. } => reason.clone(),
        _ => format!("failed to delete {}, try again", schema.label),
    }
}

fn submit_failure_message(schema: &Schema, updating: bool, err: &GatewayError) -> String {
    match err {
        GatewayError::Validation { reason, .. } => reason.clone(),
        _ => format!(
            "failed to {} {}, try again",
            if updating { "update" } else { "create" },
            schema.label
        ),
    }
}
