//! View controllers
//!
//! A controller reads the tenant from the route context, starts a fetch on
//! the resource client and binds the result to its view field. Each
//! activation runs as its own task and owns its own state channel, so a late
//! response can only ever land in the view that asked for it.

pub mod cluster_list;
pub mod instance_list;

use std::fmt;
use std::future::Future;

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::api::{ApiError, Collection, ResourceClient, ResourceKind};
use crate::error::{RainbowError, Result};
use crate::routing::RouteContext;

pub use cluster_list::ClusterListController;
pub use instance_list::InstanceListController;

/// Observable state of a view field
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    AwaitingData,
    DataBound(Collection),
}

impl ViewState {
    pub fn is_bound(&self) -> bool {
        matches!(self, ViewState::DataBound(_))
    }

    pub fn data(&self) -> Option<&Collection> {
        match self {
            ViewState::DataBound(data) => Some(data),
            ViewState::AwaitingData => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::AwaitingData => "awaiting-data",
            ViewState::DataBound(_) => "data-bound",
        }
    }
}

pub trait Controller: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// View field the fetched collection is bound to
    fn field(&self) -> &'static str;

    fn resource(&self) -> ResourceKind;

    /// Start fetching this controller's collection for the routed tenant
    ///
    /// Must be called from within a tokio runtime.
    fn activate(&self, context: &RouteContext, client: &ResourceClient) -> Result<Activation> {
        let tenant = context
            .tenant_id()
            .ok_or_else(|| RainbowError::MissingTenant(context.path().to_string()))?
            .to_string();
        let kind = self.resource();
        let client = client.clone();

        debug!("{} activated for tenant {}", self.name(), tenant);
        Ok(Activation::spawn(
            self.name(),
            self.field(),
            context.path(),
            async move { client.fetch(kind, &tenant).await },
        ))
    }
}

/// A running controller activation
#[derive(Debug)]
pub struct Activation {
    controller: &'static str,
    field: &'static str,
    path: String,
    state: watch::Receiver<ViewState>,
    task: JoinHandle<std::result::Result<(), ApiError>>,
}

impl Activation {
    /// Spawn the fetch and bind its result once it arrives
    ///
    /// A failed fetch leaves the view awaiting data; the failure is only
    /// reported through [`Activation::settle`].
    pub fn spawn<F>(controller: &'static str, field: &'static str, path: &str, fetch: F) -> Self
    where
        F: Future<Output = std::result::Result<Collection, ApiError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(ViewState::AwaitingData);
        let task_path = path.to_string();

        let task = tokio::spawn(async move {
            match fetch.await {
                Ok(collection) => {
                    debug!("{} bound {} entries for {}", field, collection.len(), task_path);
                    tx.send_replace(ViewState::DataBound(collection));
                    Ok(())
                }
                Err(e) => {
                    warn!("Fetching {} for {} failed: {}", field, task_path, e);
                    Err(e)
                }
            }
        });

        Self {
            controller,
            field,
            path: path.to_string(),
            state: rx,
            task,
        }
    }

    pub fn controller(&self) -> &'static str {
        self.controller
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Snapshot of the current view state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.state.borrow().is_bound()
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }

    /// Abort the in-flight fetch; the view stays awaiting data
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait until data is bound
    ///
    /// Returns `None` if the fetch failed or was cancelled.
    pub async fn bound(&mut self) -> Option<Collection> {
        let state = self.state.wait_for(ViewState::is_bound).await.ok()?;
        state.data().cloned()
    }

    /// Wait for the fetch task to finish and return the final view state
    pub async fn settle(self) -> Result<ViewState> {
        match self.task.await {
            Ok(Ok(())) => Ok(self.state.borrow().clone()),
            Ok(Err(e)) => Err(e.into()),
            Err(e) if e.is_cancelled() => Err(RainbowError::Superseded(self.path)),
            Err(_) => Err(RainbowError::TaskFailed(self.path)),
        }
    }
}
