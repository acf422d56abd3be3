//! Navigation between views
//!
//! The navigator resolves a path, activates the matching controller and
//! supersedes whatever activation was still in flight, so rapid navigation
//! never lets an earlier tenant's response reach the current view.

use log::{debug, info};
use tokio::task::AbortHandle;

use crate::api::ResourceClient;
use crate::config::types::Config;
use crate::controllers::{Activation, ViewState};
use crate::error::Result;
use crate::routing::{default_router, Resolution, RouteContext, RouteParams, Router};

/// What a navigation produced: the location, its template and the running
/// controller activation
#[derive(Debug)]
pub struct View {
    context: RouteContext,
    template: Option<String>,
    field: Option<&'static str>,
    activation: Option<Activation>,
    settled: ViewState,
}

impl View {
    fn routed(context: RouteContext, template: &str, activation: Activation) -> Self {
        Self {
            context,
            template: Some(template.to_string()),
            field: Some(activation.field()),
            activation: Some(activation),
            settled: ViewState::AwaitingData,
        }
    }

    fn empty(context: RouteContext) -> Self {
        Self {
            context,
            template: None,
            field: None,
            activation: None,
            settled: ViewState::AwaitingData,
        }
    }

    pub fn context(&self) -> &RouteContext {
        &self.context
    }

    /// Template to render; `None` when no route matched
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Name of the bound field, if a controller is attached
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_none()
    }

    pub fn activation(&self) -> Option<&Activation> {
        self.activation.as_ref()
    }

    pub fn activation_mut(&mut self) -> Option<&mut Activation> {
        self.activation.as_mut()
    }

    pub fn state(&self) -> ViewState {
        match &self.activation {
            Some(activation) => activation.state(),
            None => self.settled.clone(),
        }
    }

    /// Wait for the controller's fetch to finish
    ///
    /// Empty views settle immediately as awaiting data.
    pub async fn settle(&mut self) -> Result<ViewState> {
        if let Some(activation) = self.activation.take() {
            self.settled = activation.settle().await?;
        }
        Ok(self.settled.clone())
    }
}

/// Drives route resolution and controller activation
#[derive(Debug)]
pub struct Navigator {
    router: Router,
    client: ResourceClient,
    current: Option<AbortHandle>,
}

impl Navigator {
    pub fn new(router: Router, client: ResourceClient) -> Self {
        Self {
            router,
            client,
            current: None,
        }
    }

    /// Navigator over the default route table and the configured API
    pub fn from_config(config: &Config) -> Result<Self> {
        let router = default_router(&config.routes.fallback)?;
        let client = ResourceClient::from_config(&config.api)?;
        Ok(Self::new(router, client))
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// Navigate to `path`, superseding the previous activation
    ///
    /// An unmatched path follows the fallback redirect once. When the redirect
    /// target matches nothing either, the result is an empty view and no
    /// request is made.
    pub fn navigate(&mut self, path: &str) -> Result<View> {
        self.supersede();

        let (context, route) = match self.router.resolve(path) {
            Resolution::Matched { route, context } => (context, Some(route)),
            Resolution::Fallback { path, redirect_to } => {
                info!("No route for {}, redirecting to {}", path, redirect_to);
                match self.router.resolve(redirect_to) {
                    Resolution::Matched { route, context } => (context, Some(route)),
                    Resolution::Fallback { path, .. } => {
                        debug!("Redirect target {} matches no route either", path);
                        (RouteContext::new(path, RouteParams::new()), None)
                    }
                }
            }
        };

        let Some(route) = route else {
            return Ok(View::empty(context));
        };

        let activation = route.controller().activate(&context, &self.client)?;
        self.current = Some(activation.abort_handle());
        Ok(View::routed(context, route.template(), activation))
    }

    fn supersede(&mut self) {
        if let Some(previous) = self.current.take() {
            if !previous.is_finished() {
                debug!("Cancelling in-flight fetch of the previous view");
            }
            previous.abort();
        }
    }
}
