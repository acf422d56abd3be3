use super::Controller;
use crate::api::ResourceKind;

/// Lists the clusters of the routed tenant under `clusters`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterListController;

impl Controller for ClusterListController {
    fn name(&self) -> &'static str {
        "ClusterList"
    }

    fn field(&self) -> &'static str {
        "clusters"
    }

    fn resource(&self) -> ResourceKind {
        ResourceKind::Cluster
    }
}
