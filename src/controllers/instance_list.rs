use super::Controller;
use crate::api::ResourceKind;

/// Lists the instances of the routed tenant under `instances`
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceListController;

impl Controller for InstanceListController {
    fn name(&self) -> &'static str {
        "InstanceList"
    }

    fn field(&self) -> &'static str {
        "instances"
    }

    fn resource(&self) -> ResourceKind {
        ResourceKind::Instance
    }
}
