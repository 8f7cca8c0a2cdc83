//! Shared fixture types and registry builders for the integration suites.

use std::sync::Arc;

use default_value::{
    ContainerCreate, DefaultValue, ServiceContainer, ServiceRegistry, TypeEntry, TypeRegistry,
};

/// Constructible with zero arguments.
#[derive(Debug, Default, PartialEq)]
pub struct Widget {
    pub label: String,
    pub enabled: bool,
}

/// Constructor requires one parameter; no factory strategies.
#[derive(Debug, PartialEq)]
pub struct ApiClient {
    pub endpoint: String,
}

/// Constructor requires two parameters, but the type is container-aware.
#[derive(Debug, PartialEq)]
pub struct AuditLog {
    pub sink: String,
}

impl ContainerCreate for AuditLog {
    fn create(container: &dyn ServiceRegistry) -> Self {
        let sink = container
            .lookup("audit_sink")
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_else(|| "stderr".to_string());
        Self { sink }
    }
}

/// Constructor requires parameters, but a zero-argument `create()` exists.
#[derive(Debug, PartialEq)]
pub struct ReportBuilder {
    pub format: String,
}

impl ReportBuilder {
    pub fn create() -> Self {
        Self {
            format: "pdf".to_string(),
        }
    }
}

pub const WIDGET: &str = "app::widgets::Widget";
pub const RENDERER: &str = "app::traits::Renderer";
pub const API_CLIENT: &str = "app::http::ApiClient";
pub const AUDIT_LOG: &str = "app::audit::AuditLog";
pub const REPORT_BUILDER: &str = "app::reports::ReportBuilder";
pub const MISSING: &str = "app::widgets::Gone";

/// Registry covering every fixture shape the suites exercise.
pub fn fixture_registry() -> Arc<TypeRegistry> {
    let registry = Arc::new(TypeRegistry::new());
    registry.register(TypeEntry::constructible::<Widget>(WIDGET));
    registry.register(TypeEntry::not_instantiable(RENDERER));
    registry.register(TypeEntry::requires_parameters(API_CLIENT, 1));
    registry.register(TypeEntry::requires_parameters(AUDIT_LOG, 2).container_aware::<AuditLog>());
    registry.register(
        TypeEntry::requires_parameters(REPORT_BUILDER, 3)
            .with_create(ReportBuilder::create),
    );
    registry
}

/// Service container with the identifiers the suites look up.
pub fn fixture_container() -> Arc<ServiceContainer> {
    let container = Arc::new(ServiceContainer::new());
    container.register("current_user", DefaultValue::String("admin".to_string()));
    container.register("audit_sink", DefaultValue::String("syslog".to_string()));
    container
}
