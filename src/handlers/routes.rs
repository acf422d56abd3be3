use colored::Colorize;
use serde_json::json;

use crate::routing::Router;

/// Print the route table and its fallback
pub fn handle_routes(router: &Router, json: bool) -> crate::Result<()> {
    if json {
        let routes: Vec<_> = router
            .routes()
            .iter()
            .map(|route| {
                json!({
                    "pattern": route.pattern().as_str(),
                    "template": route.template(),
                    "controller": route.controller().name(),
                    "field": route.controller().field(),
                    "resource": route.controller().resource(),
                })
            })
            .collect();
        let table = json!({ "routes": routes, "fallback": router.fallback() });
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<24} {:<16} {:<14} {}",
            "PATTERN", "TEMPLATE", "CONTROLLER", "RESOURCE"
        )
        .bold()
    );
    for route in router.routes() {
        println!(
            "{:<24} {:<16} {:<14} {}",
            route.pattern().as_str().cyan(),
            route.template(),
            route.controller().name(),
            route.controller().resource()
        );
    }
    println!(
        "{:<24} redirect to {}",
        "otherwise".dimmed(),
        router.fallback().yellow()
    );
    Ok(())
}
