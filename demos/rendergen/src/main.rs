//! End-to-end demo: a static metadata snapshot, the template function
//! registry, and a toy upstream map rendered from label queries.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use uuid::Uuid;

use lbgen_model::{Container, Entity, Host, Service};
use lbgen_template::{Registry, StaticProvider, Value};

fn snapshot() -> StaticProvider {
    let services = vec![
        Service::new(
            "web",
            [("proxy.host", "example.com,www.example.com"), ("tier", "front")]
                .into_iter()
                .collect(),
        ),
        Service::new(
            "api",
            [("proxy.host", "api.example.com"), ("tier", "front")]
                .into_iter()
                .collect(),
        ),
        Service::new("db", [("tier", "back")].into_iter().collect()),
    ];

    let containers = vec![
        Container::new("web", [("port", "8080")].into_iter().collect()),
        Container::new("web", [("port", "8081")].into_iter().collect()),
        Container::new("api", [("port", "9000")].into_iter().collect()),
        Container::standalone([("proxy.host", "legacy.example.com")].into_iter().collect()),
    ];

    let hosts = vec![Host::new(
        Uuid::new_v4(),
        [("zone", "eu")].into_iter().collect(),
    )];

    StaticProvider::new()
        .with_services(services)
        .with_containers(containers)
        .with_hosts(hosts)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("registry demo starting");

    let registry = Registry::with_provider(Arc::new(snapshot()));

    let services = registry.call("services", &[])?;
    let front = registry.call(
        "whereLabelEquals",
        &["tier".into(), "front".into(), services.clone()],
    )?;
    info!(count = front.as_entities().map(|c| c.len()).unwrap_or(0), "front tier services");

    // One upstream block per virtual host named in the proxy.host label.
    let vhosts = registry.call(
        "groupByMulti",
        &["proxy.host".into(), ",".into(), services],
    )?;
    if let Value::Groups(groups) = vhosts {
        for (vhost, members) in &groups {
            println!("upstream {vhost} {{");
            for entity in members.iter() {
                if let Entity::Service(svc) = entity {
                    let containers = registry.call("containers", &[])?;
                    let ports = registry.call(
                        "getAllLabelValue",
                        &[svc.name.as_str().into(), "port".into(), ",".into(), containers],
                    )?;
                    for port in ports.as_str_list().unwrap_or(&[]) {
                        println!("    server {}:{port};", svc.name);
                    }
                }
            }
            println!("}}");
        }
    }

    info!("render complete");
    Ok(())
}
