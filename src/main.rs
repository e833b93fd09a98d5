use tracing::{error, info, warn, Instrument};

use early_bird::app_system::{setup_tracing, SessionSystem};
use early_bird::config::AppConfig;
use early_bird::domain::ProductId;

/// Walks one customer through the ordering flow, the way a front end would.
#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    info!("Starting Early Bird");

    let system = SessionSystem::start(&config);
    let client = system.client.clone();

    let span = tracing::info_span!("login");
    let customer = async {
        if let Err(e) = client.login("38429734".to_string()).await {
            warn!(error = %e, "Login rejected");
        }
        client.login("38429730".to_string()).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(customer_name = %customer.name, past_orders = customer.past_orders, "Welcome back");

    let span = tracing::info_span!("order_building");
    let summary = async {
        let light = client.browse(true).await?;
        info!(count = light.len(), "Low calorie products");

        let view = client.select_product(ProductId(1)).await?;
        info!(base = %view.base.name, lines = view.lines.len(), "Order started");

        client.add_item(ProductId(7), 2).await?;
        let view = client.remove_one(ProductId(7)).await?;
        info!(
            total_price = %view.totals.total_price,
            total_calories = view.totals.total_calories,
            "Order updated"
        );

        client.proceed_to_checkout().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for line in &summary.lines {
        info!(product = %line.product.name, quantity = line.quantity, "Order line");
    }

    let span = tracing::info_span!("checkout");
    let reorder = async {
        let receipt = client.confirm(true).await?;
        if let Some(blueprint) = &receipt.blueprint {
            info!(blueprint_name = %blueprint.name, "Blueprint saved");
        }

        let blueprints = client.list_blueprints().await?;
        let latest = blueprints.len().saturating_sub(1);
        client.reorder_blueprint(latest).await
    }
    .instrument(span)
    .await;

    match reorder {
        Ok(view) => info!(total_price = %view.totals.total_price, "Reorder ready"),
        Err(e) => error!(error = %e, "Reorder failed"),
    }

    client.logout().await.map_err(|e| e.to_string())?;
    drop(client);

    system.shutdown().await?;

    info!("Early Bird finished");
    Ok(())
}
