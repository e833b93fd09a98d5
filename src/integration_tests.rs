#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tokio::sync::mpsc;

    use crate::app_system::SessionSystem;
    use crate::clients::SessionClient;
    use crate::config::AppConfig;
    use crate::domain::{Customer, ProductId};
    use crate::error::SessionError;
    use crate::identity::IdentityError;
    use crate::messages::SessionRequest;
    use crate::order::OrderError;
    use crate::session::SessionState;

    fn lines(view_lines: &[crate::domain::OrderLine]) -> Vec<(u32, u32)> {
        view_lines
            .iter()
            .map(|l| (l.product.id.0, l.quantity))
            .collect()
    }

    #[tokio::test]
    async fn test_order_flow_through_actor() -> Result<(), Box<dyn std::error::Error>> {
        let system = SessionSystem::start(&AppConfig::default());
        let client = system.client.clone();

        let err = client.login("38429734".to_string()).await.unwrap_err();
        assert_eq!(
            err,
            SessionError::Identity(IdentityError::InvalidChecksum("38429734".to_string()))
        );

        let customer = client.login("38429730".to_string()).await?;
        assert_eq!(customer, Customer::new("Anna Meier", 12));

        let light: Vec<_> = client.browse(true).await?.into_iter().map(|p| p.id.0).collect();
        assert_eq!(light, vec![3, 4, 5, 6, 7]);

        let view = client.select_product(ProductId(4)).await?;
        assert!(view.lines.is_empty());
        assert_eq!(
            client.proceed_to_checkout().await.unwrap_err(),
            SessionError::Order(OrderError::EmptyOrder)
        );

        client.add_item(ProductId(4), 1).await?;
        client.add_item(ProductId(5), 1).await?;
        let view = client.add_item(ProductId(4), 1).await?;
        assert_eq!(lines(&view.lines), vec![(4, 2), (5, 1)]);
        assert_eq!(view.totals.total_price, Decimal::new(790, 2));
        assert_eq!(view.totals.total_calories, 505);

        let summary = client.proceed_to_checkout().await?;
        assert_eq!(summary.customer.name, "Anna Meier");

        let receipt = client.confirm(true).await?;
        assert!(receipt.blueprint.is_some());
        assert!(matches!(client.snapshot().await?, SessionState::Browsing { .. }));

        let blueprints = client.list_blueprints().await?;
        assert_eq!(blueprints.len(), 1);

        let view = client.reorder_blueprint(0).await?;
        assert_eq!(view.base.id, ProductId(4));
        assert_eq!(lines(&view.lines), vec![(4, 2), (5, 1)]);

        client.logout().await?;
        assert_eq!(client.snapshot().await?, SessionState::LoggedOut);

        drop(client);
        system.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_blueprints_survive_restart() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let config = AppConfig {
            data_dir: Some(tmp.path().to_path_buf()),
            ..AppConfig::default()
        };

        let system = SessionSystem::start(&config);
        system.client.login("12345678".to_string()).await?;
        system.client.select_product(ProductId(2)).await?;
        system.client.add_item(ProductId(5), 2).await?;
        system.client.proceed_to_checkout().await?;
        system.client.confirm(true).await?;
        system.shutdown().await?;

        let system = SessionSystem::start(&config);
        system.client.login("12345678".to_string()).await?;
        let view = system.client.reorder_blueprint(0).await?;
        assert_eq!(lines(&view.lines), vec![(2, 1), (5, 2)]);
        system.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_requests_after_shutdown_fail() {
        let system = SessionSystem::start(&AppConfig::default());
        let client = system.client.clone();
        system.shutdown().await.unwrap();

        assert!(matches!(
            client.browse(false).await,
            Err(SessionError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_client_sends_typed_requests() {
        // The client only talks to a channel, so a test can play the actor.
        let (sender, mut receiver) = mpsc::channel(4);
        let client = SessionClient::new(sender);

        let task = tokio::spawn(async move { client.add_item(ProductId(7), 3).await });

        match receiver.recv().await {
            Some(SessionRequest::AddItem {
                id,
                quantity,
                respond_to,
            }) => {
                assert_eq!(id, ProductId(7));
                assert_eq!(quantity, 3);
                respond_to.send(Err(SessionError::NotLoggedIn)).unwrap();
            }
            other => panic!("Unexpected request: {:?}", other),
        }

        assert_eq!(task.await.unwrap(), Err(SessionError::NotLoggedIn));
    }
}
