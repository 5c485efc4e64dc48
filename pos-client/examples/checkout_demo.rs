// pos-client/examples/checkout_demo.rs
// End-to-end demo: login, browse the catalog, ring up a sale.

use pos_client::{ApiClient, CheckoutFlow, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <base_url> <email> <password>", args[0]);
        println!(
            "  Example: {} http://localhost:8000/api cashier@example.com secret",
            args[0]
        );
        return Ok(());
    }

    let config = ClientConfig::new(&args[1]).with_data_dir("./pos-data");
    let client = ApiClient::new(&config);

    if !client.session().is_authenticated() {
        if !client.login(&args[2], &args[3]).await? {
            anyhow::bail!("invalid credentials");
        }
    }

    if !client.session().has_permission("pos_access") {
        anyhow::bail!("this account cannot operate the register");
    }

    let products = client.fetch_products().await?;
    tracing::info!(count = products.len(), "Catalog loaded");
    let Some(first) = products.first() else {
        anyhow::bail!("catalog is empty");
    };

    let mut flow = CheckoutFlow::new(&client);
    flow.cart_mut().add_product(first.clone());
    flow.cart_mut().add_product(first.clone());
    tracing::info!(
        total = %shared::money::format_amount(flow.cart().total()),
        "Cart ready"
    );

    let receipt = flow.submit("cash").await?;
    tracing::info!(
        receipt = %receipt.sale.receipt_number,
        total = %shared::money::format_amount(receipt.sale.total_amount),
        "Sale recorded"
    );

    if receipt.invalidate.products {
        let refreshed = client.fetch_products().await?;
        tracing::info!(count = refreshed.len(), "Catalog refetched");
    }

    Ok(())
}
