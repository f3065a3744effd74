//! Example creating a payment order
//!
//! Reads `PAYRIFF_SECRET_KEY` and `PAYRIFF_CALLBACK_URL` from the environment
//! and prints the payment page URL the customer should be redirected to.

use payriff::{Client, Config, CreateOrderRequest, Currency, Language, Operation, Result};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::new(Config::from_env().with_language(Language::En))?;

    let amount = Decimal::new(1099, 2);
    let request = CreateOrderRequest::new(amount, "Premium plan", Operation::Purchase)
        .with_currency(Currency::Azn)
        .with_card_save(true);

    let response = client.create_order(request).await?;

    if !client.is_successful(&response.code) {
        println!("Order rejected: {} ({})", response.message, response.code);
        return Ok(());
    }

    match response.payload {
        Some(order) => {
            println!("Order {} created", order.order_id);
            println!("  Transaction: {}", order.transaction_id);
            println!("  Payment page: {}", order.payment_url);
        }
        None => println!("Order created but the gateway returned no payload"),
    }

    Ok(())
}
