//! Example walking an order through its lifecycle
//!
//! Usage: `cargo run --example order_lifecycle -- <order-id> [capture|refund|charge] [amount]`
//!
//! Prints the order state. `capture` completes a pre-authorized order,
//! `refund` refunds it and `charge` bills the card saved on the order again.

use payriff::{
    AutoPayRequest, Client, CompleteRequest, Config, Operation, RefundRequest, Result, Status,
};
use rust_decimal::Decimal;
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(order_id) = args.next() else {
        eprintln!("usage: order_lifecycle <order-id> [capture|refund|charge] [amount]");
        return Ok(());
    };
    let action = args.next();
    let amount = args.next().and_then(|value| Decimal::from_str(&value).ok());

    let client = Client::new(Config::from_env())?;

    let response = client.get_order_info(&order_id).await?;
    let Some(order) = response.payload else {
        println!("No order info: {} ({})", response.message, response.code);
        return Ok(());
    };

    println!(
        "Order {}: {:?}, {} {}",
        order.order_id,
        order.payment_status,
        order.amount,
        order.currency_type.as_str()
    );
    for transaction in &order.transactions {
        println!(
            "  {} {:?} via {} ({})",
            transaction.uuid,
            transaction.status,
            transaction.channel,
            transaction.card_details.masked_pan
        );
    }

    let amount = amount.unwrap_or(order.amount);
    match action.as_deref() {
        Some("capture") if order.payment_status == Status::PreauthApproved => {
            client
                .complete(CompleteRequest::new(amount, order.order_id.as_str()))
                .await?;
            println!("Capture of {} requested", amount);
        }
        Some("refund") => {
            let refund = client
                .refund(RefundRequest::new(amount, order.order_id.as_str()))
                .await?;
            println!("Refund: {} ({})", refund.message, refund.code);
            if let Some(payload) = refund.payload {
                println!("  {}", payload);
            }
        }
        Some("charge") => {
            let saved_card = order
                .transactions
                .iter()
                .find_map(|transaction| transaction.card_uuid.clone());
            let Some(card_uuid) = saved_card else {
                println!("Order {} has no saved card", order.order_id);
                return Ok(());
            };
            let charge = client
                .auto_pay(AutoPayRequest::new(
                    card_uuid,
                    amount,
                    "Recurring charge",
                    Operation::Purchase,
                ))
                .await?;
            println!("Auto-pay: {} ({})", charge.message, charge.code);
        }
        Some(other) => println!("Nothing to do for '{}'", other),
        None => {}
    }

    Ok(())
}
