use business::domain::price::model::PriceView;
use business::domain::price::use_cases::get_all::GetAllPricesParams;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::GetAllProductsParams;

use crate::setup::Services;

const PRODUCT_SAMPLE: usize = 5;
const LATEST_PRICES: usize = 10;

pub async fn check(services: &Services) -> anyhow::Result<()> {
    let stats = services.dashboard.execute().await?;
    let list = services.shopping_list.execute().await?;
    let products = services
        .products
        .execute(GetAllProductsParams::default())
        .await?;
    let prices = services
        .prices
        .execute(GetAllPricesParams::default())
        .await?;

    println!("distributors:  {}", stats.distributors);
    println!("products:      {}", stats.products);
    println!("prices:        {}", stats.prices);
    println!("shopping list: {}", list.items.len());

    println!("\nproducts:");
    for product in products.iter().take(PRODUCT_SAMPLE) {
        println!("  {}", product_line(product));
    }

    println!("\nlatest prices:");
    for view in prices.iter().take(LATEST_PRICES) {
        println!("  {}", price_line(view));
    }

    Ok(())
}

fn product_line(product: &Product) -> String {
    match &product.ean {
        Some(ean) => format!("{} ({ean})", product.name),
        None => product.name.clone(),
    }
}

fn price_line(view: &PriceView) -> String {
    format!(
        "{} | {} | R$ {:.2} | {}",
        view.price.recorded_at.format("%Y-%m-%d %H:%M"),
        view.product_name.as_deref().unwrap_or("?"),
        view.price.price,
        view.distributor_name.as_deref().unwrap_or("?"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::price::model::Price;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn should_format_price_line_with_names() {
        let view = PriceView {
            price: Price {
                id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                distributor_id: Uuid::new_v4(),
                price: 12.5,
                min_quantity: 1,
                validity: None,
                recorded_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            },
            product_name: Some("Dipirona 500mg".to_string()),
            distributor_name: None,
        };

        assert_eq!(
            price_line(&view),
            "2024-05-01 09:30 | Dipirona 500mg | R$ 12.50 | ?"
        );
    }
}
