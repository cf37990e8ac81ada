//! Browse the promotions feed.
//!
//! Fetches the whole feed in one request, applies the search and
//! category filter locally, and prints one line per matching product.
//! A feed failure is a single blocking error; no partial list is shown.

use trolley_core::category::CATEGORY_TREE;
use trolley_core::filter::{CategorySelection, ProductFilter};
use trolley_core::product::Product;
use trolley_feed::{FeedClient, FeedError};

use crate::config::Config;

/// Fetch, filter and print the promotions feed.
///
/// # Errors
///
/// Returns `FeedError` if the feed cannot be fetched.
pub async fn run(
    config: &Config,
    search: Option<String>,
    main: Option<String>,
    sub: Option<String>,
) -> Result<(), FeedError> {
    let client = FeedClient::new(config.feed_url.clone());
    let products = client.fetch_products().await?;

    let filter = ProductFilter {
        search: search.unwrap_or_default(),
        main: CategorySelection::from(main),
        sub: CategorySelection::from(sub),
    };
    let matching = filter.apply(&products);

    for product in &matching {
        println!("{}", format_product(product));
    }
    println!();
    println!("{} of {} products on promotion", matching.len(), products.len());
    Ok(())
}

/// Print the category tree used for filtering.
pub fn categories() {
    for (main, subs) in CATEGORY_TREE {
        println!("{main}");
        for sub in *subs {
            println!("  {sub}");
        }
    }
}

fn format_product(product: &Product) -> String {
    let mut line = format!("{:>9}  {}", product.price, product.name);
    if let Some(old) = &product.old {
        line.push_str(&format!("  (was {old})"));
    }
    line.push_str(&format!("  [{}]", product.category));
    if let Some(promotion) = &product.promotion {
        line.push_str(&format!("  {promotion}"));
    }
    line
}
