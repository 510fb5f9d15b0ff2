use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dotenv::dotenv;

use nutriscan::analysis::determine_suitable_storage;
use nutriscan::{FoodConfig, Product, ProductAggregator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Look up packaged food products and their nutrition profile", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Language hint for translated text fields
    #[arg(long, default_value = "en", global = true)]
    lang: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a single product by its barcode
    Barcode { code: String },
    /// Search products by name
    Search {
        query: String,
        #[arg(long, default_value = "1")]
        page: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = FoodConfig::from_env();
    let aggregator = ProductAggregator::new(&config);

    match args.command {
        Command::Barcode { code } => match aggregator.product_by_barcode(&code, &args.lang).await? {
            Some(product) => print_product(&product),
            None => println!("{}", format!("No product found for barcode {}", code).yellow()),
        },
        Command::Search { query, page } => {
            let result = aggregator.search_products(&query, &args.lang, page).await?;
            println!(
                "{}",
                format!("{} result(s) for '{}' (page {})", result.count, query, result.page).bold()
            );
            for product in &result.products {
                print_product(product);
            }
        }
    }

    Ok(())
}

fn print_product(product: &Product) {
    println!();
    println!("{} {}", "▶".green(), product.product_name.bold());
    if let Some(grade) = &product.nutrition_grades {
        println!("  Nutri-score: {}", grade.to_uppercase());
    }

    let n = &product.nutriments;
    let fields = [
        ("energy", n.energy_100g),
        ("carbohydrates", n.carbohydrates_100g),
        ("sugars", n.sugars_100g),
        ("fat", n.fat_100g),
        ("proteins", n.proteins_100g),
        ("salt", n.salt_100g),
        ("fiber", n.fiber_100g),
    ];
    for (label, value) in fields {
        // Unknown values stay hidden; only the source saying zero prints zero.
        if let Some(v) = value {
            println!("  {}: {:.1} /100g", label, v);
        }
    }

    if let Some(ingredients) = &product.ingredients_text {
        println!("  Ingredients: {}", ingredients);
    }
    if !product.allergens_tags.is_empty() {
        println!("  Allergens: {}", product.allergens_tags.join(", ").red());
    }
    if !product.health_warnings.is_empty() {
        println!("  Warnings: {}", product.health_warnings.join(", ").red());
    }

    let storage = determine_suitable_storage(product);
    println!("  Storage: {}", storage.join(", ").cyan());
}
