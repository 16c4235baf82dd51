//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `catalog_core` linkage.
//! - Seed a few categories and print a filtered listing for quick local
//!   sanity checks.

use catalog_core::{
    CategoryInMemoryRepository, CategoryInput, CategoryService, SearchRequest,
};

fn main() {
    println!("catalog_core ping={}", catalog_core::ping());
    println!("catalog_core version={}", catalog_core::core_version());

    let mut service = CategoryService::new(CategoryInMemoryRepository::new());
    for name in ["Movie", "Series", "Documentary"] {
        let input = CategoryInput {
            name: name.to_string(),
            ..CategoryInput::default()
        };
        if let Err(error) = service.create_category(input) {
            eprintln!("catalog_cli seed failed: {error}");
            std::process::exit(1);
        }
    }

    let mut args = std::env::args().skip(1);
    let request = SearchRequest {
        filter: args.next(),
        order_by_field: args.next().or_else(|| Some("name".to_string())),
        ..SearchRequest::default()
    };
    let page = service.list_categories(request);
    match serde_json::to_string_pretty(&page) {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => {
            eprintln!("catalog_cli render failed: {error}");
            std::process::exit(1);
        }
    }
}
