//! Request validation example
//!
//! Validates a few "create listing" requests the way a handler would:
//! every argument is checked, all problems are reported at once, and the
//! address block uses fail-fast checks because only the first problem
//! matters there.
//!
//! Run with `cargo run --example request_validation --features tracing` to
//! see failed checks logged.

use arg_check::mx::StaticMxLookup;
use arg_check::prelude::*;

// Raw input, as it would arrive from a form or JSON body
struct CreateListing {
    title: String,
    subtitle: String,
    contact: String,
    website: String,
    price_cents: i64,
    quantity: u32,
    tags: Vec<String>,
    country: String,
    city: String,
}

struct Listing {
    title: String,
    contact: String,
    price_cents: i64,
    quantity: u32,
    tags: Vec<String>,
}

fn validate_listing(
    req: CreateListing,
    dns: &StaticMxLookup,
) -> Result<Listing, ArgumentErrors> {
    let title = string(req.title).is_title();
    let subtitle = string(req.subtitle).is_subtitle();
    let contact = string(req.contact).is_email_with_existing_mx(dns);
    let website = string(req.website).is_url_or_empty();
    let price = number(req.price_cents).gt(0).lte(10_000_000);
    let quantity = number(req.quantity).default(1).lte(1_000);
    let tags = list(req.tags).len_lte(5).each_populated();

    all_errors(&[&title, &subtitle, &contact, &website, &price, &quantity, &tags])?;

    Ok(Listing {
        title: title.into_value(),
        contact: contact.into_value(),
        price_cents: price.into_value(),
        quantity: quantity.into_value(),
        tags: tags.into_value(),
    })
}

fn validate_address(country: &str, city: &str) -> Result<(), FirstError> {
    FailFast::new()
        .add(country.is_empty(), "country is required")
        .add(country.len() != 2, format_args!("unknown country code {:?}", country))
        .add(city.is_empty(), "city is required")
        .into_result()
}

fn report(name: &str, req: CreateListing, dns: &StaticMxLookup) {
    println!("--- {} ---", name);
    let address = validate_address(&req.country, &req.city);
    match validate_listing(req, dns) {
        Ok(listing) => {
            println!("accepted: {:?}", listing.title);
            println!("  contact:  {}", listing.contact);
            println!(
                "  price:    {}.{:02} x {}",
                listing.price_cents / 100,
                listing.price_cents % 100,
                listing.quantity
            );
            println!("  tags:     {}", listing.tags.join(", "));
        }
        Err(errors) => {
            println!("rejected with {} problem(s):", errors.len());
            for message in &errors {
                println!("  - {}", message);
            }
        }
    }
    if let Err(err) = address {
        println!("address: {}", err);
    }
    println!();
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let dns = StaticMxLookup::new(["example.com", "shop.example.org"]);

    report(
        "good request",
        CreateListing {
            title: "Vintage desk lamp".to_string(),
            subtitle: String::new(),
            contact: "seller@example.com".to_string(),
            website: "https://shop.example.org/lamp".to_string(),
            price_cents: 4_500,
            quantity: 0,
            tags: vec!["lighting".to_string(), "vintage".to_string()],
            country: "NL".to_string(),
            city: "Utrecht".to_string(),
        },
        &dns,
    );

    report(
        "bad request",
        CreateListing {
            title: String::new(),
            subtitle: "x".repeat(200),
            contact: "seller@nowhere.test".to_string(),
            website: "shop.example.org".to_string(),
            price_cents: -1,
            quantity: 5_000,
            tags: vec![String::new(), "ok".to_string(), String::new()],
            country: String::new(),
            city: String::new(),
        },
        &dns,
    );
}
