//! Demo CLI for the discovery and directory engines.
//!
//! Runs ranked discovery queries, vendor-directory filters and
//! market-registry filters against the seeded console fixtures, printing
//! text tables or JSON.
//!
//! Run with: cargo run -p demo-data -- discover "global"

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use demo_data::{
    demo_markets, demo_registry, demo_vendors, MarketSortKey, VendorSortKey, VendorStatus,
};
use souk::{
    filter_entities, rank, sort_entities, FieldFilter, RangeFilter, SortDirection, TextQuery,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Regional HUB demo fixtures")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the discovery catalog against a query, grouped by category
    Discover {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Filter and sort the vendor directory
    Vendors {
        /// Free-text search (tokenized; every term must match a field)
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        /// Status token (ACTIVE, PENDING_APPROVAL, INACTIVE, UNDER_REVIEW)
        #[arg(long)]
        status: Option<String>,
        /// Keep only vendors with outstanding dues
        #[arg(long)]
        dues_only: bool,
        /// Sort key: name, city, status, dues, rating
        #[arg(long, default_value = "name")]
        sort: String,
        /// Sort direction: asc or desc
        #[arg(long, default_value = "asc")]
        direction: String,
        #[arg(long)]
        json: bool,
    },
    /// Filter and sort the market registry
    Markets {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        ownership: Option<String>,
        #[arg(long, default_value_t = 1800)]
        year_start: i64,
        #[arg(long, default_value_t = 2025)]
        year_end: i64,
        /// Sort key: name, capacity, date
        #[arg(long, default_value = "name")]
        sort: String,
        #[arg(long, default_value = "asc")]
        direction: String,
        #[arg(long)]
        json: bool,
    },
    /// Print a fixture set as JSON
    Dump {
        #[arg(value_enum)]
        set: FixtureSet,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FixtureSet {
    Registry,
    Vendors,
    Markets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Args::parse().command {
        Command::Discover { query, json } => discover(&query, json),
        Command::Vendors {
            search,
            category,
            status,
            dues_only,
            sort,
            direction,
            json,
        } => vendors(&search, category, status, dues_only, &sort, &direction, json),
        Command::Markets {
            search,
            kind,
            ownership,
            year_start,
            year_end,
            sort,
            direction,
            json,
        } => markets(&search, kind, ownership, year_start, year_end, &sort, &direction, json),
        Command::Dump { set } => dump(set),
    }
}

fn discover(query: &str, json: bool) -> Result<()> {
    let groups = rank(query, &demo_registry());
    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }
    if groups.is_empty() {
        println!("no matches");
        return Ok(());
    }
    for group in &groups {
        println!("{} -> {}", group.category, group.target);
        for item in &group.items {
            let badge = if item.is_exact() { "  [exact]" } else { "" };
            println!(
                "  {:<28} {:<8} score {:.1}{}",
                item.record.name, item.record.id, item.score, badge
            );
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn vendors(
    search: &str,
    category: Option<String>,
    status: Option<String>,
    dues_only: bool,
    sort: &str,
    direction: &str,
    json: bool,
) -> Result<()> {
    let all = demo_vendors();
    let query = TextQuery::parse(search);
    let category = category.map_or(FieldFilter::All, FieldFilter::Only);
    let status = match status {
        Some(token) => FieldFilter::Only(parse_status(&token)?),
        None => FieldFilter::All,
    };
    let sort_key = parse_vendor_sort(sort)?;
    let direction: SortDirection = direction.parse()?;

    let mut rows = filter_entities(&all, &query, |v| {
        category.admits(&v.category)
            && status.admits(&v.status)
            && (!dues_only || v.outstanding_dues() > 0)
    });
    sort_entities(&mut rows, direction, |v| v.sort_value(sort_key));

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for vendor in rows {
        println!(
            "{:<6} {:<24} {:<12} {:<18} dues {:>7} rating {:.1}",
            vendor.id,
            vendor.name,
            vendor.city,
            vendor.status.as_str(),
            vendor.outstanding_dues(),
            vendor.rating
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn markets(
    search: &str,
    kind: Option<String>,
    ownership: Option<String>,
    year_start: i64,
    year_end: i64,
    sort: &str,
    direction: &str,
    json: bool,
) -> Result<()> {
    let all = demo_markets();
    let query = TextQuery::parse(search);
    let kind = kind.map_or(FieldFilter::All, FieldFilter::Only);
    let ownership = ownership.map_or(FieldFilter::All, FieldFilter::Only);
    let window = RangeFilter::new(year_start, year_end);
    let sort_key = parse_market_sort(sort)?;
    let direction: SortDirection = direction.parse()?;

    let mut rows = filter_entities(&all, &query, |m| {
        kind.admits(&m.kind)
            && ownership.admits(&m.ownership)
            && window.contains(m.established_year())
    });
    sort_entities(&mut rows, direction, |m| m.sort_value(sort_key));

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for market in rows {
        println!(
            "{:<24} {:<10} {:<10} {:<12} est. {} capacity {}",
            market.name,
            market.city,
            market.kind,
            market.ownership,
            market.established_year(),
            market.capacity
        );
    }
    Ok(())
}

fn dump(set: FixtureSet) -> Result<()> {
    let json = match set {
        FixtureSet::Registry => serde_json::to_string_pretty(&demo_registry())?,
        FixtureSet::Vendors => serde_json::to_string_pretty(&demo_vendors())?,
        FixtureSet::Markets => serde_json::to_string_pretty(&demo_markets())?,
    };
    println!("{json}");
    Ok(())
}

fn parse_vendor_sort(token: &str) -> Result<VendorSortKey> {
    Ok(match token.to_ascii_lowercase().as_str() {
        "name" => VendorSortKey::Name,
        "city" => VendorSortKey::City,
        "status" => VendorSortKey::Status,
        "dues" => VendorSortKey::Dues,
        "rating" => VendorSortKey::Rating,
        _ => bail!("unknown vendor sort key: {token}"),
    })
}

fn parse_market_sort(token: &str) -> Result<MarketSortKey> {
    Ok(match token.to_ascii_lowercase().as_str() {
        "name" => MarketSortKey::Name,
        "capacity" => MarketSortKey::Capacity,
        "date" => MarketSortKey::Established,
        _ => bail!("unknown market sort key: {token}"),
    })
}

fn parse_status(token: &str) -> Result<VendorStatus> {
    Ok(match token.to_ascii_uppercase().as_str() {
        "ACTIVE" => VendorStatus::Active,
        "PENDING_APPROVAL" => VendorStatus::PendingApproval,
        "INACTIVE" => VendorStatus::Inactive,
        "UNDER_REVIEW" => VendorStatus::UnderReview,
        _ => bail!("unknown vendor status: {token}"),
    })
}
