//! Demo fixtures for the Regional HUB console: the discovery catalog the
//! header searches, the vendor directory, and the market registry.
//!
//! These mirror the console's seeded mock data so the CLI and downstream
//! demos exercise the engines against realistic records.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use souk::{RecordKind, SearchableRecord, SortValue, TextSearchable};

/// The registry catalog behind the header's discovery search box.
pub fn demo_registry() -> Vec<SearchableRecord> {
    vec![
        SearchableRecord::new(RecordKind::Vendor, "Global Tech Solution", "V-001", "Registry Nodes", "Vendors")
            .with_status("Active"),
        SearchableRecord::new(RecordKind::Vendor, "Fresh Foods Co.", "V-002", "Registry Nodes", "Vendors")
            .with_status("Active"),
        SearchableRecord::new(RecordKind::Vendor, "Mukasa General Trade", "V-003", "Registry Nodes", "Vendors")
            .with_status("Pending"),
        SearchableRecord::new(RecordKind::Product, "Premium Basmati Rice", "P-101", "Catalog Items", "Inventory Control")
            .with_sub("Grain"),
        SearchableRecord::new(RecordKind::Product, "Refined White Sugar", "P-102", "Catalog Items", "Inventory Control")
            .with_sub("Pantry"),
        SearchableRecord::new(RecordKind::Product, "Solar Lantern X1", "P-103", "Catalog Items", "Inventory Control")
            .with_sub("Electronics"),
        SearchableRecord::new(RecordKind::Order, "ORD-1001 (Maize Flour)", "O-001", "Order Manifests", "Orders")
            .with_status("Pending"),
        SearchableRecord::new(RecordKind::Order, "ORD-1002 (Cooking Oil)", "O-002", "Order Manifests", "Orders")
            .with_status("Shipped"),
        SearchableRecord::new(RecordKind::Order, "ORD-8821 (Industrial Salt)", "O-003", "Order Manifests", "Orders")
            .with_status("Delivered"),
        SearchableRecord::new(RecordKind::Logistics, "Weekly Bridge W21", "L-001", "Logistics Hub", "Supply Requisitions")
            .with_status("En Route"),
        SearchableRecord::new(RecordKind::Module, "Revenue Analytics", "MOD-REV", "System Modules", "Revenue Module"),
        SearchableRecord::new(RecordKind::Module, "Security Console", "MOD-SEC", "System Modules", "Security Console"),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// VENDOR DIRECTORY
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VendorStatus {
    Active,
    PendingApproval,
    Inactive,
    UnderReview,
}

impl VendorStatus {
    /// The console's status token, as sent by its dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Active => "ACTIVE",
            VendorStatus::PendingApproval => "PENDING_APPROVAL",
            VendorStatus::Inactive => "INACTIVE",
            VendorStatus::UnderReview => "UNDER_REVIEW",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub category: String,
    pub status: VendorStatus,
    pub products: u32,
    pub joined: NaiveDate,
    pub city: String,
    pub market: String,
    pub rent_due: u32,
    pub vat_due: u32,
    pub rating: f64,
    pub rating_count: u32,
}

impl Vendor {
    /// Rent plus VAT arrears — the "outstanding dues" column and flag.
    pub fn outstanding_dues(&self) -> u32 {
        self.rent_due + self.vat_due
    }

    pub fn sort_value(&self, key: VendorSortKey) -> SortValue {
        match key {
            VendorSortKey::Name => SortValue::text(&self.name),
            VendorSortKey::City => SortValue::text(&self.city),
            VendorSortKey::Status => SortValue::text(self.status.as_str()),
            VendorSortKey::Dues => SortValue::number(self.outstanding_dues()),
            VendorSortKey::Rating => SortValue::number(self.rating),
        }
    }
}

impl TextSearchable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.email,
            &self.id,
            &self.category,
            &self.market,
            &self.city,
        ]
    }
}

/// Sortable columns of the vendor directory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorSortKey {
    Name,
    City,
    Status,
    Dues,
    Rating,
}

pub fn demo_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "V-001".into(),
            name: "Global Tech Solution".into(),
            email: "sales@globaltech.ug".into(),
            category: "Electronics".into(),
            status: VendorStatus::Active,
            products: 145,
            joined: date(2023, 11, 12),
            city: "Kampala".into(),
            market: "Owino Market".into(),
            rent_due: 0,
            vat_due: 0,
            rating: 4.8,
            rating_count: 12,
        },
        Vendor {
            id: "V-002".into(),
            name: "Fresh Foods Co.".into(),
            email: "orders@freshfoods.ug".into(),
            category: "Groceries".into(),
            status: VendorStatus::PendingApproval,
            products: 45,
            joined: date(2024, 1, 20),
            city: "Jinja".into(),
            market: "Jinja Main".into(),
            rent_due: 150_000,
            vat_due: 25_000,
            rating: 4.2,
            rating_count: 8,
        },
        Vendor {
            id: "V-003".into(),
            name: "Mukasa General Trade".into(),
            email: "mukasa@trade.ug".into(),
            category: "General".into(),
            status: VendorStatus::Inactive,
            products: 12,
            joined: date(2024, 3, 5),
            city: "Mbarara".into(),
            market: "Mbarara Central".into(),
            rent_due: 300_000,
            vat_due: 50_000,
            rating: 3.5,
            rating_count: 4,
        },
        Vendor {
            id: "V-004".into(),
            name: "City Shoppers".into(),
            email: "shop@city.ug".into(),
            category: "Clothing".into(),
            status: VendorStatus::UnderReview,
            products: 89,
            joined: date(2023, 8, 15),
            city: "Kampala".into(),
            market: "Nakasero Market".into(),
            rent_due: 0,
            vat_due: 0,
            rating: 4.9,
            rating_count: 22,
        },
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// MARKET REGISTRY
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Market {
    pub name: String,
    pub city: String,
    pub kind: String,
    pub ownership: String,
    pub established: NaiveDate,
    pub capacity: u32,
}

impl Market {
    /// Year component of the establishment date — the registry's range
    /// filter operates on this, not the full date.
    pub fn established_year(&self) -> i64 {
        i64::from(self.established.year())
    }

    pub fn sort_value(&self, key: MarketSortKey) -> SortValue {
        match key {
            MarketSortKey::Name => SortValue::text(&self.name),
            MarketSortKey::Capacity => SortValue::number(self.capacity),
            MarketSortKey::Established => SortValue::number(self.established.num_days_from_ce()),
        }
    }
}

impl TextSearchable for Market {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.city]
    }
}

/// Sortable columns of the market registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketSortKey {
    Name,
    Capacity,
    Established,
}

pub fn demo_markets() -> Vec<Market> {
    vec![
        Market {
            name: "Owino Market".into(),
            city: "Kampala".into(),
            kind: "Open Air".into(),
            ownership: "Municipal".into(),
            established: date(1971, 3, 14),
            capacity: 50_000,
        },
        Market {
            name: "Nakasero Market".into(),
            city: "Kampala".into(),
            kind: "Mixed".into(),
            ownership: "Municipal".into(),
            established: date(1895, 6, 1),
            capacity: 8_000,
        },
        Market {
            name: "Jinja Main Market".into(),
            city: "Jinja".into(),
            kind: "Indoor".into(),
            ownership: "Municipal".into(),
            established: date(1923, 9, 30),
            capacity: 12_000,
        },
        Market {
            name: "Mbarara Central Market".into(),
            city: "Mbarara".into(),
            kind: "Open Air".into(),
            ownership: "Cooperative".into(),
            established: date(1958, 2, 11),
            capacity: 9_500,
        },
        Market {
            name: "Gulu Main Market".into(),
            city: "Gulu".into(),
            kind: "Mixed".into(),
            ownership: "Private".into(),
            established: date(1934, 7, 22),
            capacity: 6_200,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}
