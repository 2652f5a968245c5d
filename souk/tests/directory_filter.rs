//! End-to-end vendor-directory and market-registry filter/sort scenarios.

use souk::{
    distinct_values, filter_entities, sort_entities, FieldFilter, RangeFilter, SortConfig,
    SortDirection, SortValue, TextQuery, TextSearchable,
};

#[derive(Debug, Clone, PartialEq)]
enum VendorStatus {
    Active,
    PendingApproval,
    Inactive,
    UnderReview,
}

#[derive(Debug, Clone)]
struct Vendor {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    category: &'static str,
    status: VendorStatus,
    city: &'static str,
    market: &'static str,
    rent_due: u32,
    vat_due: u32,
    rating: f64,
}

impl Vendor {
    fn outstanding_dues(&self) -> u32 {
        self.rent_due + self.vat_due
    }
}

impl TextSearchable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name,
            self.email,
            self.id,
            self.category,
            self.market,
            self.city,
        ]
    }
}

fn directory() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "V-001",
            name: "Global Tech Solution",
            email: "sales@globaltech.ug",
            category: "Electronics",
            status: VendorStatus::Active,
            city: "Kampala",
            market: "Owino Market",
            rent_due: 0,
            vat_due: 0,
            rating: 4.8,
        },
        Vendor {
            id: "V-002",
            name: "Fresh Foods Co.",
            email: "orders@freshfoods.ug",
            category: "Groceries",
            status: VendorStatus::PendingApproval,
            city: "Jinja",
            market: "Jinja Main",
            rent_due: 150_000,
            vat_due: 25_000,
            rating: 4.2,
        },
        Vendor {
            id: "V-003",
            name: "Mukasa General Trade",
            email: "mukasa@trade.ug",
            category: "General",
            status: VendorStatus::Inactive,
            city: "Mbarara",
            market: "Mbarara Central",
            rent_due: 300_000,
            vat_due: 50_000,
            rating: 3.5,
        },
        Vendor {
            id: "V-004",
            name: "City Shoppers",
            email: "shop@city.ug",
            category: "Clothing",
            status: VendorStatus::UnderReview,
            city: "Kampala",
            market: "Nakasero Market",
            rent_due: 0,
            vat_due: 0,
            rating: 4.9,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VendorSortKey {
    Name,
    City,
    Dues,
    Rating,
}

fn vendor_sort_value(vendor: &&Vendor, key: VendorSortKey) -> SortValue {
    match key {
        VendorSortKey::Name => SortValue::text(vendor.name),
        VendorSortKey::City => SortValue::text(vendor.city),
        VendorSortKey::Dues => SortValue::number(vendor.outstanding_dues()),
        VendorSortKey::Rating => SortValue::number(vendor.rating),
    }
}

// ── text filtering ───────────────────────────────────────────────

#[test]
fn every_token_must_match_one_field() {
    let vendors = directory();
    let query = TextQuery::parse("tech kampala");
    let kept = filter_entities(&vendors, &query, |_| true);
    // "tech" hits V-001's name, "kampala" its city. City Shoppers is in
    // Kampala but has no field containing "tech"
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "V-001");
}

#[test]
fn tokens_match_across_any_declared_field() {
    let vendors = directory();
    // Email is searchable: "freshfoods" only appears there
    let kept = filter_entities(&vendors, &TextQuery::parse("freshfoods"), |_| true);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "V-002");
}

#[test]
fn empty_query_keeps_all() {
    let vendors = directory();
    let kept = filter_entities(&vendors, &TextQuery::parse(""), |_| true);
    assert_eq!(kept.len(), 4);
}

// ── criterion conjunction ────────────────────────────────────────

#[test]
fn equality_filter_and_text_must_both_hold() {
    let vendors = directory();
    let category = FieldFilter::Only("Electronics");
    // "kampala" matches V-001 and V-004; the category filter then drops
    // V-004 (Clothing), which matched only the text criterion
    let kept = filter_entities(&vendors, &TextQuery::parse("kampala"), |v| {
        category.admits(&v.category)
    });
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "V-001");
}

#[test]
fn status_filter_all_sentinel_admits_everything() {
    let vendors = directory();
    let status: FieldFilter<VendorStatus> = FieldFilter::All;
    let kept = filter_entities(&vendors, &TextQuery::parse(""), |v| status.admits(&v.status));
    assert_eq!(kept.len(), 4);
}

#[test]
fn dues_flag_combines_with_status_filter() {
    let vendors = directory();
    let status = FieldFilter::Only(VendorStatus::Inactive);
    let dues_only = true;
    let kept = filter_entities(&vendors, &TextQuery::parse(""), |v| {
        status.admits(&v.status) && (!dues_only || v.outstanding_dues() > 0)
    });
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "V-003");
}

#[test]
fn year_range_filter_is_inclusive() {
    struct Market {
        name: &'static str,
        established_year: i64,
    }
    impl TextSearchable for Market {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }
    let markets = vec![
        Market { name: "Owino Market", established_year: 1971 },
        Market { name: "Nakasero Market", established_year: 1895 },
        Market { name: "Jinja Main", established_year: 1923 },
    ];
    let window = RangeFilter::new(1895, 1923);
    let kept = filter_entities(&markets, &TextQuery::parse(""), |m| {
        window.contains(m.established_year)
    });
    let names: Vec<&str> = kept.iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Nakasero Market", "Jinja Main"]);
}

// ── sorting ──────────────────────────────────────────────────────

#[test]
fn toggling_dues_key_reverses_order() {
    let vendors = directory();
    let mut rows = filter_entities(&vendors, &TextQuery::parse(""), |_| true);
    let mut config = SortConfig::ascending(VendorSortKey::Dues);

    sort_entities(&mut rows, config.direction, |v| {
        vendor_sort_value(v, config.key)
    });
    let dues: Vec<u32> = rows.iter().map(|v| v.outstanding_dues()).collect();
    assert_eq!(dues, vec![0, 0, 175_000, 350_000]);

    config.toggle(VendorSortKey::Dues);
    assert_eq!(config.direction, SortDirection::Descending);
    sort_entities(&mut rows, config.direction, |v| {
        vendor_sort_value(v, config.key)
    });
    let dues: Vec<u32> = rows.iter().map(|v| v.outstanding_dues()).collect();
    assert_eq!(dues, vec![350_000, 175_000, 0, 0]);
}

#[test]
fn switching_sort_key_resets_to_ascending() {
    let mut config = SortConfig::ascending(VendorSortKey::Dues);
    config.toggle(VendorSortKey::Dues);
    assert_eq!(config.direction, SortDirection::Descending);

    config.toggle(VendorSortKey::Rating);
    assert_eq!(config.key, VendorSortKey::Rating);
    assert_eq!(config.direction, SortDirection::Ascending);
}

#[test]
fn name_sort_is_case_insensitive_lexicographic() {
    let vendors = directory();
    let mut rows = filter_entities(&vendors, &TextQuery::parse(""), |_| true);
    sort_entities(&mut rows, SortDirection::Ascending, |v| {
        vendor_sort_value(v, VendorSortKey::Name)
    });
    let ids: Vec<&str> = rows.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["V-004", "V-002", "V-001", "V-003"]);
}

#[test]
fn zero_dues_tie_preserves_directory_order_both_directions() {
    let vendors = directory();
    let mut rows = filter_entities(&vendors, &TextQuery::parse(""), |_| true);

    sort_entities(&mut rows, SortDirection::Ascending, |v| {
        vendor_sort_value(v, VendorSortKey::Dues)
    });
    // V-001 and V-004 both owe nothing; directory order has V-001 first
    assert_eq!(rows[0].id, "V-001");
    assert_eq!(rows[1].id, "V-004");

    sort_entities(&mut rows, SortDirection::Descending, |v| {
        vendor_sort_value(v, VendorSortKey::Dues)
    });
    // Reversed comparison, same tie: relative order still V-001, V-004
    assert_eq!(rows[2].id, "V-001");
    assert_eq!(rows[3].id, "V-004");
}

// ── dropdown options ─────────────────────────────────────────────

#[test]
fn category_options_are_distinct_and_sorted() {
    let vendors = directory();
    let categories = distinct_values(&vendors, |v| v.category);
    assert_eq!(categories, vec!["Clothing", "Electronics", "General", "Groceries"]);
}

#[test]
fn duplicate_categories_collapse() {
    let mut vendors = directory();
    vendors.push(Vendor { category: "Electronics", ..vendors[0].clone() });
    let categories = distinct_values(&vendors, |v| v.category);
    assert_eq!(categories.len(), 4);
}
