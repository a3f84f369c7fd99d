//! Fixed sample-data catalogs (spec §2 Presets, §6 "Presets").
//!
//! Exact values are implementation-chosen per spec §9 ("Property tests
//! should parametrize over the preset table rather than hardcode values")
//! but are internally consistent with their declared columns/axes/types.

use serde_json::{json, Value};

/// Which card scenario a `card`/`component` request should render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardScenario {
    Revenue,
    Signups,
    Uptime,
}

pub struct CardData {
    pub title: &'static str,
    pub description: &'static str,
    pub value: i64,
    pub units: i64,
}

impl CardScenario {
    pub fn rotation() -> [CardScenario; 3] {
        [CardScenario::Revenue, CardScenario::Signups, CardScenario::Uptime]
    }

    pub fn pick(index: usize) -> CardScenario {
        Self::rotation()[index % 3]
    }

    pub fn data(self) -> CardData {
        match self {
            CardScenario::Revenue => CardData {
                title: "Monthly Revenue",
                description: "Total recurring revenue across all active plans.",
                value: 48210,
                units: 48210,
            },
            CardScenario::Signups => CardData {
                title: "New Signups",
                description: "Accounts created in the trailing 7 days.",
                value: 312,
                units: 312,
            },
            CardScenario::Uptime => CardData {
                title: "Service Uptime",
                description: "Rolling 30-day availability across all regions.",
                value: 99,
                units: 99,
            },
        }
    }
}

/// Table kinds selectable via keyword (spec §4.5, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Sales,
    Users,
    Products,
}

impl TableKind {
    pub const ORDER: [TableKind; 3] = [TableKind::Sales, TableKind::Users, TableKind::Products];

    pub fn columns(self) -> Vec<&'static str> {
        match self {
            TableKind::Sales => vec!["Name", "Sales", "Region"],
            TableKind::Users => vec!["User", "Email", "Status", "Role"],
            TableKind::Products => vec!["Product", "Price", "Stock", "Category"],
        }
    }

    /// Ordered preset rows. Cells are text/integer/float, matching §3.
    pub fn rows(self) -> Vec<Vec<Value>> {
        match self {
            TableKind::Sales => vec![
                vec![json!("Avery Chen"), json!(128400.50), json!("West")],
                vec![json!("Blake Torres"), json!(97250.00), json!("East")],
                vec![json!("Casey Nguyen"), json!(154300.75), json!("North")],
                vec![json!("Drew Patel"), json!(88120.20), json!("South")],
                vec![json!("Elliot Kim"), json!(112990.10), json!("West")],
            ],
            TableKind::Users => vec![
                vec![json!("acoleman"), json!("a.coleman@example.com"), json!("active"), json!("admin")],
                vec![json!("bsingh"), json!("b.singh@example.com"), json!("active"), json!("editor")],
                vec![json!("cwhite"), json!("c.white@example.com"), json!("suspended"), json!("viewer")],
                vec![json!("dortiz"), json!("d.ortiz@example.com"), json!("active"), json!("editor")],
                vec![json!("efoster"), json!("e.foster@example.com"), json!("pending"), json!("viewer")],
            ],
            TableKind::Products => vec![
                vec![json!("Widget A"), json!(19.99), json!(480), json!("Hardware")],
                vec![json!("Widget B"), json!(29.99), json!(212), json!("Hardware")],
                vec![json!("Service Plan"), json!(9.99), json!(9999), json!("Software")],
                vec![json!("Gadget C"), json!(49.99), json!(64), json!("Hardware")],
                vec![json!("Addon D"), json!(4.99), json!(1500), json!("Software")],
            ],
        }
    }

    pub fn total_rows(self) -> usize {
        self.rows().len()
    }
}

/// Chart presets selectable via keyword (spec §4.6, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPreset {
    SalesLine,
    RevenueBar,
    GrowthLine,
    PerformanceBar,
}

impl ChartPreset {
    pub const ORDER: [ChartPreset; 4] = [
        ChartPreset::SalesLine,
        ChartPreset::RevenueBar,
        ChartPreset::GrowthLine,
        ChartPreset::PerformanceBar,
    ];

    pub fn chart_type(self) -> &'static str {
        match self {
            ChartPreset::SalesLine | ChartPreset::GrowthLine => "line",
            ChartPreset::RevenueBar | ChartPreset::PerformanceBar => "bar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartPreset::SalesLine => "Sales Over Time",
            ChartPreset::RevenueBar => "Revenue by Region",
            ChartPreset::GrowthLine => "Weekly Growth",
            ChartPreset::PerformanceBar => "Performance Metrics",
        }
    }

    pub fn x_axis(self) -> Vec<&'static str> {
        match self {
            ChartPreset::SalesLine => vec!["Jan", "Feb", "Mar", "Apr", "May"],
            ChartPreset::RevenueBar => vec!["West", "East", "North", "South"],
            ChartPreset::GrowthLine => vec!["Wk 1", "Wk 2", "Wk 3", "Wk 4", "Wk 5"],
            ChartPreset::PerformanceBar => vec!["Latency", "Throughput", "Error Rate", "Uptime"],
        }
    }

    pub fn series_label(self) -> &'static str {
        match self {
            ChartPreset::SalesLine => "Sales",
            ChartPreset::RevenueBar => "Revenue",
            ChartPreset::GrowthLine => "Growth",
            ChartPreset::PerformanceBar => "Score",
        }
    }

    pub fn values(self) -> Vec<Value> {
        match self {
            ChartPreset::SalesLine => vec![json!(12000), json!(15500), json!(14200), json!(18900), json!(21100)],
            ChartPreset::RevenueBar => vec![json!(84200), json!(61000), json!(72500), json!(49800)],
            ChartPreset::GrowthLine => vec![json!(2.1), json!(3.4), json!(2.8), json!(4.6), json!(5.0)],
            ChartPreset::PerformanceBar => vec![json!(120), json!(98), json!(3), json!(99)],
        }
    }

    pub fn total_points(self) -> usize {
        self.values().len()
    }
}
