//! Target-independent pieces of the Geneverse pages: the JSON records the
//! server returns, the row/chart/chat models built from them, and the page
//! configuration. Nothing here touches the DOM.

use serde::{Deserialize, Serialize};

pub mod chart;
pub mod chat;
pub mod config;
pub mod nav;
pub mod table;

pub use chart::{bar_chart_config, pie_chart_config, ChartConfig};
pub use chat::{ChatReply, ChatRequest, ChatSession, MemoryStore, SessionStore};
pub use config::PageConfig;
pub use nav::is_active_link;
pub use table::{CellModel, RowModel, TableKind};

/// Element ids whose presence switches a page feature on.
pub mod ids {
    pub const GENES_TABLE_BODY: &str = "genes-table-body";
    pub const TRAITS_TABLE_BODY: &str = "traits-table-body";
    pub const PIE_CHART: &str = "myPieChart";
    pub const BAR_CHART: &str = "myBarChart";
    pub const CHAT_WINDOW: &str = "chat-window";
    pub const USER_INPUT: &str = "user-input";
    pub const SEND_BUTTON: &str = "send-button";
}

/// Rendered in place of a missing optional text field.
pub const PLACEHOLDER: &str = "N/A";

/// One row of `GET /api/genes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gene {
    #[serde(default)]
    pub gene_id: Option<i64>,
    #[serde(default)]
    pub gene_symbol: Option<String>,
    #[serde(default)]
    pub gene_name: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub association_count: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// One row of `GET /api/traits`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trait {
    #[serde(default)]
    pub trait_id: Option<i64>,
    #[serde(default)]
    pub trait_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub inheritance_pattern: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub gene_count: u64,
}

/// Pie slice from `GET /api/charts/inheritance-patterns`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternCount {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count: u64,
}

/// Bar from `GET /api/charts/most-studied`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneStudies {
    #[serde(default)]
    pub gene: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub studies: u64,
}

// SQL aggregates may come back as null; treat them as zero.
fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Returns the text, or [`PLACEHOLDER`] when it is absent or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}
