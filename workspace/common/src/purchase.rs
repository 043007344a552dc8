use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ===================== Status =====================

/// Order statuses a customer can filter their purchase history by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseStatus {
    ReadyToPickup,
    Completed,
    Canceled,
    ReturnAndRefund,
}

impl PurchaseStatus {
    /// Label shown on the filter bar and sent as the `status` query value.
    pub fn label(self) -> &'static str {
        match self {
            PurchaseStatus::ReadyToPickup => "Ready to Pickup",
            PurchaseStatus::Completed => "Completed",
            PurchaseStatus::Canceled => "Canceled",
            PurchaseStatus::ReturnAndRefund => "Return & Refund",
        }
    }
}

/// The filter selected on the purchase list. `All` never reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PurchaseStatus),
}

impl StatusFilter {
    /// Filter choices in the order the filter bar shows them.
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(PurchaseStatus::ReadyToPickup),
        StatusFilter::Only(PurchaseStatus::Completed),
        StatusFilter::Only(PurchaseStatus::Canceled),
        StatusFilter::Only(PurchaseStatus::ReturnAndRefund),
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn status(self) -> Option<PurchaseStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status),
        }
    }
}

// ===================== Records =====================

/// A single product entry within a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_image_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    pub quantity: u32,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A purchase as returned by the purchase-history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default, with = "order_date_format")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(rename = "productList", default, deserialize_with = "null_as_empty")]
    pub line_items: Vec<LineItem>,
}

impl Purchase {
    /// Card title: the first line item's name, blank when there is none.
    pub fn title(&self) -> &str {
        self.line_items
            .first()
            .map(|item| item.name.as_str())
            .unwrap_or("")
    }
}

/// Response envelope of `GET /purchase`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PurchaseList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Purchase>,
}

/// Newest first. Purchases without a date go last; ties keep response order.
pub fn sort_by_order_date_desc(purchases: &mut [Purchase]) {
    purchases.sort_by(|a, b| b.order_date.cmp(&a.order_date));
}

/// Parses the date formats the purchase endpoint is known to emit.
pub fn parse_order_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    tracing::warn!(raw, "Unrecognised order date, treating as missing");
    None
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_image_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let url = Option::<String>::deserialize(deserializer)?;
    Ok(url.filter(|url| !url.trim().is_empty()))
}

mod order_date_format {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Other(IgnoredAny),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawDate>::deserialize(deserializer)? {
            Some(RawDate::Text(raw)) => parse_order_date(&raw),
            Some(RawDate::Other(_)) | None => None,
        })
    }
}
