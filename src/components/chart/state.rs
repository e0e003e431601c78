use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Range used until the user (or the settings) picks another one
pub const DEFAULT_RANGE: &str = "3mo";

/// One point of a price chart. Every field is optional so that an empty
/// point (nothing selected) is just `ChartData::default()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl ChartData {
    pub fn from_close(close: f64) -> Self {
        Self {
            close: Some(close),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// NaN compares equal to NaN, otherwise a NaN price would never settle
// and every store update would republish the point.
impl PartialEq for ChartData {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && same_price(self.open, other.open)
            && same_price(self.high, other.high)
            && same_price(self.low, other.low)
            && same_price(self.close, other.close)
            && same_price(self.volume, other.volume)
    }
}

fn same_price(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub data: Vector<ChartData>,
    pub loader: bool,
    pub error: Option<String>,
    pub point: ChartData,
    pub range: String,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            data: Vector::new(),
            loader: false,
            error: None,
            point: ChartData::default(),
            range: DEFAULT_RANGE.to_string(),
        }
    }
}

// Copy-with-replacement. Every update produces a new state value.

impl ChartState {
    pub fn with_range(range: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            ..Default::default()
        }
    }

    pub fn replace_data(&self, data: Vector<ChartData>) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }

    pub fn replace_loader(&self, loader: bool) -> Self {
        Self {
            loader,
            ..self.clone()
        }
    }

    pub fn replace_error(&self, error: Option<String>) -> Self {
        Self {
            error,
            ..self.clone()
        }
    }

    pub fn replace_point(&self, point: ChartData) -> Self {
        Self {
            point,
            ..self.clone()
        }
    }

    pub fn replace_range(&self, range: String) -> Self {
        Self {
            range,
            ..self.clone()
        }
    }
}
