use im::Vector;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, IntoStaticStr};

use super::state::ChartData;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, IntoStaticStr, EnumIter)]
pub enum ChartAction {
    #[strum(serialize = "[Chart] Fetch Fulfilled")]
    FetchFulfilled(Vector<ChartData>),
    #[strum(serialize = "[Chart] Fetch Loader")]
    FetchLoader(bool),
    #[strum(serialize = "[Chart] Fetch Error")]
    FetchError(Option<String>),
    #[strum(serialize = "[Chart] Change Point")]
    ChangePoint(ChartData),
    #[strum(serialize = "[Chart] Change Range")]
    ChangeRange(String),
}

// Constructors. Payloads are taken as given, nothing is validated.

impl ChartAction {
    pub fn fetch_fulfilled(data: impl IntoIterator<Item = ChartData>) -> Self {
        Self::FetchFulfilled(data.into_iter().collect())
    }

    pub fn fetch_loader(loader: bool) -> Self {
        Self::FetchLoader(loader)
    }

    pub fn fetch_error(error: Option<String>) -> Self {
        Self::FetchError(error)
    }

    pub fn change_point(point: ChartData) -> Self {
        Self::ChangePoint(point)
    }

    pub fn change_range(range: impl Into<String>) -> Self {
        Self::ChangeRange(range.into())
    }

    /// The unique type identifier of this action
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_are_unique() {
        let kinds: HashSet<&'static str> = ChartAction::iter().map(|a| a.kind()).collect();
        assert_eq!(kinds.len(), ChartAction::iter().count());
    }

    #[test]
    fn constructors_carry_payload() {
        assert_eq!(
            ChartAction::fetch_fulfilled(vec![ChartData::from_close(10.0)]),
            ChartAction::FetchFulfilled(Vector::unit(ChartData::from_close(10.0)))
        );
        assert_eq!(
            ChartAction::change_range("a"),
            ChartAction::ChangeRange("a".to_string())
        );
        assert_eq!(ChartAction::fetch_loader(true).kind(), "[Chart] Fetch Loader");
    }
}
