use super::action::ChartAction;
use super::state::ChartState;

/// Every chart action replaces exactly one field.
pub fn reduce(state: &ChartState, action: &ChartAction) -> Option<ChartState> {
    log::trace!("{action:?}");
    let next = match action {
        ChartAction::FetchFulfilled(data) => state.replace_data(data.clone()),
        ChartAction::FetchLoader(loader) => state.replace_loader(*loader),
        ChartAction::FetchError(error) => state.replace_error(error.clone()),
        ChartAction::ChangePoint(point) => state.replace_point(point.clone()),
        ChartAction::ChangeRange(range) => state.replace_range(range.clone()),
    };
    Some(next)
}
