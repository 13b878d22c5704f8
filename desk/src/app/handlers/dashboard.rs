//! # Dashboard Handlers
//!
//! Five slices load independently; a failed slice is left empty and the rest still render.

use crate::app::state::{AppState, DashboardState};
use crate::app::tasks::{dashboard, TaskContext};
use crate::core::error::Result;

pub(crate) fn load_dashboard(state: &mut AppState, ctx: &TaskContext) {
    state.dashboard.pending = dashboard::DASHBOARD_SLICES;
    dashboard::fetch_dashboard(ctx);
}

/// Apply one slice result. Failures reset the slice to its empty value.
pub(crate) fn on_slice<T: Default>(
    state: &mut AppState,
    slice: &'static str,
    result: Result<T>,
    apply: impl FnOnce(&mut DashboardState, T),
) {
    state.dashboard.pending = state.dashboard.pending.saturating_sub(1);
    let value = result.unwrap_or_else(|err| {
        tracing::warn!(slice, error = %err, "Dashboard slice failed");
        T::default()
    });
    apply(&mut state.dashboard, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::session::ThemeMode;
    use shared::dto::{FinanceSummary, TopProduct};

    #[test]
    fn test_failed_slice_is_empty_and_others_survive() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.dashboard.pending = 2;

        on_slice(
            &mut state,
            "top_products",
            Err::<Vec<TopProduct>, _>(AppError::Network("reset".into())),
            |d, v| d.top_products = v,
        );
        on_slice(
            &mut state,
            "summary",
            Ok(FinanceSummary {
                low_stock: 3,
                ..FinanceSummary::default()
            }),
            |d, v| d.summary = Some(v),
        );

        assert!(state.dashboard.top_products.is_empty());
        assert_eq!(state.dashboard.summary.as_ref().map(|s| s.low_stock), Some(3));
        assert_eq!(state.dashboard.pending, 0);
    }
}
