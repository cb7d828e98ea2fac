use web_sys::window;

use crate::Route;

/// Local-storage key holding the slug of the last solutions page a visitor opened.
pub const LAST_SOLUTION_KEY: &str = "lastSolution";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solution {
    Traders,
    Funds,
    DataEngines,
}

impl Solution {
    pub const ALL: [Solution; 3] = [Solution::Traders, Solution::Funds, Solution::DataEngines];

    pub fn slug(self) -> &'static str {
        match self {
            Solution::Traders => "traders",
            Solution::Funds => "funds",
            Solution::DataEngines => "data-engines",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Solution> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    pub fn route(self) -> Route {
        match self {
            Solution::Traders => Route::SolutionsTraders,
            Solution::Funds => Route::SolutionsFunds,
            Solution::DataEngines => Route::SolutionsDataEngines,
        }
    }

    pub fn from_route(route: &Route) -> Option<Solution> {
        Self::ALL.into_iter().find(|s| &s.route() == route)
    }
}

/// Where pricing-page calls to action send a visitor: individual traders go
/// to the self-serve demo request, everyone else talks to sales.
pub fn pricing_target(last: Option<Solution>) -> Route {
    match last {
        Some(Solution::Traders) => Route::SignupDemo,
        _ => Route::Contact,
    }
}

pub fn remember_solution(solution: Solution) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(LAST_SOLUTION_KEY, solution.slug()).is_err() {
                log::warn!("Could not persist last solution");
            }
        }
    }
}

pub fn last_solution() -> Option<Solution> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(LAST_SOLUTION_KEY).ok())
        .flatten()
        .and_then(|slug| Solution::from_slug(&slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for solution in Solution::ALL {
            assert_eq!(Solution::from_slug(solution.slug()), Some(solution));
        }
        assert_eq!(Solution::from_slug("kol"), None);
    }

    #[test]
    fn solution_routes_are_recognised() {
        assert_eq!(Solution::from_route(&Route::SolutionsFunds), Some(Solution::Funds));
        assert_eq!(Solution::from_route(&Route::Pricing), None);
    }

    #[test]
    fn pricing_target_depends_on_last_solution() {
        assert_eq!(pricing_target(Some(Solution::Traders)), Route::SignupDemo);
        assert_eq!(pricing_target(Some(Solution::Funds)), Route::Contact);
        assert_eq!(pricing_target(Some(Solution::DataEngines)), Route::Contact);
        assert_eq!(pricing_target(None), Route::Contact);
    }
}
