use tracing::instrument;

use super::{ApiResult, ApiService};
use crate::http::HttpTransport;
use crate::model::{BuyRoute, PaymentRoutes, SellRoute, User};
use crate::session::SessionProvider;

/// Everything the landing view of a signed-in account shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeData {
    pub user: User,
    pub routes: PaymentRoutes,
}

impl HomeData {
    /// Adds a created route, or replaces the route with the same id.
    pub fn add_buy_route(&mut self, route: BuyRoute) {
        let existing = route
            .id
            .and_then(|id| self.routes.buy_routes.iter().position(|r| r.id == Some(id)));
        match existing {
            Some(index) => self.routes.buy_routes[index] = route,
            None => self.routes.buy_routes.push(route),
        }
    }

    pub fn add_sell_route(&mut self, route: SellRoute) {
        let existing = route
            .id
            .and_then(|id| self.routes.sell_routes.iter().position(|r| r.id == Some(id)));
        match existing {
            Some(index) => self.routes.sell_routes[index] = route,
            None => self.routes.sell_routes.push(route),
        }
    }

    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }
}

impl<T: HttpTransport> ApiService<T> {
    /// Fetches the profile and the active routes concurrently.
    ///
    /// Fails as soon as either request fails.
    #[instrument(skip_all, err)]
    pub async fn load_home(&self, sessions: &dyn SessionProvider) -> ApiResult<HomeData> {
        let (user, routes) =
            tokio::try_join!(self.get_user(sessions), self.get_active_routes(sessions))?;

        tracing::info!(
            buy_routes = routes.buy_routes.len(),
            sell_routes = routes.sell_routes.len(),
            "Home data loaded"
        );

        Ok(HomeData { user, routes })
    }
}
