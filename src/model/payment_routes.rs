use serde::{Deserialize, Serialize};

use super::buy_route::{BuyRoute, BuyRouteDto, from_buy_route_dto, to_buy_route_dto};
use super::sell_route::{SellRoute, SellRouteDto, from_sell_route_dto, to_sell_route_dto};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRoutesDto {
    #[serde(default)]
    pub buy: Vec<BuyRouteDto>,
    #[serde(default)]
    pub sell: Vec<SellRouteDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRoutes {
    pub buy_routes: Vec<BuyRoute>,
    pub sell_routes: Vec<SellRoute>,
}

impl PaymentRoutes {
    pub fn len(&self) -> usize {
        self.buy_routes.len() + self.sell_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps only the routes accepted by `filter`.
    pub fn retain(mut self, filter: RouteFilter) -> Self {
        self.buy_routes.retain(|route| filter(route));
        self.sell_routes.retain(|route| filter(route));
        self
    }
}

/// Common view of buy and sell routes for filtering.
pub trait PaymentRoute {
    fn route_id(&self) -> Option<u32>;
    fn is_active(&self) -> bool;
}

impl PaymentRoute for BuyRoute {
    fn route_id(&self) -> Option<u32> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl PaymentRoute for SellRoute {
    fn route_id(&self) -> Option<u32> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Predicate selecting the routes shown as "active".
pub type RouteFilter = fn(&dyn PaymentRoute) -> bool;

/// Default [`RouteFilter`]: the route's own `active` flag.
pub fn is_active_route(route: &dyn PaymentRoute) -> bool {
    route.is_active()
}

pub fn from_payment_routes_dto(dto: PaymentRoutesDto) -> PaymentRoutes {
    PaymentRoutes {
        buy_routes: dto.buy.into_iter().map(from_buy_route_dto).collect(),
        sell_routes: dto.sell.into_iter().map(from_sell_route_dto).collect(),
    }
}

pub fn from_active_payment_routes_dto(dto: PaymentRoutesDto, filter: RouteFilter) -> PaymentRoutes {
    from_payment_routes_dto(dto).retain(filter)
}

pub fn to_payment_routes_dto(routes: &PaymentRoutes) -> PaymentRoutesDto {
    PaymentRoutesDto {
        buy: routes.buy_routes.iter().map(to_buy_route_dto).collect(),
        sell: routes.sell_routes.iter().map(to_sell_route_dto).collect(),
    }
}
