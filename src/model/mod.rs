//! Wire DTOs, app models and the conversion functions between them.
//!
//! Every entity exchanged with the API has a flat DTO matching the server
//! contract and an app model used by callers. The `to_*_dto` / `from_*_dto`
//! pairs are pure and total, and inverse on the fields both shapes share.

pub mod asset;
pub mod auth;
pub mod buy_route;
pub mod country;
pub mod fiat;
pub mod payment_routes;
pub mod sell_route;
pub mod user;

use serde::{Deserialize, Serialize};

pub use asset::{Asset, AssetType, buyable_assets, sellable_assets};
pub use auth::{AuthResponse, Credentials};
pub use buy_route::{BuyRoute, BuyRouteDto, from_buy_route_dto, to_buy_route_dto};
pub use country::Country;
pub use fiat::Fiat;
pub use payment_routes::{
    PaymentRoute, PaymentRoutes, PaymentRoutesDto, RouteFilter, from_active_payment_routes_dto,
    from_payment_routes_dto, is_active_route, to_payment_routes_dto,
};
pub use sell_route::{SellRoute, SellRouteDto, from_sell_route_dto, to_sell_route_dto};
pub use user::{NewUser, NewUserDto, User, UserDto, from_user_dto, to_new_user_dto, to_user_dto};

/// Master data addressable by a numeric id.
pub trait Identified {
    fn id(&self) -> u32;

    /// Placeholder for a reference the server returned as a bare id.
    fn unresolved(id: u32) -> Self;
}

/// Reference to master data as it appears on the wire.
///
/// The server embeds the full object in responses, the client sends only the
/// id in requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Resolved(T),
    Id(u32),
}

impl<T: Identified> Reference<T> {
    pub fn id(&self) -> u32 {
        match self {
            Reference::Resolved(item) => item.id(),
            Reference::Id(id) => *id,
        }
    }

    pub fn resolve(self) -> T {
        match self {
            Reference::Resolved(item) => item,
            Reference::Id(id) => T::unresolved(id),
        }
    }
}
