use serde::{Deserialize, Serialize};

use super::{Asset, Identified, Reference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRouteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub asset: Reference<Asset>,
    pub iban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_usage: Option<String>,
    pub active: bool,
}

/// Fiat deposits to `iban` quoting `bank_usage` are converted into `asset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyRoute {
    /// Unset until the server has created the route.
    pub id: Option<u32>,
    pub asset: Asset,
    pub iban: String,
    /// Generated by the server.
    pub bank_usage: Option<String>,
    pub active: bool,
}

impl BuyRoute {
    pub fn new(asset: Asset, iban: impl Into<String>) -> Self {
        Self {
            id: None,
            asset,
            iban: iban.into(),
            bank_usage: None,
            active: true,
        }
    }
}

pub fn from_buy_route_dto(dto: BuyRouteDto) -> BuyRoute {
    BuyRoute {
        id: dto.id,
        asset: dto.asset.resolve(),
        iban: dto.iban,
        bank_usage: dto.bank_usage,
        active: dto.active,
    }
}

pub fn to_buy_route_dto(route: &BuyRoute) -> BuyRouteDto {
    BuyRouteDto {
        id: route.id,
        asset: Reference::Id(route.asset.id()),
        iban: route.iban.clone(),
        bank_usage: route.bank_usage.clone(),
        active: route.active,
    }
}
