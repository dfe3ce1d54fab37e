use serde::{Deserialize, Serialize};

use super::{Fiat, Identified, Reference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellRouteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub fiat: Reference<Fiat>,
    pub iban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_address: Option<String>,
    pub active: bool,
}

/// Crypto sent to `deposit_address` is paid out in `fiat` to `iban`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellRoute {
    pub id: Option<u32>,
    pub fiat: Fiat,
    pub iban: String,
    pub deposit_address: Option<String>,
    pub active: bool,
}

impl SellRoute {
    pub fn new(fiat: Fiat, iban: impl Into<String>) -> Self {
        Self {
            id: None,
            fiat,
            iban: iban.into(),
            deposit_address: None,
            active: true,
        }
    }
}

pub fn from_sell_route_dto(dto: SellRouteDto) -> SellRoute {
    SellRoute {
        id: dto.id,
        fiat: dto.fiat.resolve(),
        iban: dto.iban,
        deposit_address: dto.deposit_address,
        active: dto.active,
    }
}

pub fn to_sell_route_dto(route: &SellRoute) -> SellRouteDto {
    SellRouteDto {
        id: route.id,
        fiat: Reference::Id(route.fiat.id()),
        iban: route.iban.clone(),
        deposit_address: route.deposit_address.clone(),
        active: route.active,
    }
}
