use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Coin,
    #[serde(rename = "DAT")]
    Dat,
    #[serde(other)]
    Other,
}

/// Crypto asset a buy route can pay out in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub buyable: bool,
    pub sellable: bool,
}

impl Identified for Asset {
    fn id(&self) -> u32 {
        self.id
    }

    fn unresolved(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            asset_type: AssetType::Other,
            buyable: false,
            sellable: false,
        }
    }
}

/// Assets offered when creating a buy route.
pub fn buyable_assets(assets: &[Asset]) -> Vec<Asset> {
    assets.iter().filter(|a| a.buyable).cloned().collect()
}

pub fn sellable_assets(assets: &[Asset]) -> Vec<Asset> {
    assets.iter().filter(|a| a.sellable).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_deserializes_from_wire() {
        let json = r#"{"id":1,"name":"BTC","type":"DAT","buyable":true,"sellable":false}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.id, 1);
        assert_eq!(asset.name, "BTC");
        assert_eq!(asset.asset_type, AssetType::Dat);
        assert!(asset.buyable);
        assert!(!asset.sellable);
    }

    #[test]
    fn test_unknown_asset_type_is_other() {
        let json = r#"{"id":7,"name":"LP","type":"PoolPair","buyable":false,"sellable":false}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.asset_type, AssetType::Other);
    }

    #[test]
    fn test_buyable_and_sellable_filters() {
        let mut dfi = Asset::unresolved(1);
        dfi.buyable = true;
        let mut btc = Asset::unresolved(2);
        btc.sellable = true;
        let assets = vec![dfi.clone(), btc.clone()];

        assert_eq!(buyable_assets(&assets), vec![dfi]);
        assert_eq!(sellable_assets(&assets), vec![btc]);
    }
}
