//! Mutual fund catalog
//!
//! The product ships a static catalog; listings are served through the
//! cache the way a remote fund feed would be, so the display path never
//! depends on where the data came from.

use crate::cache::{Cache, CacheDuration};
use crate::error::KoshResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FundCategory {
    LargeCap,
    MidCap,
    SmallCap,
    HighRisk,
}

impl FundCategory {
    pub const ALL: [FundCategory; 4] =
        [Self::LargeCap, Self::MidCap, Self::SmallCap, Self::HighRisk];

    pub fn label(self) -> &'static str {
        match self {
            Self::LargeCap => "Large Cap",
            Self::MidCap => "Mid Cap",
            Self::SmallCap => "Small Cap",
            Self::HighRisk => "High Risk High Return",
        }
    }

    fn cache_subkey(self) -> &'static str {
        match self {
            Self::LargeCap => "funds:large-cap",
            Self::MidCap => "funds:mid-cap",
            Self::SmallCap => "funds:small-cap",
            Self::HighRisk => "funds:high-risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundInfo {
    pub name: String,
    pub returns: String,
    pub aum: String,
    pub min_sip: String,
}

impl FundInfo {
    fn new(name: &str, returns: &str, aum: &str, min_sip: &str) -> Self {
        Self {
            name: name.to_string(),
            returns: returns.to_string(),
            aum: aum.to_string(),
            min_sip: min_sip.to_string(),
        }
    }
}

/// Catalog contents for one category
pub fn catalog(category: FundCategory) -> Vec<FundInfo> {
    match category {
        FundCategory::LargeCap => vec![
            FundInfo::new("HDFC Top 100 Fund", "15.8%", "₹22,450 Cr", "₹500"),
            FundInfo::new("Axis Bluechip Fund", "14.5%", "₹18,900 Cr", "₹500"),
            FundInfo::new("ICICI Pru Bluechip Fund", "13.9%", "₹20,100 Cr", "₹100"),
            FundInfo::new("SBI Bluechip Fund", "13.2%", "₹16,780 Cr", "₹500"),
            FundInfo::new("Mirae Asset Large Cap", "14.8%", "₹19,200 Cr", "₹1,000"),
        ],
        FundCategory::MidCap => vec![
            FundInfo::new("Kotak Emerging Equity", "18.5%", "₹12,450 Cr", "₹1,000"),
            FundInfo::new("HDFC Mid-Cap Fund", "17.2%", "₹15,600 Cr", "₹500"),
            FundInfo::new("Axis Midcap Fund", "16.8%", "₹13,900 Cr", "₹500"),
            FundInfo::new("DSP Midcap Fund", "16.5%", "₹11,200 Cr", "₹500"),
            FundInfo::new("L&T Midcap Fund", "17.8%", "₹10,500 Cr", "₹500"),
        ],
        FundCategory::SmallCap => vec![
            FundInfo::new("SBI Small Cap Fund", "21.5%", "₹8,900 Cr", "₹500"),
            FundInfo::new("Nippon Small Cap Fund", "20.8%", "₹7,600 Cr", "₹500"),
            FundInfo::new("Axis Small Cap Fund", "19.9%", "₹6,800 Cr", "₹500"),
            FundInfo::new("HDFC Small Cap Fund", "19.2%", "₹7,200 Cr", "₹500"),
            FundInfo::new("DSP Small Cap Fund", "20.2%", "₹6,500 Cr", "₹500"),
        ],
        FundCategory::HighRisk => vec![
            FundInfo::new("Quant Small Cap Fund", "32.5%", "₹4,500 Cr", "₹1,000"),
            FundInfo::new("PGIM Midcap Fund", "28.8%", "₹5,600 Cr", "₹1,000"),
            FundInfo::new("Tata Digital India", "27.5%", "₹6,800 Cr", "₹500"),
        ],
    }
}

/// Cached read path over the catalog
pub struct FundService {
    cache: Cache,
    tier: CacheDuration,
}

impl FundService {
    pub fn new(cache: Cache, tier: CacheDuration) -> Self {
        Self { cache, tier }
    }

    /// List a category, reading through the cache. `refresh` bypasses
    /// the cached copy and repopulates it.
    pub async fn list(&self, category: FundCategory, refresh: bool) -> KoshResult<Vec<FundInfo>> {
        let subkey = category.cache_subkey();

        if !refresh {
            if let Some(funds) = self.cache.get::<Vec<FundInfo>>(subkey).await {
                debug!("Fund list for {} served from cache", category.label());
                return Ok(funds);
            }
        }

        let funds = catalog(category);
        self.cache.set(subkey, &funds, self.tier).await?;
        Ok(funds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::store::MemoryStore;

    fn test_service() -> (FundService, Cache) {
        let storage = Storage::new(MemoryStore::new());
        let cache = Cache::new(storage);
        (
            FundService::new(cache.clone(), CacheDuration::Medium),
            cache,
        )
    }

    #[tokio::test]
    async fn list_populates_cache() {
        let (service, cache) = test_service();

        let funds = service.list(FundCategory::LargeCap, false).await.unwrap();
        assert_eq!(funds.len(), 5);
        assert!(!cache.is_expired("funds:large-cap").await);

        // Second read comes from the cache and matches
        let again = service.list(FundCategory::LargeCap, false).await.unwrap();
        assert_eq!(again, funds);
    }

    #[tokio::test]
    async fn refresh_overwrites_cached_copy() {
        let (service, cache) = test_service();
        // Seed a stale-looking cached value
        cache
            .set("funds:mid-cap", &vec![FundInfo::new("Old", "0%", "₹0", "₹0")], CacheDuration::Long)
            .await
            .unwrap();

        let funds = service.list(FundCategory::MidCap, true).await.unwrap();
        assert_eq!(funds.len(), 5);
        assert_ne!(funds[0].name, "Old");

        let cached: Vec<FundInfo> = cache.get("funds:mid-cap").await.unwrap();
        assert_eq!(cached, funds);
    }

    #[test]
    fn every_category_has_entries() {
        for category in FundCategory::ALL {
            assert!(!catalog(category).is_empty());
        }
    }
}
