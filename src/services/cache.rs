use std::sync::Arc;
use std::time::Duration;

use crate::models::CandidateProfile;

/// Short-lived in-process cache of the candidate pool, keyed by account type.
///
/// A slightly stale pool only produces a slightly stale ranking, so a small
/// TTL keeps the hot path off the database without correctness cost.
/// Preferences are never cached; they must be fresh for every request.
pub struct CacheManager {
    pool_cache: moka::future::Cache<String, Arc<Vec<CandidateProfile>>>,
}

impl CacheManager {
    pub fn new(max_capacity: u64, ttl_secs: u64) -> Self {
        let pool_cache = moka::future::CacheBuilder::new(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { pool_cache }
    }

    /// Cache key for one account type's pool. `None` maps to the unfiltered
    /// pool used when the requester has no account type set.
    fn key(account_type: Option<&str>) -> String {
        format!("candidates:{}", account_type.unwrap_or("*"))
    }

    pub async fn get_candidates(
        &self,
        account_type: Option<&str>,
    ) -> Option<Arc<Vec<CandidateProfile>>> {
        let key = Self::key(account_type);
        let hit = self.pool_cache.get(&key).await;
        if hit.is_some() {
            tracing::trace!("Candidate pool cache hit: {}", key);
        }
        hit
    }

    pub async fn insert_candidates(
        &self,
        account_type: Option<&str>,
        candidates: Vec<CandidateProfile>,
    ) -> Arc<Vec<CandidateProfile>> {
        let pool = Arc::new(candidates);
        self.pool_cache
            .insert(Self::key(account_type), Arc::clone(&pool))
            .await;
        pool
    }

    pub async fn invalidate(&self, account_type: Option<&str>) {
        self.pool_cache.invalidate(&Self::key(account_type)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_get() {
        let cache = CacheManager::new(8, 60);

        let pool = vec![CandidateProfile {
            user_id: 1,
            profile_pic: None,
            basic_info: None,
            personality: None,
        }];
        cache.insert_candidates(Some("love"), pool).await;

        let hit = cache.get_candidates(Some("love")).await.unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].user_id, 1);

        // a different account type is a distinct pool
        assert!(cache.get_candidates(Some("business")).await.is_none());
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = CacheManager::new(8, 60);
        cache.insert_candidates(None, vec![]).await;
        assert!(cache.get_candidates(None).await.is_some());

        cache.invalidate(None).await;
        assert!(cache.get_candidates(None).await.is_none());
    }
}
