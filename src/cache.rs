use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::{entities::page_cache, error::AppResult};

/// Raw movie pages keyed by IMDb id, considered fresh for `ttl_days`.
#[derive(Clone)]
pub struct CacheManager {
    db: DatabaseConnection,
    ttl_seconds: i64,
}

impl CacheManager {
    pub fn new(db: DatabaseConnection, ttl_days: i64) -> Self {
        Self { db, ttl_seconds: ttl_days * 86_400 }
    }

    pub async fn get_page(&self, imdb_movie_id: u32) -> AppResult<Option<Vec<u8>>> {
        let page = page_cache::Entity::find_by_id(i64::from(imdb_movie_id)).one(&self.db).await?;
        Ok(page.filter(|p| self.is_fresh(p.updated_at)).map(|p| p.content))
    }

    pub async fn put_page(&self, imdb_movie_id: u32, content: &[u8]) -> AppResult<()> {
        let model = page_cache::ActiveModel {
            imdb_movie_id: Set(i64::from(imdb_movie_id)),
            content: Set(content.to_vec()),
            updated_at: Set(now_sec()),
        };

        page_cache::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(page_cache::Column::ImdbMovieId)
                    .update_columns([page_cache::Column::Content, page_cache::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    #[cfg(test)]
    pub async fn in_memory(ttl_days: i64) -> Self {
        use sea_orm_migration::MigratorTrait;

        let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = sea_orm::Database::connect(opts).await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        Self::new(db, ttl_days)
    }

    fn is_fresh(&self, cached_at: i64) -> bool {
        now_sec().saturating_sub(cached_at) <= self.ttl_seconds
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
