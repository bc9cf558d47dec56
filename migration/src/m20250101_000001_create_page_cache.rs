use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageCache::Table)
                    .if_not_exists()
                    .col(big_integer(PageCache::ImdbMovieId).primary_key())
                    .col(blob(PageCache::Content))
                    .col(big_integer(PageCache::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_cache_updated_at")
                    .table(PageCache::Table)
                    .col(PageCache::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PageCache::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PageCache {
    Table,
    ImdbMovieId,
    Content,
    UpdatedAt,
}
