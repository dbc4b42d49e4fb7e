use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Constraint names are matched by the repository when it classifies
        // unique violations, keep them in sync with account_repository_postgres.rs
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Handle).string_len(31).not_null())
                    .col(ColumnDef::new(Accounts::Phone).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Accounts::DeletedAt).timestamp_with_time_zone())
                    .index(
                        Index::create()
                            .name("accounts_handle_key")
                            .col(Accounts::Handle)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name("accounts_phone_key")
                            .col(Accounts::Phone)
                            .unique(),
                    )
                    .check(Expr::col(Accounts::UpdatedAt).gte(Expr::col(Accounts::CreatedAt)))
                    .to_owned(),
            )
            .await?;

        // Lookups always filter on the active rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_accounts_active
                ON accounts (id)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_accounts_active")
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Handle,
    Phone,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
