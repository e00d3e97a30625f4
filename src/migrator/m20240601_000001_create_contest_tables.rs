use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contest::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contest::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contest::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(Contest::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Contest::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Contest::CreatedById).uuid().not_null())
                    .col(
                        ColumnDef::new(Contest::ParticipantCount)
                            .integer()
                            .default(0)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contest::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Contest::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContestCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContestCategory::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContestCategory::ContestId).uuid().not_null())
                    .col(ColumnDef::new(ContestCategory::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(ContestCategory::Orden)
                            .integer()
                            .default(0)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContestCategory::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contest_category_contest")
                            .from(ContestCategory::Table, ContestCategory::ContestId)
                            .to(Contest::Table, Contest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contest_category_contest_orden")
                    .table(ContestCategory::Table)
                    .col(ContestCategory::ContestId)
                    .col(ContestCategory::Orden)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContestCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contest {
    Table,
    Id,
    Nombre,
    Slug,
    CompanyId,
    CreatedById,
    ParticipantCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContestCategory {
    Table,
    Id,
    ContestId,
    Nombre,
    Orden,
    CreatedAt,
}
