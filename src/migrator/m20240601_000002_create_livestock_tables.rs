use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Owners
        manager
            .create_table(
                Table::create()
                    .table(Propietario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Propietario::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Propietario::NombreCompleto)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Propietario::CompanyId).uuid().not_null())
                    .col(
                        ColumnDef::new(Propietario::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_propietario_company_nombre")
                    .table(Propietario::Table)
                    .col(Propietario::CompanyId)
                    .col(Propietario::NombreCompleto)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Stables
        manager
            .create_table(
                Table::create()
                    .table(Establo::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Establo::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Establo::Nombre).string().not_null())
                    .col(ColumnDef::new(Establo::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Establo::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_establo_company_nombre")
                    .table(Establo::Table)
                    .col(Establo::CompanyId)
                    .col(Establo::Nombre)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Animals
        manager
            .create_table(
                Table::create()
                    .table(Ganado::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ganado::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ganado::Nombre).string().not_null())
                    .col(ColumnDef::new(Ganado::NumeroFicha).string().not_null())
                    .col(ColumnDef::new(Ganado::Raza).string().not_null())
                    .col(ColumnDef::new(Ganado::Sexo).string_len(16).not_null())
                    .col(ColumnDef::new(Ganado::FechaNacimiento).date())
                    .col(ColumnDef::new(Ganado::Descripcion).text().not_null())
                    .col(ColumnDef::new(Ganado::ImagenUrl).string())
                    .col(
                        ColumnDef::new(Ganado::EnRemate)
                            .boolean()
                            .default(false)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Ganado::IsDestacado)
                            .boolean()
                            .default(false)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Ganado::Puntaje).double())
                    .col(ColumnDef::new(Ganado::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Ganado::PropietarioId).uuid())
                    .col(ColumnDef::new(Ganado::EstabloId).uuid())
                    .col(ColumnDef::new(Ganado::ContestId).uuid().not_null())
                    .col(ColumnDef::new(Ganado::ContestCategoryId).uuid().not_null())
                    .col(ColumnDef::new(Ganado::CreatedById).uuid().not_null())
                    .col(ColumnDef::new(Ganado::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Ganado::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ganado_contest")
                            .from(Ganado::Table, Ganado::ContestId)
                            .to(Contest::Table, Contest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ganado_contest_category")
                            .from(Ganado::Table, Ganado::ContestCategoryId)
                            .to(ContestCategory::Table, ContestCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ganado_propietario")
                            .from(Ganado::Table, Ganado::PropietarioId)
                            .to(Propietario::Table, Propietario::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ganado_establo")
                            .from(Ganado::Table, Ganado::EstabloId)
                            .to(Establo::Table, Establo::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ticket numbers are unique per contest
        manager
            .create_index(
                Index::create()
                    .name("idx_ganado_contest_numero_ficha")
                    .table(Ganado::Table)
                    .col(Ganado::ContestId)
                    .col(Ganado::NumeroFicha)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ganado_contest_category")
                    .table(Ganado::Table)
                    .col(Ganado::ContestCategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ganado::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Establo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Propietario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Propietario {
    Table,
    Id,
    NombreCompleto,
    CompanyId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Establo {
    Table,
    Id,
    Nombre,
    CompanyId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Ganado {
    Table,
    Id,
    Nombre,
    NumeroFicha,
    Raza,
    Sexo,
    FechaNacimiento,
    Descripcion,
    ImagenUrl,
    EnRemate,
    IsDestacado,
    Puntaje,
    CompanyId,
    PropietarioId,
    EstabloId,
    ContestId,
    ContestCategoryId,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Contest {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ContestCategory {
    Table,
    Id,
}
