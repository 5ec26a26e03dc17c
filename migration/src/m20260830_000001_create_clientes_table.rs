use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(pk_auto(Cliente::Id))
                    .col(string(Cliente::NombreCompleto))
                    .col(string(Cliente::DocumentoIdentidad))
                    .col(string_null(Cliente::Celular))
                    .col(string_null(Cliente::Email))
                    .col(string_null(Cliente::Domicilio))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cliente::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cliente {
    #[sea_orm(iden = "clientes")]
    Table,
    Id,
    NombreCompleto,
    DocumentoIdentidad,
    Celular,
    Email,
    Domicilio,
}
