use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000001_create_clientes_table::Cliente;

static FK_EX_SEGURO_CLIENTE_ID: &str = "fk_ex_seguros_cliente_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExSeguro::Table)
                    .if_not_exists()
                    .col(pk_auto(ExSeguro::Id))
                    .col(integer(ExSeguro::ClienteId))
                    .col(string(ExSeguro::Aseguradora))
                    .col(string(ExSeguro::Ramo))
                    .col(string(ExSeguro::DetalleRiesgo))
                    .col(date_null(ExSeguro::VigenciaDesde))
                    .col(date(ExSeguro::VigenciaHasta))
                    .col(decimal_len_null(ExSeguro::PremioUyu, 12, 2))
                    .col(decimal_len_null(ExSeguro::PremioUsd, 12, 2))
                    .col(string_null(ExSeguro::Corredor))
                    .col(string_null(ExSeguro::Agente))
                    .col(string_null(ExSeguro::Ejecutivo))
                    .col(string_null(ExSeguro::ArchivoUrl))
                    .col(timestamp(ExSeguro::FechaBaja))
                    .to_owned(),
            )
            .await?;

        // No FK back to seguros.id: the source row is deleted when a policy
        // lapses, so lineage to it cannot be enforced.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EX_SEGURO_CLIENTE_ID)
                    .from_tbl(ExSeguro::Table)
                    .from_col(ExSeguro::ClienteId)
                    .to_tbl(Cliente::Table)
                    .to_col(Cliente::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EX_SEGURO_CLIENTE_ID)
                    .table(ExSeguro::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExSeguro::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ExSeguro {
    #[sea_orm(iden = "ex_seguros")]
    Table,
    Id,
    ClienteId,
    Aseguradora,
    Ramo,
    DetalleRiesgo,
    VigenciaDesde,
    VigenciaHasta,
    PremioUyu,
    PremioUsd,
    Corredor,
    Agente,
    Ejecutivo,
    ArchivoUrl,
    FechaBaja,
}
