use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000001_create_clientes_table::Cliente;

static FK_SEGURO_CLIENTE_ID: &str = "fk_seguros_cliente_id";
static IDX_SEGURO_VIGENCIA_HASTA: &str = "idx_seguros_vigencia_hasta";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seguro::Table)
                    .if_not_exists()
                    .col(pk_auto(Seguro::Id))
                    .col(integer(Seguro::ClienteId))
                    .col(string(Seguro::Aseguradora))
                    .col(string(Seguro::Ramo))
                    .col(string(Seguro::DetalleRiesgo))
                    .col(date_null(Seguro::VigenciaDesde))
                    .col(date(Seguro::VigenciaHasta))
                    .col(decimal_len_null(Seguro::PremioUyu, 12, 2))
                    .col(decimal_len_null(Seguro::PremioUsd, 12, 2))
                    .col(string_null(Seguro::Corredor))
                    .col(string_null(Seguro::Agente))
                    .col(string_null(Seguro::Ejecutivo))
                    .col(string_null(Seguro::ArchivoUrl))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEGURO_CLIENTE_ID)
                    .from_tbl(Seguro::Table)
                    .from_col(Seguro::ClienteId)
                    .to_tbl(Cliente::Table)
                    .to_col(Cliente::Id)
                    .to_owned(),
            )
            .await?;

        // The renewal working set and the statistics views both range-scan on
        // the coverage-end date.
        manager
            .create_index(
                Index::create()
                    .name(IDX_SEGURO_VIGENCIA_HASTA)
                    .table(Seguro::Table)
                    .col(Seguro::VigenciaHasta)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEGURO_VIGENCIA_HASTA)
                    .table(Seguro::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SEGURO_CLIENTE_ID)
                    .table(Seguro::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Seguro::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Seguro {
    #[sea_orm(iden = "seguros")]
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
}
