use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::stats::{GroupTotalDto, StatsDto, StatsGroupBy},
    server::{
        data::policy::{PolicyRepository, StatsFilters},
        error::Error,
        model::db::PolicyModel,
    },
};

/// Normalizes a policy's premiums to US dollars: the USD premium plus the
/// peso premium divided by the exchange rate, absent values counting as
/// zero.
pub fn normalized_total(
    premio_uyu: Option<Decimal>,
    premio_usd: Option<Decimal>,
    rate: Decimal,
) -> Decimal {
    premio_usd.unwrap_or_default() + premio_uyu.unwrap_or_default() / rate
}

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    exchange_rate_uyu_usd: Decimal,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, exchange_rate_uyu_usd: Decimal) -> Self {
        Self {
            db,
            exchange_rate_uyu_usd,
        }
    }

    /// Computes the dashboard aggregate: the grand normalized-premium total
    /// and row count over the filtered set, plus grouped totals when a
    /// grouping is selected. Always recomputed from the live dataset.
    pub async fn aggregate(
        &self,
        filters: &StatsFilters,
        group_by: Option<StatsGroupBy>,
    ) -> Result<StatsDto, Error> {
        let policy_repo = PolicyRepository::new(self.db);
        let policies = policy_repo.list_filtered(filters).await?;

        let rate = self.exchange_rate_uyu_usd;

        let total_usd = policies
            .iter()
            .map(|p| normalized_total(p.premio_uyu, p.premio_usd, rate))
            .sum();

        let groups = match group_by {
            Some(group_by) => group_totals(&policies, group_by, rate),
            None => Vec::new(),
        };

        Ok(StatsDto {
            total_usd,
            count: policies.len() as u64,
            exchange_rate: rate,
            groups,
        })
    }
}

/// Group-by-sum over the filtered set. Rows with a blank grouping value are
/// left out of the chart, matching how the dashboard has always dropped
/// them.
fn group_totals(
    policies: &[PolicyModel],
    group_by: StatsGroupBy,
    rate: Decimal,
) -> Vec<GroupTotalDto> {
    let mut totals: BTreeMap<String, (Decimal, u64)> = BTreeMap::new();

    for policy in policies {
        let Some(key) = group_key(policy, group_by) else {
            continue;
        };

        let entry = totals.entry(key).or_insert((Decimal::ZERO, 0));
        entry.0 += normalized_total(policy.premio_uyu, policy.premio_usd, rate);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(key, (total_usd, count))| GroupTotalDto {
            key,
            total_usd,
            count,
        })
        .collect()
}

fn group_key(policy: &PolicyModel, group_by: StatsGroupBy) -> Option<String> {
    let key = match group_by {
        StatsGroupBy::Aseguradora => policy.aseguradora.clone(),
        StatsGroupBy::Ramo => policy.ramo.clone(),
        StatsGroupBy::Anio => policy.vigencia_hasta.year().to_string(),
        StatsGroupBy::Ejecutivo => policy.ejecutivo.clone()?,
        StatsGroupBy::Agente => policy.agente.clone()?,
    };

    if key.trim().is_empty() {
        None
    } else {
        Some(key)
    }
}
