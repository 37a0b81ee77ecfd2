use sqlx::types::BigDecimal;
use uuid::Uuid;

use crate::db::reportdb::PaidJobRow;

pub const DEFAULT_BEST_CLIENTS_LIMIT: usize = 2;

#[derive(Debug, PartialEq)]
pub struct ProfessionEarnings {
    pub profession: String,
    pub total_earnings: BigDecimal,
}

#[derive(Debug, PartialEq)]
pub struct ClientSpend {
    pub id: Uuid,
    pub full_name: String,
    pub paid: BigDecimal,
}

/// Highest-earning profession over the given paid jobs. Ties are broken by
/// descending earnings only: the profession encountered first wins.
pub fn best_profession(rows: &[PaidJobRow]) -> Option<ProfessionEarnings> {
    let mut totals: Vec<(String, BigDecimal)> = Vec::new();
    for row in rows {
        match totals.iter_mut().find(|(p, _)| *p == row.profession) {
            Some((_, total)) => *total += row.price.clone(),
            None => totals.push((row.profession.clone(), row.price.clone())),
        }
    }

    let mut best: Option<ProfessionEarnings> = None;
    for (profession, total) in totals {
        let better = match &best {
            Some(current) => total > current.total_earnings,
            None => true,
        };
        if better {
            best = Some(ProfessionEarnings {
                profession,
                total_earnings: total,
            });
        }
    }
    best
}

/// Clients ranked by total paid amount, truncated to `limit`. The sort is
/// stable, so exact ties keep first-encountered order.
pub fn best_clients(rows: &[PaidJobRow], limit: usize) -> Vec<ClientSpend> {
    let mut totals: Vec<ClientSpend> = Vec::new();
    for row in rows {
        match totals.iter_mut().find(|c| c.id == row.client_id) {
            Some(client) => client.paid += row.price.clone(),
            None => totals.push(ClientSpend {
                id: row.client_id,
                full_name: format!("{} {}", row.client_first_name, row.client_last_name),
                paid: row.price.clone(),
            }),
        }
    }

    totals.sort_by(|a, b| b.paid.cmp(&a.paid));
    totals.truncate(limit);
    totals
}
