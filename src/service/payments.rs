use sqlx::types::BigDecimal;
use uuid::Uuid;

use crate::service::error::MarketError;

/// Maximum deposit as a share of outstanding unpaid work: 25%.
pub fn deposit_limit(outstanding: &BigDecimal) -> BigDecimal {
    outstanding * BigDecimal::from(25) / BigDecimal::from(100)
}

/// Decides whether `actor_id` may pay the job right now. Runs inside the
/// payment transaction, after the job and both profile rows are locked.
pub fn check_payment(
    job_id: Uuid,
    actor_id: Uuid,
    client_id: Uuid,
    paid: Option<bool>,
    client_balance: &BigDecimal,
    price: &BigDecimal,
) -> Result<(), MarketError> {
    if client_id != actor_id {
        return Err(MarketError::NotJobClient { job_id, actor_id });
    }

    if paid.unwrap_or(false) {
        return Err(MarketError::AlreadyPaid(job_id));
    }

    if client_balance < price {
        return Err(MarketError::InsufficientFunds {
            required: price.clone(),
            available: client_balance.clone(),
        });
    }

    Ok(())
}

/// Decides whether `actor_id` may deposit `amount` into the target client's
/// balance, given the client's outstanding unpaid-job total.
pub fn check_deposit(
    target_id: Uuid,
    actor_id: Uuid,
    amount: &BigDecimal,
    outstanding: &BigDecimal,
) -> Result<(), MarketError> {
    if target_id != actor_id {
        return Err(MarketError::DepositToForeignAccount {
            target_id,
            actor_id,
        });
    }

    if *amount <= BigDecimal::from(0) {
        return Err(MarketError::InvalidAmount);
    }

    // With no unpaid work there is no limit to deposit under.
    if *outstanding <= BigDecimal::from(0) {
        return Err(MarketError::NothingOutstanding(target_id));
    }

    let max_allowed = deposit_limit(outstanding);
    if *amount > max_allowed {
        return Err(MarketError::DepositLimitExceeded { max_allowed });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn deposit_limit_is_a_quarter_of_outstanding() {
        assert_eq!(
            deposit_limit(&BigDecimal::from(400)),
            BigDecimal::from_str("100").unwrap()
        );
        assert_eq!(
            deposit_limit(&BigDecimal::from_str("202.00").unwrap()),
            BigDecimal::from_str("50.5").unwrap()
        );
    }

    #[test]
    fn only_the_contract_client_can_pay() {
        let job_id = Uuid::new_v4();
        let client = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let err = check_payment(
            job_id,
            stranger,
            client,
            None,
            &BigDecimal::from(1000),
            &BigDecimal::from(200),
        )
        .unwrap_err();
        assert!(matches!(err, MarketError::NotJobClient { .. }));
    }

    #[test]
    fn paying_a_paid_job_is_rejected() {
        let job_id = Uuid::new_v4();
        let client = Uuid::new_v4();

        let err = check_payment(
            job_id,
            client,
            client,
            Some(true),
            &BigDecimal::from(1000),
            &BigDecimal::from(200),
        )
        .unwrap_err();
        assert!(matches!(err, MarketError::AlreadyPaid(id) if id == job_id));
    }

    #[test]
    fn null_and_false_paid_flags_are_both_payable() {
        let client = Uuid::new_v4();
        for paid in [None, Some(false)] {
            check_payment(
                Uuid::new_v4(),
                client,
                client,
                paid,
                &BigDecimal::from(1000),
                &BigDecimal::from(200),
            )
            .unwrap();
        }
    }

    #[test]
    fn payment_requires_sufficient_balance() {
        let client = Uuid::new_v4();

        let err = check_payment(
            Uuid::new_v4(),
            client,
            client,
            None,
            &BigDecimal::from(199),
            &BigDecimal::from(200),
        )
        .unwrap_err();
        assert!(matches!(err, MarketError::InsufficientFunds { .. }));

        // exact balance is enough
        check_payment(
            Uuid::new_v4(),
            client,
            client,
            None,
            &BigDecimal::from(200),
            &BigDecimal::from(200),
        )
        .unwrap();
    }

    #[test]
    fn deposits_into_foreign_accounts_are_forbidden() {
        let target = Uuid::new_v4();
        let actor = Uuid::new_v4();

        let err = check_deposit(
            target,
            actor,
            &BigDecimal::from(1),
            &BigDecimal::from(400),
        )
        .unwrap_err();
        assert!(matches!(err, MarketError::DepositToForeignAccount { .. }));
    }

    #[test]
    fn non_positive_amounts_are_invalid() {
        let client = Uuid::new_v4();
        for amount in [BigDecimal::from(0), BigDecimal::from(-50)] {
            let err =
                check_deposit(client, client, &amount, &BigDecimal::from(400)).unwrap_err();
            assert!(matches!(err, MarketError::InvalidAmount));
        }
    }

    #[test]
    fn deposits_are_refused_with_nothing_outstanding() {
        let client = Uuid::new_v4();
        let err = check_deposit(
            client,
            client,
            &BigDecimal::from(10),
            &BigDecimal::from(0),
        )
        .unwrap_err();
        assert!(matches!(err, MarketError::NothingOutstanding(id) if id == client));
    }

    #[test]
    fn deposit_cap_is_enforced_inclusively() {
        let client = Uuid::new_v4();
        let outstanding = BigDecimal::from(400);

        // 100 is exactly the cap and passes
        check_deposit(client, client, &BigDecimal::from(100), &outstanding).unwrap();

        // 150 exceeds it
        let err =
            check_deposit(client, client, &BigDecimal::from(150), &outstanding).unwrap_err();
        match err {
            MarketError::DepositLimitExceeded { max_allowed } => {
                assert_eq!(max_allowed, BigDecimal::from_str("100").unwrap());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
