//! Property-based tests for the expense workflow.

use proptest::prelude::*;

use crate::expense::error::ExpenseError;
use crate::expense::types::ExpenseStatus;
use crate::expense::workflow::ExpenseWorkflow;

fn arb_status() -> impl Strategy<Value = ExpenseStatus> {
    prop_oneof![
        Just(ExpenseStatus::Draft),
        Just(ExpenseStatus::Submitted),
        Just(ExpenseStatus::Approved),
        Just(ExpenseStatus::Rejected),
        Just(ExpenseStatus::Reimbursed),
    ]
}

fn arb_reason() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,80}".prop_map(|s| s.trim().to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Submit succeeds from Draft and only from Draft.
    #[test]
    fn prop_submit_only_from_draft(status in arb_status()) {
        let result = ExpenseWorkflow::submit(status);
        if status == ExpenseStatus::Draft {
            prop_assert_eq!(result.unwrap().new_status, ExpenseStatus::Submitted);
        } else {
            let invalid = matches!(result, Err(ExpenseError::InvalidTransition { .. }));
            prop_assert!(invalid, "expected InvalidTransition from {}", status);
        }
    }

    /// Approve succeeds from Submitted and only from Submitted.
    #[test]
    fn prop_approve_only_from_submitted(status in arb_status()) {
        let result = ExpenseWorkflow::approve(status);
        if status == ExpenseStatus::Submitted {
            prop_assert_eq!(result.unwrap().new_status, ExpenseStatus::Approved);
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// A non-blank reason always rejects a submitted expense, and the
    /// reason is carried on the transition.
    #[test]
    fn prop_reject_carries_reason(reason in arb_reason()) {
        prop_assume!(!reason.is_empty());
        let transition = ExpenseWorkflow::reject(ExpenseStatus::Submitted, reason.clone()).unwrap();
        prop_assert_eq!(transition.new_status, ExpenseStatus::Rejected);
        prop_assert_eq!(transition.reason, Some(reason));
    }

    /// No transition ever leaves Reimbursed.
    #[test]
    fn prop_reimbursed_is_terminal(reason in arb_reason()) {
        prop_assume!(!reason.is_empty());
        let status = ExpenseStatus::Reimbursed;
        prop_assert!(ExpenseWorkflow::submit(status).is_err());
        prop_assert!(ExpenseWorkflow::approve(status).is_err());
        prop_assert!(ExpenseWorkflow::reject(status, reason).is_err());
        prop_assert!(ExpenseWorkflow::mark_reimbursed(status).is_err());
        prop_assert!(ExpenseWorkflow::resubmit(status).is_err());
    }
}
