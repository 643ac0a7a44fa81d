use std::io::Cursor;

use gymfee_cli::{CANCELLED, InteractiveFlow};
use gymfee_membership::PricingEngine;

/// Drive the flow with scripted answers; returns (result, transcript).
fn drive(engine: &PricingEngine, answers: &str) -> (i64, String) {
    let mut flow = InteractiveFlow::new(engine, Cursor::new(answers.to_string()), Vec::new());
    let result = flow.run().unwrap();
    let transcript = String::from_utf8(flow.into_output()).unwrap();
    (result, transcript)
}

#[test]
fn basic_plan_confirmed_returns_truncated_total() {
    let engine = PricingEngine::standard();
    let (result, transcript) = drive(&engine, "1\n1\ndone\n1\nyes\n");

    assert_eq!(result, 29);
    assert!(transcript.contains("MEMBERSHIP SUMMARY"));
    assert!(transcript.contains("Membership confirmed! Total cost: $29.99"));
}

#[test]
fn full_selection_with_group_and_premium() {
    let engine = PricingEngine::standard();
    let (result, transcript) = drive(&engine, "Family\n2\n1\n2\n3\ndone\n2\ny\n");

    assert_eq!(result, 227);
    assert!(transcript.contains("GROUP SAVINGS: Save $10.00 with 2 members (10% discount)!"));
    assert!(transcript.contains("Premium Level: Exclusive Facilities"));
    assert!(transcript.contains("Membership confirmed! Total cost: $227.69"));
}

#[test]
fn selecting_a_feature_twice_removes_it() {
    let engine = PricingEngine::standard();
    let (result, transcript) = drive(&engine, "1\n1\n1\npersonal training\ndone\nnone\nyes\n");

    assert_eq!(result, 29);
    assert!(transcript.contains("Added: Personal Training"));
    assert!(transcript.contains("Removed: Personal Training"));
    assert!(transcript.contains("Additional Features: None"));
}

#[test]
fn cancel_at_any_prompt_returns_sentinel() {
    let engine = PricingEngine::standard();
    for answers in [
        "cancel\n",
        "1\ncancel\n",
        "1\n1\ncancel\n",
        "1\n1\ndone\ncancel\n",
        "1\n1\ndone\n1\ncancel\n",
    ] {
        let (result, transcript) = drive(&engine, answers);
        assert_eq!(result, CANCELLED, "answers {answers:?}");
        assert!(transcript.contains("Membership selection canceled."));
    }
}

#[test]
fn running_out_of_input_cancels() {
    let engine = PricingEngine::standard();
    let (result, _) = drive(&engine, "");
    assert_eq!(result, CANCELLED);

    let (result, _) = drive(&engine, "2\n3\n");
    assert_eq!(result, CANCELLED);
}

#[test]
fn declining_confirmation_starts_over() {
    let engine = PricingEngine::standard();
    let (result, transcript) = drive(&engine, "1\n1\ndone\n1\nno\n2\n1\ndone\n1\nyes\n");

    assert_eq!(result, 59);
    assert!(transcript.contains("Starting over..."));
    assert_eq!(transcript.matches("WELCOME TO GYM MEMBERSHIP MANAGEMENT SYSTEM").count(), 2);
}

#[test]
fn invalid_answers_are_reprompted() {
    let engine = PricingEngine::standard();
    let (result, transcript) = drive(
        &engine,
        "9\nPlatinum\nbasic\n0\nabc\n1\n7\nYoga\ndone\nx\n1\nmaybe\ny\n",
    );

    assert_eq!(result, 29);
    assert!(transcript.contains("Invalid selection. Please enter a number between 1 and 3."));
    assert!(transcript.contains("Invalid membership plan. Please select from: Basic, Premium, Family"));
    assert!(transcript.contains("Error: Number of members must be at least 1."));
    assert!(transcript.contains("Please enter a valid number."));
    assert!(transcript.contains("Invalid feature. Please select from:"));
    assert!(transcript.contains("Please enter 'yes' or 'no'."));
}

#[test]
fn unavailable_entries_are_not_offered() {
    let mut engine = PricingEngine::standard();
    engine.set_plan_available("Basic", false).unwrap();
    engine.set_feature_available("Personal Training", false).unwrap();

    // "1" now means Premium for plans and Group Classes for features.
    let (result, transcript) = drive(&engine, "1\n1\n1\ndone\n1\nyes\n");

    assert_eq!(result, 89);
    assert!(transcript.contains("Membership Plan: Premium"));
    assert!(transcript.contains("  - Group Classes: $30.00"));
}

#[test]
fn no_available_plans_cancels() {
    let mut engine = PricingEngine::standard();
    for plan in ["Basic", "Premium", "Family"] {
        engine.set_plan_available(plan, false).unwrap();
    }

    let (result, transcript) = drive(&engine, "1\n");
    assert_eq!(result, CANCELLED);
    assert!(transcript.contains("No membership plans are currently available."));
}
