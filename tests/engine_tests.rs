//! Card number engine integration tests.
//!
//! These drive the engine one keystroke at a time, the way an input field
//! would, and check the reported network, validity and mask layout.

use rust_cardnum::core::{Digit, EngineConfig, PrefixMatch};
use rust_cardnum::engine::{CardEdit, CardNumberEngine, CardValidity, EngineResult};
use rust_cardnum::issuers::CardNetwork;
use rust_cardnum::samples::SampleGenerator;

fn type_number(engine: &mut CardNumberEngine<'_>, number: &str) -> Vec<EngineResult> {
    number
        .chars()
        .map(|c| engine.insert_char(c).unwrap())
        .collect()
}

// =============================================================================
// Recognition
// =============================================================================

/// A leading 4 is Visa from the first keystroke on.
#[test]
fn test_visa_identified_on_first_digit() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "4000123412341234");

    assert!(results.iter().all(|r| r.network == CardNetwork::Visa));
    assert_eq!(results.last().unwrap().network_name(), "Visa");
}

/// MasterCard is recognised at two digits and the test number passes.
#[test]
fn test_mastercard_test_number_is_correct() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "5105105105105100");

    assert_eq!(results[0].network, CardNetwork::Unidentified);
    assert_eq!(results[1].network, CardNetwork::MasterCard);
    for result in &results[..15] {
        assert_eq!(result.validity, CardValidity::NotIdentified);
    }
    assert_eq!(results[15].network, CardNetwork::MasterCard);
    assert_eq!(results[15].validity, CardValidity::Correct);
}

/// A Visa-prefixed number with a bad check digit is Wrong once complete.
#[test]
fn test_bad_check_digit_is_wrong() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "4111111111111112");

    assert_eq!(results[14].validity, CardValidity::NotIdentified);
    assert_eq!(results[15].validity, CardValidity::Wrong);
}

/// MasterCard 2-series is only recognised once six digits are in.
#[test]
fn test_mastercard_two_series_needs_six_digits() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "2221000000000009");

    for result in &results[..5] {
        assert_eq!(result.network, CardNetwork::Unidentified);
    }
    assert_eq!(results[5].network, CardNetwork::MasterCard);
    assert_eq!(results[15].validity, CardValidity::Correct);
}

/// Discover's 6011 prefix is caught at four digits, JCB's range likewise.
#[test]
fn test_four_digit_prefixes() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "6011111111111117");
    assert_eq!(results[2].network, CardNetwork::Unidentified);
    assert_eq!(results[3].network, CardNetwork::Discover);
    assert_eq!(results[15].validity, CardValidity::Correct);

    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "3530111333300000");
    assert_eq!(results[3].network, CardNetwork::Jcb);
    assert_eq!(results[15].validity, CardValidity::Correct);
}

/// A number that never matches keeps the 16-digit placeholder mask and is
/// still checksummed once full.
#[test]
fn test_unidentified_number_still_validated() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "9999999999999995");

    assert!(results.iter().all(|r| r.network == CardNetwork::Unidentified));
    assert_eq!(engine.current_mask(), "XXXX XXXX XXXX XXXX");
    assert_eq!(results[15].validity, CardValidity::Correct);
}

/// Maestro is in the catalog but has no candidate row, so it is never
/// identified.
#[test]
fn test_maestro_never_identified() {
    let mut engine = CardNumberEngine::new();
    type_number(&mut engine, "6759");
    assert_eq!(engine.network(), CardNetwork::Unidentified);
}

// =============================================================================
// Masks and capacity
// =============================================================================

/// American Express completes at 15 digits on a 4/6/5 mask.
#[test]
fn test_amex_completes_at_fifteen_digits() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "378282246310005");

    assert_eq!(engine.network(), CardNetwork::AmericanExpress);
    assert_eq!(engine.current_mask(), "XXXX XXXXXX XXXXX");
    assert_eq!(engine.display_text(), "3782 822463 10005");
    assert_eq!(engine.filled_count(), 15);
    assert_eq!(results[14].validity, CardValidity::Correct);

    // Buffer is full: further digits are ignored
    let result = engine.insert_digit(Digit::new(1).unwrap());
    assert_eq!(result.validity, CardValidity::Correct);
    assert_eq!(engine.filled_count(), 15);
}

/// Diners Club completes at 14 digits on a 4/6/4 mask.
#[test]
fn test_diners_completes_at_fourteen_digits() {
    let mut engine = CardNumberEngine::new();
    let results = type_number(&mut engine, "30569309025904");

    assert_eq!(results[2].network, CardNetwork::DinersClub);
    assert_eq!(engine.display_text(), "3056 930902 5904");
    assert_eq!(results[13].validity, CardValidity::Correct);
}

/// The cursor hops separators in both directions.
#[test]
fn test_cursor_skips_separators() {
    let mut engine = CardNumberEngine::new();
    type_number(&mut engine, "4111");
    assert_eq!(engine.cursor(), 5);
    assert_eq!(engine.filled_count(), 4);

    engine.delete_last_digit();
    assert_eq!(engine.cursor(), 3);
    assert_eq!(engine.display_text(), "411X XXXX XXXX XXXX");
}

// =============================================================================
// Deletion
// =============================================================================

/// Deleting everything returns to the initial state.
#[test]
fn test_delete_all_resets_network() {
    let mut engine = CardNumberEngine::new();
    type_number(&mut engine, "378282246310005");
    assert_eq!(engine.network(), CardNetwork::AmericanExpress);

    let mut last = engine.result();
    while engine.filled_count() > 0 {
        last = engine.delete_last_digit();
        assert_eq!(last.validity, CardValidity::NotIdentified);
    }

    assert_eq!(last.network, CardNetwork::Unidentified);
    assert_eq!(engine.current_mask(), "XXXX XXXX XXXX XXXX");
    assert_eq!(engine.cursor(), 0);
}

/// Delete on an empty buffer changes nothing.
#[test]
fn test_delete_on_empty_is_idempotent() {
    let mut engine = CardNumberEngine::new();
    let before = engine.result();

    for _ in 0..3 {
        assert_eq!(engine.delete_last_digit(), before);
    }
    assert_eq!(engine.filled_count(), 0);
    assert_eq!(engine.display_text(), "XXXX XXXX XXXX XXXX");
}

/// The network survives deletions until its prefix is gone.
#[test]
fn test_contains_match_keeps_network_on_delete() {
    let mut engine = CardNumberEngine::new();
    type_number(&mut engine, "3712");

    // "371" still contains "37"
    engine.delete_last_digit();
    assert_eq!(engine.network(), CardNetwork::AmericanExpress);

    // "37" contains "37", "3" does not
    engine.delete_last_digit();
    assert_eq!(engine.network(), CardNetwork::AmericanExpress);
    engine.delete_last_digit();
    assert_eq!(engine.network(), CardNetwork::Unidentified);
}

/// Substring matching is not anchored: any prefix of the set occurring in
/// the digits keeps the network, where starts-with matching drops it.
#[test]
fn test_contains_match_is_not_anchored() {
    let engine_for = |prefix_match| {
        CardNumberEngine::with_config(EngineConfig::default().with_prefix_match(prefix_match))
    };

    // 265512 is in the MasterCard 2-series range
    let mut loose = engine_for(PrefixMatch::Contains);
    let mut strict = engine_for(PrefixMatch::StartsWith);
    for engine in [&mut loose, &mut strict] {
        type_number(engine, "265512");
        assert_eq!(engine.network(), CardNetwork::MasterCard);
        engine.delete_last_digit();
        assert_eq!(engine.digits(), "26551");
    }

    // "26551" contains "55" and "51" but starts with neither
    assert_eq!(loose.network(), CardNetwork::MasterCard);
    assert_eq!(strict.network(), CardNetwork::Unidentified);

    // "2655" still contains "55"; "265" finally drops it
    loose.delete_last_digit();
    assert_eq!(loose.network(), CardNetwork::MasterCard);
    loose.delete_last_digit();
    assert_eq!(loose.network(), CardNetwork::Unidentified);
}

/// Starts-with matching drops the network as soon as the prefix is broken.
#[test]
fn test_starts_with_drops_network_sooner() {
    let config = EngineConfig::default().with_prefix_match(PrefixMatch::StartsWith);
    let mut engine = CardNumberEngine::with_config(config);
    type_number(&mut engine, "34");
    assert_eq!(engine.network(), CardNetwork::AmericanExpress);

    engine.delete_last_digit();
    assert_eq!(engine.network(), CardNetwork::Unidentified);
}

/// Reverting to unidentified keeps typed digits in place.
#[test]
fn test_revert_preserves_digits() {
    let mut engine = CardNumberEngine::new();
    type_number(&mut engine, "36");
    assert_eq!(engine.network(), CardNetwork::DinersClub);
    assert_eq!(engine.display_text(), "36XX XXXXXX XXXX");

    engine.delete_last_digit();
    assert_eq!(engine.network(), CardNetwork::Unidentified);
    assert_eq!(engine.display_text(), "3XXX XXXX XXXX XXXX");
    assert_eq!(engine.cursor(), 1);
}

/// Deletion never re-evaluates validity, even at full length.
#[test]
fn test_delete_then_insert_reevaluates() {
    let mut engine = CardNumberEngine::new();
    type_number(&mut engine, "4111111111111112");
    assert_eq!(engine.validity(), CardValidity::Wrong);

    engine.apply(CardEdit::Delete);
    assert_eq!(engine.validity(), CardValidity::NotIdentified);

    let result = engine.apply(CardEdit::Insert(Digit::new(1).unwrap()));
    assert_eq!(result.validity, CardValidity::Correct);
}

// =============================================================================
// Generated samples
// =============================================================================

/// Every generated sample is recognised and validated by keystroke entry.
#[test]
fn test_generated_samples_round_trip_through_engine() {
    let mut generator = SampleGenerator::new(2024);

    for network in CardNetwork::ALL {
        for number in generator.generate_many(network, 10) {
            let mut engine = CardNumberEngine::new();
            let result = engine.insert_str(&number).unwrap();
            assert_eq!(result.network, network, "{number}");
            assert_eq!(result.validity, CardValidity::Correct, "{number}");
        }
    }
}
