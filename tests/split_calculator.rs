use billsplit::domain::{
    split::MIN_PARTICIPANTS, SavedSplits, SplitConfiguration, SplitError, SplitField,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn config(bill_amount: f64, tip_percentage: f64, percentages: &[f64]) -> SplitConfiguration {
    let base = (2..percentages.len()).fold(
        SplitConfiguration::with_defaults(bill_amount, tip_percentage),
        |config, _| config.add_participant(),
    );
    percentages
        .iter()
        .enumerate()
        .fold(base, |config, (index, percentage)| {
            config.update_percentage(index, *percentage)
        })
}

fn percentages(config: &SplitConfiguration) -> Vec<f64> {
    config.participants.iter().map(|p| p.percentage).collect()
}

#[test]
fn test_even_split_with_tip() {
    let config = config(100.0, 10.0, &[50.0, 50.0]);

    assert_eq!(config.amount_owed(0), Some(55.0));
    assert_eq!(config.amount_owed(1), Some(55.0));
    assert_eq!(config.amount_owed(2), None);
}

#[test]
fn test_third_participant_joins_at_zero() {
    let config = config(100.0, 10.0, &[50.0, 50.0]).add_participant();

    assert_eq!(config.participants[2].name, "Person 3");
    assert_eq!(percentages(&config), vec![50.0, 50.0, 0.0]);
    assert_eq!(config.percentage_total(), 100.0);
    assert_eq!(config.amount_owed(2), Some(0.0));
}

#[test]
fn test_remove_at_minimum_returns_unchanged() {
    let before = config(100.0, 10.0, &[30.0, 70.0]);

    let after = before.clone().remove_participant(0);

    assert_eq!(after, before);
}

#[rstest]
#[case(&[20.0, 30.0, 10.0])]
#[case(&[60.0, 60.0, 0.0])]
#[case(&[0.0, 0.0, 0.0, 0.0])]
#[case(&[33.0, 33.0, 33.0])]
#[case(&[12.5, 12.5, 12.5, 12.5, 99.0])]
fn test_renormalize_touches_only_last(#[case] input: &[f64]) {
    let before = config(50.0, 15.0, input);

    let after = before.clone().renormalize();

    let last = input.len() - 1;
    assert_eq!(percentages(&after)[..last], percentages(&before)[..last]);
    let others: f64 = input[..last].iter().sum();
    assert_eq!(after.participants[last].percentage, (100.0 - others).max(0.0));
    if others <= 100.0 {
        assert!(after.is_balanced());
    }
}

#[test]
fn test_editing_last_participant_stays_off_until_next_renormalize() {
    let config = config(100.0, 0.0, &[50.0, 50.0])
        .renormalize()
        .update_percentage(1, 20.0);

    assert_eq!(config.percentage_total(), 70.0);
    assert!(!config.is_balanced());

    // renormalizing pushes the last participant back
    assert_eq!(percentages(&config.renormalize()), vec![50.0, 50.0]);
}

#[test]
fn test_remove_never_goes_below_minimum() {
    let mut config = (0..5).fold(SplitConfiguration::default(), |config, _| {
        config.add_participant()
    });
    for _ in 0..10 {
        config = config.remove_participant(0);
        assert!(config.len() >= MIN_PARTICIPANTS);
    }

    assert_eq!(config.len(), MIN_PARTICIPANTS);
    assert!(config.is_balanced());
}

#[rstest]
#[case(100.0, 10.0, &[50.0, 50.0])]
#[case(87.45, 18.0, &[25.0, 25.0, 50.0])]
#[case(80.0, 15.0, &[33.0, 33.0, 34.0])]
#[case(1234.56, 20.0, &[10.0, 20.0, 30.0, 40.0])]
fn test_amounts_sum_to_total(
    #[case] bill_amount: f64,
    #[case] tip_percentage: f64,
    #[case] input: &[f64],
) {
    let config = config(bill_amount, tip_percentage, input);
    assert!(config.is_balanced());

    let sum: f64 = config.amounts_owed().iter().sum();

    assert!(
        (sum - config.total_with_tip()).abs() <= 0.01,
        "{sum} vs {}",
        config.total_with_tip()
    );
}

#[test]
fn test_validate_reports_per_field() {
    let config = config(10.0, 0.0, &[50.0, 50.0]).update_name(1, "  ");

    let result = config.validate();

    assert!(!result.is_valid());
    assert_eq!(
        result.message_for(SplitField::ParticipantName(1)),
        Some("Name is required")
    );
    assert_eq!(result.message_for(SplitField::ParticipantName(0)), None);
}

#[test]
fn test_save_then_load_last_round_trips() {
    let config = config(42.0, 12.0, &[10.0, 20.0, 70.0]);
    let history = SavedSplits::new()
        .save(&SplitConfiguration::default())
        .save(&config);

    let last = history.last_index().unwrap();

    assert_eq!(history.load(last).unwrap(), config);
}

#[rstest]
#[case(0, 3)]
#[case(2, 2)]
#[case(1, 5)]
fn test_load_outside_history_fails_without_mutation(#[case] len: usize, #[case] index: usize) {
    let history = (0..len).fold(SavedSplits::new(), |history, _| {
        history.save(&SplitConfiguration::default())
    });
    let before = history.clone();

    let result = history.load(index);

    assert_eq!(result, Err(SplitError::SnapshotNotFound { index, len }));
    assert_eq!(history, before);
    assert!(result.unwrap_err().to_string().contains("not found"));
}
