//! Tests for mlb-model types.

use mlb_model::{
    EfficiencyOptions, JoinPrecedence, JoinSide, MODERN_ROSTER, PipelineOptions, QUADRANT_LEGEND,
    Quadrant, TeamLookup,
};

#[test]
fn quadrant_classification_uses_means_as_lower_bound_of_high() {
    assert_eq!(
        Quadrant::classify(5.0, 0.55, 4.5, 0.5),
        Quadrant::HighRbiHighContribution
    );
    assert_eq!(
        Quadrant::classify(5.0, 0.45, 4.5, 0.5),
        Quadrant::HighRbiLowContribution
    );
    assert_eq!(
        Quadrant::classify(4.0, 0.45, 4.5, 0.5),
        Quadrant::LowRbiLowContribution
    );
    assert_eq!(
        Quadrant::classify(4.0, 0.55, 4.5, 0.5),
        Quadrant::LowRbiHighContribution
    );
    // On the mean lines
    assert_eq!(
        Quadrant::classify(4.5, 0.5, 4.5, 0.5),
        Quadrant::HighRbiHighContribution
    );
}

#[test]
fn legend_follows_quadrant_order() {
    for (quadrant, entry) in Quadrant::ALL.iter().zip(QUADRANT_LEGEND.iter()) {
        assert_eq!(quadrant.label(), entry.label);
    }
    assert_eq!(
        Quadrant::LowRbiHighContribution.to_string(),
        "Low Avg RBI + High Contribution"
    );
}

#[test]
fn custom_lookup_reports_gaps_as_none() {
    let lookup = TeamLookup::new([("NYY", "New York Yankees")], [("BOS", "#BD3039")]);
    assert_eq!(lookup.full_name("NYY"), Some("New York Yankees"));
    assert_eq!(lookup.color("NYY"), None);
    assert_eq!(lookup.full_name("BOS"), None);
    assert_eq!(lookup.color("BOS"), Some("#BD3039"));
}

#[test]
fn modern_lookup_covers_roster() {
    let lookup = TeamLookup::modern();
    assert_eq!(lookup.len(), MODERN_ROSTER.len());
    for team in MODERN_ROSTER {
        assert!(lookup.full_name(team).is_some(), "missing name for {team}");
        assert!(lookup.color(team).is_some(), "missing color for {team}");
    }
}

#[test]
fn efficiency_options_builders() {
    let options = EfficiencyOptions::default()
        .with_min_year(2000)
        .with_roster(["NYY", "ZZZ"]);
    assert_eq!(options.min_year, 2000);
    assert_eq!(options.roster, vec!["NYY".to_string(), "ZZZ".to_string()]);
}

#[test]
fn custom_precedence_moves_winner() {
    let precedence = JoinPrecedence {
        teams_preferred: vec!["RA".to_string(), "HR".to_string()],
    };
    assert_eq!(precedence.winner("HR"), JoinSide::Teams);
    assert_eq!(precedence.winner("H"), JoinSide::Batting);
}

#[test]
fn options_round_trip_through_json() {
    let options = PipelineOptions::default();
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: PipelineOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
}
