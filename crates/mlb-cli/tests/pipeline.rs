//! Integration tests for the pipeline and output modules.

use std::fs;
use std::path::Path;

use mlb_cli::output::{OutputPaths, write_outputs};
use mlb_cli::pipeline::{PipelineInputs, run_pipeline};
use mlb_model::{ComputationWarning, EfficiencyOptions, PipelineOptions, TeamLookup};
use tempfile::TempDir;

const BATTING: &str = "\
playerID,yearID,stint,teamID,lgID,G,AB,R,H,2B,HR,RBI
ruthba01,1968,1,NYA,AL,10,40,5,12,2,3,7
aaa01,1970,1,NYY,AL,100,100,50,30,5,5,40
bbb01,1970,1,BOS,AL,100,150,60,45,9,6,50
ccc01,1970,1,BOS,AL,0,0,0,0,0,0,0
ddd01,1971,1,NYY,AL,50,40,10,10,1,2,8
eee01,1971,1,BOS,AL,50,60,20,20,3,3,15
fff01,1971,1,ZZZ,AL,20,30,5,9,1,1,4
";

const TEAMS: &str = "\
yearID,lgID,teamID,franchID,G,R,RA,H,AB,HR,name
1968,AL,NYA,NYY,162,536,531,1137,5310,109,New York Yankees
1970,AL,NYY,NYY,162,680,40,1381,5555,111,New York Yankees
1970,AL,BOS,BOS,162,786,45,1450,5535,203,Boston Red Sox
1971,AL,NYY,NYY,162,648,30,1377,5413,97,New York Yankees
1971,AL,BOS,BOS,162,691,20,1360,5494,161,Boston Red Sox
1971,AL,ZZZ,ZZZ,162,500,600,1200,5400,80,Nowhere Nine
";

fn write_inputs(dir: &Path) -> PipelineInputs {
    let batting = dir.join("Batting.csv");
    let teams = dir.join("Teams.csv");
    fs::write(&batting, BATTING).unwrap();
    fs::write(&teams, TEAMS).unwrap();
    PipelineInputs { batting, teams }
}

fn options() -> PipelineOptions {
    PipelineOptions::default().with_efficiency(
        EfficiencyOptions::default().with_roster(["NYY", "BOS", "ZZZ"]),
    )
}

#[test]
fn run_counts_every_stage() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());

    let output = run_pipeline(&inputs, &options(), &TeamLookup::modern()).unwrap();

    assert_eq!(output.counts.batting_rows, 7);
    assert_eq!(output.counts.team_rows, 6);
    assert_eq!(output.counts.merged_rows, 7);
    assert_eq!(output.counts.yearly_rows, 3);
    // 1968 is before the modern era
    assert_eq!(output.counts.efficiency_rows, 5);
    assert_eq!(output.counts.established_franchises, 0);
    assert_eq!(output.inputs.len(), 2);

    assert!(output.warnings.contains(&ComputationWarning::zero_denominator(
        "batting",
        "batting_average",
        1
    )));
    assert!(
        output
            .warnings
            .contains(&ComputationWarning::missing_lookup("ZZZ", "team_full_name"))
    );
}

#[test]
fn outputs_are_written_and_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let lookup = TeamLookup::modern();

    let first_dir = dir.path().join("first");
    let second_dir = dir.path().join("second");
    let first = run_pipeline(&inputs, &options(), &lookup).unwrap();
    let first_paths = write_outputs(&first_dir, &first).unwrap();
    let second = run_pipeline(&inputs, &options(), &lookup).unwrap();
    let second_paths = write_outputs(&second_dir, &second).unwrap();

    assert_eq!(first_paths, OutputPaths::in_dir(&first_dir));
    for (a, b) in first_paths.all().iter().zip(second_paths.all()) {
        let left = fs::read(a).unwrap();
        let right = fs::read(b).unwrap();
        assert!(!left.is_empty());
        assert_eq!(left, right, "{} differs between runs", a.display());
    }
}

#[test]
fn yearly_csv_has_expected_rows() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let output = run_pipeline(&inputs, &options(), &TeamLookup::modern()).unwrap();
    let paths = write_outputs(&dir.path().join("out"), &output).unwrap();

    let yearly = fs::read_to_string(&paths.yearly).unwrap();
    // 1970: 75 H / 250 AB, 11 HR over 2 teams; 1971: 39 H / 130 AB, 6 HR over 3 teams
    insta::assert_snapshot!(yearly, @r"
    year,HR,H,AB,batting_average,hr_per_team
    1968,3,12,40,0.3,3
    1970,11,75,250,0.3,6
    1971,6,39,130,0.3,2
    ");
}

#[test]
fn efficiency_csv_leaves_unknown_team_fields_empty() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let output = run_pipeline(&inputs, &options(), &TeamLookup::modern()).unwrap();
    let paths = write_outputs(&dir.path().join("out"), &output).unwrap();

    let efficiency = fs::read_to_string(&paths.efficiency).unwrap();
    let header = efficiency.lines().next().unwrap();
    assert_eq!(
        header,
        "year,team,avg_rbi_per_game,rbi_contribution_rate,team_full_name,color,quadrant"
    );
    let zzz = efficiency
        .lines()
        .find(|line| line.starts_with("1971,ZZZ,"))
        .unwrap();
    let fields: Vec<&str> = zzz.split(',').collect();
    assert_eq!(fields[4], "");
    assert_eq!(fields[5], "");
    assert!(efficiency.lines().all(|line| !line.starts_with("1968,")));
}

#[test]
fn manifest_records_inputs_and_warnings() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let output = run_pipeline(&inputs, &options(), &TeamLookup::modern()).unwrap();
    let paths = write_outputs(&dir.path().join("out"), &output).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.manifest).unwrap()).unwrap();
    assert_eq!(manifest["schema"], "mlb-trends.run-manifest");
    assert_eq!(manifest["inputs"].as_array().unwrap().len(), 2);
    assert_eq!(manifest["inputs"][0]["sha256"].as_str().unwrap().len(), 64);
    assert_eq!(manifest["rows"]["merged_rows"], 7);
    assert_eq!(manifest["established_franchises"]["min_seasons"], 5);
    assert!(
        manifest["warnings"]
            .as_array()
            .unwrap()
            .iter()
            .any(|w| w["kind"] == "missing_lookup" && w["team"] == "ZZZ")
    );

    let quadrant: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.quadrant).unwrap()).unwrap();
    assert_eq!(quadrant["rows"], 5);
    assert_eq!(quadrant["legend"].as_array().unwrap().len(), 4);
}

#[test]
fn missing_column_fails_with_file_and_column() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    fs::write(&inputs.teams, "yearID,teamID,franchID,R,HR\n1970,NYY,NYY,680,111\n").unwrap();

    let error = run_pipeline(&inputs, &options(), &TeamLookup::modern()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("'RA'"), "{message}");
    assert!(message.contains("Teams.csv"), "{message}");
}
