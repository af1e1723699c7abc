use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

use alternating_velocity::MomentsFields;

pub mod property_tests;

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {
            use crate::utils::{self, property_tests};

            fn load_data() -> utils::TestBeam {
                utils::load_test_file($fname)
            }

            #[test]
            fn loads() {
                let beam = load_data();
                assert!(!beam.fields.is_empty());
                assert!(beam.nyquist > 0.0);
            }

            #[test]
            fn unfolded_within_nyquist() {
                property_tests::test_unfolded_within_nyquist(load_data());
            }

            #[test]
            fn noise_keeps_alt_mode_vel() {
                property_tests::test_noise_keeps_alt_mode_vel(load_data());
            }

            #[test]
            fn high_cpa_not_folded() {
                property_tests::test_high_cpa_not_folded(load_data());
            }

            #[test]
            fn confident_gates_unfolded_by_interval() {
                property_tests::test_confident_gates_unfolded_by_interval(load_data());
            }

            #[test]
            fn diagnostics_consistent() {
                property_tests::test_diagnostics_consistent(load_data());
            }

            #[test]
            fn gap_runs_cover_ambiguous_gates() {
                property_tests::test_gap_runs_cover_ambiguous_gates(load_data());
            }
        }
    };
}

/// A beam of moments loaded from the test data directory.
pub struct TestBeam {
    pub nyquist: f64,
    pub fields: Vec<MomentsFields>,
}

pub fn load_test_file(fname: &str) -> TestBeam {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_beam(&test_path)
}

fn load_test_csv_beam(location: &PathBuf) -> TestBeam {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let mut nyquist = None;
    let mut fields = vec![];

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens[0] == "nyquist" {
            nyquist = f64::from_str(tokens[1]).ok();
            continue;
        }

        if tokens.len() < 5 {
            continue;
        }

        let parse = |tok: &str| f64::from_str(tok).expect(&format!("Bad value: {}", tok));
        let vel = parse(tokens[1]);
        let vel_hv = parse(tokens[2]);
        let cpa = parse(tokens[3]);
        let noise_flag = tokens[4] == "1";

        fields.push(MomentsFields::new(vel, vel_hv, cpa, noise_flag));
    }

    TestBeam {
        nyquist: nyquist.expect(&format!("No nyquist in {:#?}", location)),
        fields,
    }
}
