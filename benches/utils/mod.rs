use alternating_velocity::MomentsFields;
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

pub fn load_all_test_files() -> [(f64, Vec<MomentsFields>); 3] {
    [
        load_test_file("mixed_beam.csv"),
        load_test_file("noisy_shear_beam.csv"),
        load_test_file("trailing_gap_beam.csv"),
    ]
}

/// A long beam made by repeating the test beams end to end, sharing the first beam's nyquist.
pub fn long_beam(num_gates: usize) -> (f64, Vec<MomentsFields>) {
    let beams = load_all_test_files();
    let nyquist = beams[0].0;

    let fields = beams
        .iter()
        .flat_map(|(_, fields)| fields.iter().cloned())
        .cycle()
        .take(num_gates)
        .collect();

    (nyquist, fields)
}

fn load_test_file(fname: &str) -> (f64, Vec<MomentsFields>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);

    let mut f = File::open(&test_path).expect(&format!("Error opening file: {:#?}", test_path));
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", test_path));

    let mut nyquist = 0.0;
    let mut fields = vec![];
    for line in contents.lines().filter(|line| !line.starts_with('#')) {
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens[0] == "nyquist" {
            nyquist = f64::from_str(tokens[1]).expect("bad nyquist");
            continue;
        }
        if tokens.len() < 5 {
            continue;
        }

        let vals: Vec<f64> = tokens[1..4]
            .iter()
            .map(|tok| f64::from_str(tok).expect("bad value"))
            .collect();
        fields.push(MomentsFields::new(vals[0], vals[1], vals[2], tokens[4] == "1"));
    }

    (nyquist, fields)
}
