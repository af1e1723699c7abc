use super::TestBeam;
use alternating_velocity::{compute_vel_alt, utility::wrap_to_nyquist, MomentsFields, UnfoldSummary};

const EPS: f64 = 1.0e-9;

fn unfold(beam: &mut TestBeam) -> (Vec<MomentsFields>, UnfoldSummary) {
    let input = beam.fields.clone();
    let summary = compute_vel_alt(&mut beam.fields, beam.nyquist).unwrap();
    assert_eq!(summary.num_gates, input.len());
    (input, summary)
}

pub fn test_unfolded_within_nyquist(mut beam: TestBeam) {
    unfold(&mut beam);

    for (i, gate) in beam.fields.iter().enumerate() {
        assert!(
            gate.vel.abs() <= beam.nyquist + EPS,
            "gate {} vel {} outside nyquist {}",
            i,
            gate.vel,
            beam.nyquist
        );
    }
}

pub fn test_noise_keeps_alt_mode_vel(mut beam: TestBeam) {
    let (_, summary) = unfold(&mut beam);

    let noise: Vec<&MomentsFields> = beam.fields.iter().filter(|gate| gate.noise_flag).collect();
    assert_eq!(noise.len(), summary.num_noise);

    for gate in noise {
        assert_eq!(gate.vel, gate.vel_alt);
        assert_eq!(gate.vel_alt_fold_confidence, 0.0);
        assert!(gate.vel_unfold_interval.is_none());
    }
}

pub fn test_high_cpa_not_folded(mut beam: TestBeam) {
    unfold(&mut beam);

    for gate in beam
        .fields
        .iter()
        .filter(|gate| !gate.noise_flag && gate.cpa > 0.5)
    {
        assert_eq!(gate.vel_unfold_interval.unpack(), 0);
        assert!((gate.vel - wrap_to_nyquist(gate.vel_hv, beam.nyquist)).abs() < EPS);
    }
}

pub fn test_confident_gates_unfolded_by_interval(mut beam: TestBeam) {
    unfold(&mut beam);

    for gate in &beam.fields {
        if let Some(interval) = gate.vel_unfold_interval.into_option() {
            let expected =
                wrap_to_nyquist(gate.vel_hv + f64::from(interval) * beam.nyquist, beam.nyquist);
            assert!((gate.vel - expected).abs() < EPS);
            assert!(gate.test4.is_none());
            assert!(gate.test5.is_none());
        }
    }
}

pub fn test_diagnostics_consistent(mut beam: TestBeam) {
    let (input, _) = unfold(&mut beam);

    for (before, after) in input.iter().zip(&beam.fields) {
        assert_eq!(before.vel_hv, after.vel_hv);
        assert_eq!(before.cpa, after.cpa);
        assert_eq!(before.noise_flag, after.noise_flag);

        assert!(after.vel_alt_fold_confidence >= 0.0 && after.vel_alt_fold_confidence <= 1.0);
        assert_eq!(after.vel_diff, after.vel_alt - after.vel_hv);
        assert_eq!(
            f64::from(after.vel_alt_fold_interval),
            (after.vel_diff / beam.nyquist).round()
        );

        // Only the clutter fix touches the alternating mode velocity, by exactly one nyquist.
        let shift = (after.vel_alt - before.vel).abs();
        assert!(shift < EPS || (shift - beam.nyquist).abs() < EPS);
    }
}

pub fn test_gap_runs_cover_ambiguous_gates(mut beam: TestBeam) {
    let (_, summary) = unfold(&mut beam);

    let mut in_run = vec![false; beam.fields.len()];
    let mut prev_end = 0;
    for run in &summary.gap_runs {
        assert!(run.start >= prev_end);
        assert!(run.start < run.end);
        assert!(run.end <= beam.fields.len());
        assert!((run.max_vel - run.min_vel - beam.nyquist).abs() < EPS);
        assert!(run.mean_confidence >= 0.0 && run.mean_confidence <= 1.0);
        prev_end = run.end;

        for i in run.gates() {
            in_run[i] = true;
            let gate = &beam.fields[i];
            assert!(gate.vel_unfold_interval.is_none());
            assert!((gate.test4.unpack() - run.mean_confidence).abs() < EPS);
        }
    }

    for (gate, in_run) in beam.fields.iter().zip(in_run) {
        let ambiguous = !gate.noise_flag && gate.vel_unfold_interval.is_none();
        assert_eq!(ambiguous, in_run);
        if !in_run {
            assert!(gate.test5.is_none());
        }
    }

    let num_ambiguous: usize = summary.gap_runs.iter().map(|run| run.gates().len()).sum();
    assert_eq!(
        summary.num_confident + summary.num_noise + num_ambiguous,
        summary.num_gates
    );
}
