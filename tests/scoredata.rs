#![cfg(feature = "rand")]

use scoredata::{assert_fp_eq, prelude::*};

/// A user-side profile that only carries the quantized table, as a filter
/// stage would see it.
struct ByteProfile {
    alphabet: Alphabet,
    scores:   Vec<Vec<u8>>,
}

impl SsvProfile for ByteProfile {
    fn model_len(&self) -> usize {
        self.scores.len() - 1
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn ssv_score(&self, pos: usize, symbol: usize) -> u8 {
        self.scores[pos][symbol]
    }
}

#[test]
fn quantized_from_custom_profile() {
    let alphabet = Alphabet::new(b"ACGT", 4).unwrap();
    let scores = vec![
        vec![0, 0, 0, 0],
        vec![12, 40, 7, 3],
        vec![90, 1, 1, 255],
        vec![5, 6, 7, 8],
    ];
    let profile = ByteProfile { alphabet, scores };
    let data = ScoreData::quantized(&profile).unwrap();

    let table = data.scores().as_quantized().unwrap();
    for pos in 0..=3 {
        assert_eq!(table.row(pos), profile.scores[pos].as_slice());
    }
    assert_eq!(data.quantized_score(2, 3), Some(255));
}

#[test]
fn build_clone_enrich_release() {
    let profile = Profile::sample(Alphabet::AMINO, 150, 1234).unwrap();

    let template = ScoreData::new(&profile, Some(&profile)).unwrap();
    assert_eq!(template.mode(), ScoreMode::Float);
    assert!(template.extensions().is_some());

    let workers: Vec<_> = (0..3)
        .map(|_| template.try_clone().unwrap().enrich(&profile).unwrap())
        .collect();
    for worker in &workers {
        assert!(worker.is_enriched());
        assert_fp_eq!(*worker.scores().as_float().unwrap(), *template.scores().as_float().unwrap());
        assert_fp_eq!(@absolute, worker.prefix_length(149).unwrap(), 1.0f32, 1e-6);
    }

    for worker in workers {
        worker.destroy();
    }
    destroy(Some(template));
    destroy(None);
}

#[test]
fn extension_bounds_track_remaining_length() {
    let profile = Profile::sample(Alphabet::DNA, 25, 8).unwrap();
    let data = ScoreData::new(&profile, Some(&profile)).unwrap();

    for pos in 1..25 {
        let reach = (25 - pos).min(10);
        let last = data.extension(pos, reach, Direction::Forward).unwrap();
        for offset in reach..=10 {
            assert_eq!(data.extension(pos, offset, Direction::Forward), Some(last));
        }

        let reach = pos.min(10);
        let last = data.extension(pos, reach, Direction::Reverse).unwrap();
        for offset in reach..=10 {
            assert_eq!(data.extension(pos, offset, Direction::Reverse), Some(last));
        }
    }
}

#[test]
fn forward_bound_is_sum_of_maxima() {
    let profile = Profile::sample(Alphabet::DNA, 40, 99).unwrap();
    let data = ScoreData::new(&profile, Some(&profile)).unwrap();

    let max_at = |pos: usize| (0..4).map(|x| profile.match_score(pos, x)).fold(0.0f32, f32::max);
    for pos in 1..40 {
        let mut sum = 0.0f32;
        for offset in 1..=(40 - pos).min(10) {
            sum += max_at(pos + offset);
            assert_fp_eq!(data.extension(pos, offset, Direction::Forward).unwrap(), sum, 1e-5);
        }
    }
}

#[test]
fn window_lengths_follow_insert_rates() {
    let alphabet = Alphabet::new(b"ACGT", 4).unwrap();
    let mut profile = Profile::new(alphabet, 3).unwrap();
    profile.set_insert_rates(1, 0.1, 0.5);
    profile.set_insert_rates(2, 0.1, 0.5);

    let data = ScoreData::quantized(&profile).unwrap().enrich(&profile).unwrap();
    assert_fp_eq!(raw_window_length(0.1f64, 0.5, DEFAULT_WINDOW_BETA), 22.0);
    assert_fp_eq!(data.prefix_length(1).unwrap(), 0.5f32);
    assert_fp_eq!(data.prefix_length(2).unwrap(), 1.0f32);
    assert_fp_eq!(data.suffix_length(3).unwrap(), 0.5f32);
    assert_fp_eq!(data.suffix_length(1).unwrap(), 1.0f32);
}

#[test]
fn errors_report_codes() {
    let profile = Profile::sample(Alphabet::DNA, 10, 0).unwrap();
    let other = Profile::sample(Alphabet::DNA, 11, 0).unwrap();

    let err = ScoreData::float(&profile, &other).unwrap_err();
    assert_eq!(err, ScoreDataError::LengthMismatch { expected: 10, found: 11 });
    assert_eq!(
        err.to_string(),
        "The raw model has 11 match positions but the finalized model has 10!"
    );
    assert_eq!(err.get_code(), 1);
    assert_eq!(Profile::new(Alphabet::DNA, 0), Err(ScoreDataError::EmptyModel));
}

#[test]
fn display_round() {
    let alphabet = Alphabet::new(b"ACGT", 4).unwrap();
    let mut profile = Profile::new(alphabet, 2).unwrap();
    profile.set_match_score(1, 0, 1.25);
    profile.set_match_score(2, 3, 2.5);

    let text = ScoreData::float(&profile, &profile).unwrap().to_string();
    let expected = "\
# score data: M = 2, Kp = 4, mode = float
# match scores
    0    0.000    0.000    0.000    0.000
    1    1.250    0.000    0.000    0.000
    2    0.000    0.000    0.000    2.500
# forward extensions
    1    2.500    2.500    2.500    2.500    2.500    2.500    2.500    2.500    2.500    2.500
# reverse extensions
    1    1.250    1.250    1.250    1.250    1.250    1.250    1.250    1.250    1.250    1.250
";
    assert_eq!(text, expected);
}

#[cfg(feature = "fuzzing")]
mod fuzzing {
    use arbitrary::{Arbitrary, Unstructured};
    use scoredata::data::arbitrary::{ProfileCorrupted, ProfileValid};
    use scoredata::prelude::*;

    fn bytes(seed: u8) -> Vec<u8> {
        (0..4096u32)
            .map(|i| {
                #[allow(clippy::cast_possible_truncation)]
                let b = (i.wrapping_mul(2_654_435_761) >> 13) as u8;
                b ^ seed
            })
            .collect()
    }

    #[test]
    fn valid_profiles_enrich() {
        for seed in 0..16 {
            let data = bytes(seed);
            let mut u = Unstructured::new(&data);
            let Ok(ProfileValid(profile)) = ProfileValid::arbitrary(&mut u) else {
                continue;
            };
            let built = ScoreData::new(&profile, Some(&profile)).unwrap();
            let copy = built.try_clone().unwrap();
            assert_eq!(copy, built);
            assert!(copy.enrich(&profile).unwrap().is_enriched());
        }
    }

    #[test]
    fn corrupted_profiles_rejected() {
        for seed in 0..16 {
            let data = bytes(seed);
            let mut u = Unstructured::new(&data);
            let Ok(case) = ProfileCorrupted::arbitrary(&mut u) else {
                continue;
            };
            let built = ScoreData::quantized(&case.profile).unwrap();
            assert_eq!(
                built.enrich(&case.profile),
                Err(ScoreDataError::InvalidTransition {
                    position: case.position,
                    kind:     case.kind,
                })
            );
        }
    }
}
