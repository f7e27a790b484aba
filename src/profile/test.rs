use super::*;
use crate::scoredata::ScoreDataError;

#[test]
fn transition_order() {
    for (i, kind) in Transition::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(kind), i);
        assert_eq!(Transition::try_from(i), Ok(kind));
    }
    assert_eq!(Transition::try_from(NUM_TRANSITIONS), Err(NUM_TRANSITIONS));
    assert_eq!(Transition::try_from(usize::MAX), Err(usize::MAX));
    assert_eq!(Transition::MatchInsert.label(), "MI");
    assert_eq!(Transition::InsertInsert.label(), "II");
}

#[test]
fn empty_profile() {
    assert_eq!(Profile::new(Alphabet::DNA, 0), Err(ScoreDataError::EmptyModel));
}

#[test]
fn oversized_profile() {
    assert_eq!(Profile::new(Alphabet::DNA, usize::MAX), Err(ScoreDataError::OutOfMemory));
    assert_eq!(Profile::new(Alphabet::AMINO, usize::MAX / 16), Err(ScoreDataError::OutOfMemory));
    assert_eq!(Profile::new(Alphabet::DNA, usize::MAX / 20), Err(ScoreDataError::OutOfMemory));
}

#[test]
fn setters_and_getters() {
    let mut profile = Profile::new(Alphabet::DNA, 3).unwrap();
    profile.set_ssv_score(2, 1, 17);
    profile.set_match_score(2, 1, -0.5);
    profile.set_forward_emission(3, 17, 0.25);
    profile.set_insert_rates(1, 0.1, 0.5);

    assert_eq!(profile.ssv_score(2, 1), 17);
    assert_eq!(profile.ssv_score(2, 0), 0);
    assert!((profile.match_score(2, 1) + 0.5).abs() < f32::EPSILON);
    assert!((profile.forward_emission(3, 17) - 0.25).abs() < f32::EPSILON);
    assert!((profile.transition(1, Transition::MatchInsert) - 0.1).abs() < f32::EPSILON);
    assert!((profile.transition(1, Transition::InsertInsert) - 0.5).abs() < f32::EPSILON);
    assert_eq!(SsvProfile::model_len(&profile), 3);
}

#[test]
#[should_panic(expected = "out of range")]
fn setter_out_of_range() {
    let mut profile = Profile::new(Alphabet::DNA, 3).unwrap();
    profile.set_ssv_score(4, 0, 1);
}

#[cfg(feature = "rand")]
mod sampled {
    use super::*;

    #[test]
    fn reproducible() {
        let a = Profile::sample(Alphabet::AMINO, 50, 7).unwrap();
        let b = Profile::sample(Alphabet::AMINO, 50, 7).unwrap();
        let c = Profile::sample(Alphabet::AMINO, 50, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn insert_rates_inside_unit_interval() {
        let profile = Profile::sample(Alphabet::DNA, 200, 42).unwrap();
        for pos in 1..200 {
            let mi = profile.transition(pos, Transition::MatchInsert);
            let ii = profile.transition(pos, Transition::InsertInsert);
            assert!(mi > 0.0 && mi < 1.0);
            assert!(ii > 0.0 && ii < 1.0);
        }
        assert!(profile.transition(0, Transition::MatchInsert).abs() < f32::EPSILON);
        assert!(profile.transition(200, Transition::InsertInsert).abs() < f32::EPSILON);
    }

    #[test]
    fn quantized_scores_follow_raw_order() {
        let profile = Profile::sample(Alphabet::DNA, 20, 3).unwrap();
        for pos in 1..=20 {
            for x in 0..4 {
                for y in 0..4 {
                    if profile.match_score(pos, x) < profile.match_score(pos, y) {
                        assert!(profile.ssv_score(pos, x) <= profile.ssv_score(pos, y));
                    }
                }
            }
        }
    }
}
