//! # Predictor Wrapper Tests
//!
//! Tests for configuration-driven construction and static dispatch.

use bpsim_core::common::bit::{BranchInstruction, BranchResult};
use bpsim_core::common::error::PredictorError;
use bpsim_core::config::{Config, PredictorKind};
use bpsim_core::core::bru::{BranchPredictor, BranchPredictorWrapper};

fn instruction(pc: u64) -> BranchInstruction {
    BranchInstruction::from_pc(pc, 8)
}

#[test]
fn test_default_config_builds_gag() {
    let predictor = BranchPredictorWrapper::new(&Config::default()).unwrap();
    assert!(matches!(predictor, BranchPredictorWrapper::GAg(_)));
}

#[test]
fn test_each_kind_builds_its_variant() {
    let mut config = Config::default();

    config.predictor = PredictorKind::PAg;
    let predictor = BranchPredictorWrapper::new(&config).unwrap();
    assert!(matches!(predictor, BranchPredictorWrapper::PAg(_)));

    config.predictor = PredictorKind::PAp;
    let predictor = BranchPredictorWrapper::new(&config).unwrap();
    assert!(matches!(predictor, BranchPredictorWrapper::PAp(_)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config {
        bhr_size: 0,
        ..Config::default()
    };
    assert!(matches!(
        BranchPredictorWrapper::new(&config),
        Err(PredictorError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_dispatch_predict_and_update() {
    let mut config = Config::default();
    config.predictor = PredictorKind::PAp;
    let mut predictor = BranchPredictorWrapper::new(&config).unwrap();
    let inst = instruction(17);

    assert_eq!(predictor.predict(&inst), BranchResult::NotTaken);
    predictor.update(&inst, BranchResult::Taken).unwrap();
    assert_eq!(predictor.predict(&inst), BranchResult::NotTaken);
}

#[test]
fn test_monitor_names_the_scheme() {
    for (kind, heading) in [
        (PredictorKind::GAg, "GAg predictor snapshot"),
        (PredictorKind::PAg, "PAg predictor snapshot"),
        (PredictorKind::PAp, "PAp predictor snapshot"),
    ] {
        let config = Config {
            predictor: kind,
            ..Config::default()
        };
        let predictor = BranchPredictorWrapper::new(&config).unwrap();
        assert!(predictor.monitor().contains(heading));
    }
}

#[test]
fn test_wrapper_predictions_match_trained_state() {
    let config = Config {
        predictor: PredictorKind::GAg,
        bhr_size: 2,
        ..Config::default()
    };
    let mut predictor = BranchPredictorWrapper::new(&config).unwrap();
    let inst = instruction(0);

    // Saturate the short history, then train its pattern to taken.
    for _ in 0..5 {
        let _ = predictor.predict(&inst);
        predictor.update(&inst, BranchResult::Taken).unwrap();
    }
    assert_eq!(predictor.predict(&inst), BranchResult::Taken);
}
