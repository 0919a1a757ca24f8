//! End-to-end scenarios across modem and channel

use ping_modem::{
    differential_bits, parse_bits, phases_to_bits, transmit, Coding, FourierDetector, Modulation,
    ModulatorConfig, PhaseDetector,
};

use crate::array::ReceiverArray;
use crate::config::ChannelConfig;
use crate::kinematics::{Platform, Vec3};
use crate::link::LinkScenario;
use crate::propagation::propagate;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn scenario(modulation: Modulation, coding: Coding) -> LinkScenario {
    LinkScenario {
        transmitter: Platform::stationary(Vec3::planar(0.0, 50.0)),
        modulator: ModulatorConfig {
            modulation,
            coding,
            samples_per_bit: 400,
            ..Default::default()
        },
        message: parse_bits("11010100").unwrap(),
        ..Default::default()
    }
}

fn assert_clean(report: &crate::link::LinkReport) {
    for (idx, h) in report.hydrophones.iter().enumerate() {
        assert_eq!(h.recovered, report.sent, "hydrophone {} recovered the wrong message", idx);
        assert_eq!(h.bit_errors, 0);
    }
}

#[test]
fn test_static_psk_recovers_differential_pattern() {
    init_tracing();
    let bits = parse_bits("11010100").unwrap();
    let config = ModulatorConfig::default();
    let wave = transmit(&bits, &config).unwrap();

    let tx = Platform::stationary(Vec3::planar(10.0, 0.0));
    let rx = Platform::default();
    let received = propagate(&wave, &tx, &rx, ChannelConfig::default().wave_speed).unwrap();

    let detector = FourierDetector::for_carrier(10_000.0, 1000.0).unwrap();
    let recovered = phases_to_bits(&detector.phase_shifts(&received));
    assert_eq!(recovered, vec![0, 1, 1, 1, 1, 1, 0]);
    assert_eq!(recovered, differential_bits(&bits).unwrap());
}

#[test]
fn test_psk_link() {
    init_tracing();
    let report = scenario(Modulation::psk(10_000.0), Coding::None).run().unwrap();
    assert_eq!(report.hydrophones.len(), 4);
    assert_clean(&report);
}

#[test]
fn test_fsk_link() {
    init_tracing();
    let fsk = Modulation::Fsk {
        freq0: 8_000.0,
        freq1: 12_000.0,
    };
    let report = scenario(fsk, Coding::None).run().unwrap();
    assert_clean(&report);
}

#[test]
fn test_qpsk_link() {
    init_tracing();
    let report = scenario(Modulation::qpsk(10_000.0), Coding::None).run().unwrap();
    assert_clean(&report);
}

#[test]
fn test_hamming_link() {
    init_tracing();
    let report = scenario(Modulation::psk(10_000.0), Coding::Hamming { n: 3 }).run().unwrap();
    assert_clean(&report);
}

#[test]
fn test_repetition_fsk_link() {
    init_tracing();
    let fsk = Modulation::Fsk {
        freq0: 8_000.0,
        freq1: 12_000.0,
    };
    let report = scenario(fsk, Coding::Repetition { repetitions: 3 }).run().unwrap();
    assert_clean(&report);
}

#[test]
fn test_doppler_link() {
    init_tracing();
    let mut link = scenario(Modulation::psk(10_000.0), Coding::None);
    // closing at 2 m/s
    link.transmitter = Platform::new(Vec3::planar(0.0, 50.0), Vec3::planar(0.0, -2.0));
    let report = link.run().unwrap();
    assert_clean(&report);
}

#[test]
fn test_noisy_link() {
    init_tracing();
    let mut link = scenario(Modulation::psk(10_000.0), Coding::None);
    link.transmitter = Platform::stationary(Vec3::planar(0.0, 10.0));
    link.channel = ChannelConfig {
        noise_variance: 1e-4,
        seed: 42,
        ..Default::default()
    };
    let first = link.run().unwrap();
    assert_clean(&first);
    // same seed, same noise
    assert_eq!(link.run().unwrap(), first);
}

#[test]
fn test_doa_points_to_starboard_source() {
    init_tracing();
    let link = LinkScenario {
        transmitter: Platform::stationary(Vec3::planar(100.0, 0.0)),
        array: ReceiverArray::new(Platform::default(), Vec3::planar(0.0, 1.0), 0.02),
        ..scenario(Modulation::psk(10_000.0), Coding::None)
    };
    let report = link.run().unwrap();
    assert!(report.doa.x > 0.95, "expected starboard bearing, got {:?}", report.doa);
    assert!(report.doa.y.abs() < 0.1, "unexpected forward component {:?}", report.doa);
}

#[test]
fn test_doa_points_ahead() {
    init_tracing();
    let report = scenario(Modulation::psk(10_000.0), Coding::None).run().unwrap();
    assert!(report.doa.y > 0.95, "expected forward bearing, got {:?}", report.doa);
    assert!(report.doa.x.abs() < 0.1);
}
