//! Acoustic Channel - Underwater propagation for the ping modem testbed
//!
//! Moves waveforms from a transmitting platform to a receiving one with
//! straight-line kinematics, Doppler from the changing path length, 1/r
//! attenuation, and seeded Gaussian noise. A four-hydrophone square array
//! feeds the direction-of-arrival estimator, and `LinkScenario` runs the
//! whole ping-then-message exchange.

pub mod array;
pub mod config;
pub mod error;
pub mod kinematics;
pub mod link;
pub mod noise;
pub mod propagation;

#[cfg(test)]
mod link_tests;

pub use array::{propagate_to_array, ArrayReception, ReceiverArray};
pub use config::ChannelConfig;
pub use error::{ChannelError, ChannelResult};
pub use kinematics::{Platform, Vec3};
pub use link::{count_bit_errors, HydrophoneReport, LinkReport, LinkScenario};
pub use noise::NoiseGenerator;
pub use propagation::propagate;
