//! Compares ways of sampling points on the unit sphere: a PCG style hash chain,
//! `rand`'s uniform generator and the Halton low-discrepancy sequence.

mod camera;
mod config;
mod display;
mod error;
mod method;
mod pcg;
mod result_ext;
mod sampling;
mod sketch;
mod sphere;
mod uniform;
mod viewer;

pub use config::Config;
pub use display::{DEFAULT_POINT_COLOR, PointCloudSink, PointSet, RecordingSink, ViewLayout};
pub use error::SamplingError;
pub use method::{SamplingMethod, Samplers};
pub use pcg::{DEFAULT_SEED, PcgRng, pcg_hash};
pub use result_ext::ResultExt;
pub use sampling::{halton, halton_sequence};
pub use sketch::run_sketch;
pub use sphere::{SamplePairs, project_to_sphere, sphere_point};
pub use uniform::UniformSource;
pub use viewer::Viewer;
