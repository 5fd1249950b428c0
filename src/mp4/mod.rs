pub mod atom;
pub use atom::{scan_for_atom, AtomPayload, AtomType};
pub mod mvhd;
pub use mvhd::{read_mvhd_duration, MediaDuration};
pub mod duration;
pub use duration::duration_from_stream;
