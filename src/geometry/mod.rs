mod segment;

pub use segment::Segment;
