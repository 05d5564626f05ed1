mod genome;
mod sam;

pub use genome::read_reference;
pub use sam::read_sam_records;
