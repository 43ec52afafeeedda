//! Physical type layer for parquet.
//!
//! Everything a column's values ultimately reduce to lives here: the
//! physical type codes and their in-memory sizes, the packed `Int96`
//! timestamp, borrowed byte array views, zero-copy reinterpretation of raw
//! buffers, column paths, and the wire enumerations shared with the thrift
//! metadata.
pub mod byte_array;
pub mod cast;
pub mod cipher;
pub mod column_order;
pub mod column_path;
pub mod encoding;
pub mod int96;
pub mod physical_type;
pub mod repetition;
pub mod thrift_ext;
pub mod version;

pub use byte_array::{
    ByteArray, ByteArrayDescriptor, FixedLenByteArray, FixedLenByteArrayDescriptor,
    VIEW_DESCRIPTOR_SIZE,
};
pub use cast::ByteCast;
pub use column_path::ColumnPath;
pub use int96::Int96;
pub use physical_type::PhysicalType;
