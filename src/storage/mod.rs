mod s3_sink;
mod traits;
mod utils;

pub use s3_sink::S3Sink;
pub use traits::ObjectSink;
pub use utils::create_s3_client;
