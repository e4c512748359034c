mod http_source;
mod traits;

pub use http_source::HttpSource;
pub use traits::DatasetSource;
#[cfg(test)]
pub use traits::FetchedFile;
