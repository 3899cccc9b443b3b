//! Extensions around the remote event feed: the feed fetcher and the
//! image field formatter shown next to it.

pub mod fetcher;
pub mod formatter;
pub mod transport;

pub use fetcher::{EventsFetcher, FetchError};
pub use formatter::{ImageItem, ImgWrapperFormatter};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
