pub mod cdp;
pub mod traits;

pub use cdp::CdpBrowser;
pub use traits::{BrowserHost, Tab};
