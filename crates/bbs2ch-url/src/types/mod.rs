pub mod fields;
pub mod info;
pub mod site;

pub use fields::Fields;
pub use info::UrlInfo;
pub use site::{Tld, UrlKind};
