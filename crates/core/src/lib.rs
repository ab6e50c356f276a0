mod clients;
mod logic;
mod models;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::clients::*;
    pub use crate::logic::*;
    pub use crate::models::*;

    // Third Party Crates
    pub use async_trait::async_trait;
    pub use bon::Builder;
    pub use derive_more::From;
    pub use getset::{CopyGetters, Getters};
    pub use log::{debug, error, info, warn};
    pub use url::Url;
}
