mod consolidate;
mod generate;
mod store;

pub use consolidate::*;
pub use generate::*;
pub use store::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;
        mod sqlite;

        pub use command::*;
        pub use query::*;
        pub use sqlite::*;
    }
}
