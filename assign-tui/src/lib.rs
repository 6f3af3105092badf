//! A terminal form with one controlled Listbox, bound to form state and
//! submitted through a blocking alert.

pub mod config;
pub mod page;
pub mod paths;
pub mod people;
pub mod runtime;

pub use config::{ConfigError, PageConfig};
pub use page::{Flow, Focus, Inputs, Page};
pub use people::{PEOPLE, Person};
pub use runtime::{AppError, run};
