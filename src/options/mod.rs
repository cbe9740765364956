//! Job options: the registry of known options, their values and the
//! changed-from-default tracking that drives argument compilation.

mod registry;
mod store;
mod value;

pub use registry::{find_option, is_internal, DefaultValue, OptionDef, INTERNAL_OPTIONS, OPTIONS};
pub use store::{OptionError, OptionStore};
pub use value::{OptionKind, OptionValue};
