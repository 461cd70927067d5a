//! SQL syntax highlighting and re-flowing for display.
//!
//! ```rust
//! use sqlprism::prelude::*;
//!
//! let tokens = classify("SELECT COUNT(id) FROM t", WordSet::keywords(), WordSet::functions());
//! assert!(tokens.iter().any(|t| t.text == "COUNT" && t.is(Category::Function)));
//!
//! assert_eq!(
//!     format("SELECT a, b FROM t WHERE a=1"),
//!     "SELECT a,\n    b\nFROM t\nWHERE a=1"
//! );
//! ```

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(render);
reexport!(formatter);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
