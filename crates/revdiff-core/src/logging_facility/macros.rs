//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use revdiff_core::log_op_start;
/// log_op_start!("format_revision");
/// log_op_start!("format_revision", revision_id = 42);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = revdiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = revdiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use revdiff_core::log_op_end;
/// log_op_end!("format_revision", formatted_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = revdiff_core_types::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = revdiff_core_types::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use revdiff_core::{log_op_error, errors::DiffError};
/// let err = DiffError::InvalidSnapshot { message: "not an object".to_string() };
/// log_op_error!("compute_changes", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let err: &$crate::errors::DiffError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = revdiff_core_types::schema::EVENT_END_ERROR,
            err.code = err.code(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let err: &$crate::errors::DiffError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = revdiff_core_types::schema::EVENT_END_ERROR,
            err.code = err.code(),
            $($field)*
        );
    }};
}
