//! Error macros for pathfind

/// Return early with an invalid value error
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathfindError::invalid_value($context, $value))
    };
}

/// Return early with an unsupported value error
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::PathfindError::unsupported(
            $context, $value, $supported,
        ))
    };
}
