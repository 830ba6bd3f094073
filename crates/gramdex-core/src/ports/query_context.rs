//! Query context trait definition.

/// Accessor over the surrounding page/router query parameters.
///
/// The core only needs the `category` parameter as `Option<String>`; how
/// it is carried (URL query string, CLI flag, saved navigation state) is
/// the adapter's concern.
pub trait QueryContext: Send + Sync {
    /// Value of the `category` query parameter, if present.
    fn category_param(&self) -> Option<String>;
}
