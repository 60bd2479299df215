/// State management module
///
/// This module holds the observable viewer state:
/// - the displayed image, loading flag, and error message (viewer.rs)
/// - the pure projection the renderer consumes (viewer.rs)

pub mod viewer;
