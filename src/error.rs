// context-info/src/error.rs
//
//! Various errors that methods can produce.

/// Various errors that methods can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The driver returned an empty `GL_VERSION` string.
    ///
    /// This usually means there is no current context on the calling thread.
    NoVersionString,
    /// The `GL_VERSION` string couldn't be parsed into a major and minor version.
    MalformedVersionString(String),
}
