//! Extension traits for working with containers.
//!
//! - [`ResultExt`]: wraps the error of any `Result` into a stamped [`Container`](crate::Container)
//!
//! # Examples
//!
//! ```
//! use error_stamp::traits::ResultExt;
//! use error_stamp::Severity;
//!
//! let result: Result<u8, std::num::ParseIntError> = "300".parse::<u8>();
//! let err = result.ctx(Severity::ERROR, "parsing port").unwrap_err();
//! assert_eq!(err.message(), "parsing port");
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
